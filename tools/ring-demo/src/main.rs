//! ring-demo: headless driver for the orbit ring.
//!
//! Usage:
//!   ring-demo run --config ring.json --ticks 600 --every 60
//!   ring-demo defaults > ring.json

use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use orbit_ring_core::config::{RingConfig, RingSettings};
use orbit_ring_core::constants::{DT, TICK_RATE};
use orbit_ring_core::types::Pose;
use orbit_ring_sim::components::Prefab;
use orbit_ring_sim::{RingController, WorldHost};

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,orbit_ring_sim=debug"));
    fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "ring-demo: orbit ring headless driver\n\
         \n\
         Commands:\n\
         \n\
         run       Drive a ring at {TICK_RATE} Hz and print JSON snapshots to stdout\n\
         \n\
           --config <path>    Ring settings JSON (optional, default settings otherwise)\n\
           --prefab <name>    Template name for ring items (default: item)\n\
           --ticks <N>        Number of ticks to simulate (default: {TICK_RATE})\n\
           --every <K>        Print a snapshot every K ticks (default: {TICK_RATE})\n\
           --drift <x,y,z>    Move the center object by this velocity (units/s)\n\
         \n\
         defaults  Print the default ring settings as JSON\n\
         \n\
         Examples:\n\
         \n\
           ring-demo defaults > ring.json\n\
           ring-demo run --config ring.json --ticks 600 --every 60 --drift 0.5,0,0\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
}

fn parse_count(args: &[String], flag: &str, default: u64) -> u64 {
    match parse_flag(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("Error: {flag} expects a non-negative integer, got {raw}");
            process::exit(1);
        }),
        None => default,
    }
}

fn parse_drift(args: &[String]) -> Option<glam::DVec3> {
    let raw = parse_flag(args, "--drift")?;
    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    match parts.as_slice() {
        [x, y, z] => Some(glam::DVec3::new(*x, *y, *z)),
        _ => None,
    }
}

fn load_settings(args: &[String]) -> RingSettings {
    let Some(path) = parse_flag(args, "--config").map(PathBuf::from) else {
        return RingSettings::default();
    };
    let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        process::exit(1);
    });
    RingSettings::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Error parsing {}: {e}", path.display());
        process::exit(1);
    })
}

fn cmd_defaults() {
    match RingSettings::default().to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing defaults: {e}");
            process::exit(1);
        }
    }
}

fn cmd_run(args: &[String]) {
    let settings = load_settings(args);
    let prefab = Prefab::new(parse_flag(args, "--prefab").unwrap_or("item"));
    let ticks = parse_count(args, "--ticks", TICK_RATE as u64);
    let every = parse_count(args, "--every", TICK_RATE as u64).max(1);
    let drift = parse_drift(args);
    if parse_flag(args, "--drift").is_some() && drift.is_none() {
        eprintln!("Error: --drift expects x,y,z");
        process::exit(1);
    }

    let config = match RingConfig::from_settings(prefab, &settings) {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "invalid ring settings");
            process::exit(1);
        }
    };

    let mut host = WorldHost::new();
    let owner = host.spawn_anchor(Pose::at(settings.center));
    let center = host.spawn_anchor(Pose::at(settings.center));
    let mut ring = RingController::new(host, config, Some(owner));
    if let Err(e) = ring.set_center_object(Some(center)) {
        error!(%e, "could not attach center object");
        process::exit(1);
    }

    info!(
        count = settings.count,
        radius = settings.radius,
        placement = ?settings.placement,
        ticks,
        "starting ring"
    );

    let mut center_position = settings.center;
    for tick in 1..=ticks {
        if let Some(velocity) = drift {
            center_position += velocity * DT;
            ring.factory_mut().move_to(center, center_position);
        }

        ring.tick(DT);
        for event in ring.drain_events() {
            info!(tick, ?event, "ring event");
        }

        if tick % every == 0 {
            let snapshot = ring.snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(%e, "failed to serialize snapshot");
                    process::exit(1);
                }
            }
        }
    }

    let children = ring
        .owner()
        .map_or(0, |owner| ring.factory().children_of(owner).len());
    info!(generation = ring.generation(), children, "done");
}
