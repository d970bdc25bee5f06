//! skirmish-bench: play the engagement controller against scripted opponents.
//!
//! Usage:
//!   skirmish-bench --rounds 10 --seed 7 --opponents sitting_duck,chaser
//!   skirmish-bench --config controller.json --ticks 2000
//!
//! Prints the battle report as JSON on stdout. Set `RUST_LOG=info` for a
//! per-round summary, `debug` for target and strategy decisions.

use std::fs;
use std::process;

use log::info;

use skirmish_arena::brains::Brain;
use skirmish_arena::{run_battle, BattleSpec};
use skirmish_controller::{ControllerConfig, EngagementController};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match value_of(&args, "--config") {
        Some(path) => load_config(path),
        None => ControllerConfig::default(),
    };

    let mut spec = BattleSpec::default();
    if let Some(rounds) = parse_number(&args, "--rounds") {
        spec.rounds = rounds;
    }
    if let Some(seed) = parse_number(&args, "--seed") {
        spec.arena.seed = seed;
    }
    if let Some(ticks) = parse_number(&args, "--ticks") {
        spec.arena.tick_limit = ticks;
    }
    if let Some(list) = value_of(&args, "--opponents") {
        spec.opponents = parse_opponents(list);
    }

    info!(
        "{} rounds against [{}], arena seed {}, controller seed {}",
        spec.rounds,
        spec.opponents
            .iter()
            .map(Brain::name)
            .collect::<Vec<_>>()
            .join(", "),
        spec.arena.seed,
        config.seed
    );

    let mut controller = EngagementController::new(config);
    let report = run_battle(&mut controller, &spec);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to serialize report: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "skirmish-bench: SKIRMISH engagement controller bench\n\
         \n\
         Options:\n\
         \n\
           --rounds <N>        Rounds to play (default: 10)\n\
           --seed <N>          Arena seed of the first round (default: 42)\n\
           --ticks <N>         Tick limit per round (default: 4000)\n\
           --opponents <list>  Comma-separated: sitting_duck, circler, wall_walker, chaser\n\
                               (default: sitting_duck)\n\
           --config <path>     Controller configuration (JSON)\n"
    );
}

fn value_of<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = value_of(args, flag)?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            eprintln!("Error: {flag} expects a number, got {raw:?}");
            process::exit(1);
        }
    }
}

fn parse_opponents(list: &str) -> Vec<Brain> {
    let mut opponents = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match Brain::from_name(name) {
            Some(brain) => opponents.push(brain),
            None => {
                eprintln!("Error: unknown opponent {name:?}");
                print_usage();
                process::exit(1);
            }
        }
    }
    if opponents.is_empty() {
        eprintln!("Error: --opponents needs at least one opponent");
        process::exit(1);
    }
    opponents
}

fn load_config(path: &str) -> ControllerConfig {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read {path}: {e}");
            process::exit(1);
        }
    };
    match ControllerConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid config {path}: {e}");
            process::exit(1);
        }
    }
}
