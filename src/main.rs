//! Galaxy slicer command-line front end.
//!
//! Loads a tile catalog, generates balanced slices and prints them.
//!
//! Usage:
//!   galaxy-slicer [OPTIONS]
//!
//! Options:
//!   --tiles PATH        Tile catalog (default: data/tiles.json)
//!   --planets PATH      Planet catalog (default: data/planets.json)
//!   --seed N            Random seed, 0 for entropy (default: 0)
//!   --max-passes N      Rebalancing passes per deal (default: 100)
//!   --max-attempts N    Deals tried before giving up (default: 64)
//!   --players N         Number of players (default: 6)
//!   --json              Print JSON instead of text
//!   --quiet             Only log errors

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use galaxy_slicer::catalog::load_catalog;
use galaxy_slicer::generate::{self, GeneratorConfig};
use galaxy_slicer::report;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = GeneratorConfig::default();
    let mut tiles_path = PathBuf::from("data/tiles.json");
    let mut planets_path = PathBuf::from("data/planets.json");
    let mut json = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tiles" => tiles_path = PathBuf::from(value(&args, &mut i)),
            "--planets" => planets_path = PathBuf::from(value(&args, &mut i)),
            "--seed" => config.seed = parse(&args, &mut i),
            "--max-passes" => config.max_passes = parse(&args, &mut i),
            "--max-attempts" => config.max_attempts = parse(&args, &mut i),
            "--players" => config.players = parse(&args, &mut i),
            "--json" => json = true,
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let default_level = if quiet { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = match load_catalog(&tiles_path, &planets_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let result = match generate::generate(&catalog, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = if json {
        report::write_json(&result, &mut out)
    } else {
        report::print_slices(&result.slices, &mut out)
    };
    if let Err(e) = written {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
}

/// Returns the value following the flag at `args[*i]`, advancing `i`.
fn value(args: &[String], i: &mut usize) -> String {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn parse<T: FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = args[*i].clone();
    let raw = value(args, i);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid {} value: {}", flag, raw);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: galaxy-slicer [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tiles PATH        Tile catalog (default: data/tiles.json)");
    eprintln!("  --planets PATH      Planet catalog (default: data/planets.json)");
    eprintln!("  --seed N            Random seed, 0 for entropy (default: 0)");
    eprintln!("  --max-passes N      Rebalancing passes per deal (default: 100)");
    eprintln!("  --max-attempts N    Deals tried before giving up (default: 64)");
    eprintln!("  --players N         Number of players (default: 6)");
    eprintln!("  --json              Print JSON instead of text");
    eprintln!("  --quiet             Only log errors");
    eprintln!("  --help              Show this help");
}
