//! Terminal front-end for the `heightfield` generator.
//!
//! Generates a height field from command-line parameters, prints an ASCII
//! relief overview, and optionally exports the grid as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use heightfield::config::OVERVIEW_SIZE;
use heightfield::{ascii_map, generate, GenerationParams};

#[derive(Debug)]
struct CliOptions {
    params: GenerationParams,
    overview: usize,
    json: Option<PathBuf>,
    help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            params: GenerationParams::default(),
            overview: OVERVIEW_SIZE,
            json: None,
            help: false,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}\n");
            print_usage();
            return ExitCode::from(2);
        }
    };
    if opts.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let grid = match generate(&opts.params) {
        Ok(grid) => grid,
        Err(e) => {
            error!("generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        size = grid.size(),
        min = grid.min_elevation(),
        max = grid.max_elevation(),
        "generated height field"
    );

    println!("{}", ascii_map::render_overview(&grid, opts.overview));
    println!();
    println!(
        "size {}  seed {}  roughness {}  elevation {:.3} .. {:.3}",
        opts.params.size,
        opts.params.seed,
        opts.params.roughness,
        grid.min_elevation(),
        grid.max_elevation()
    );

    if let Some(path) = &opts.json {
        let json = match serde_json::to_string_pretty(&grid) {
            Ok(json) => json,
            Err(e) => {
                error!("JSON encoding failed: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = std::fs::write(path, json) {
            error!("writing {} failed: {e}", path.display());
            return ExitCode::FAILURE;
        }
        info!("wrote {}", path.display());
    }

    ExitCode::SUCCESS
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => opts.help = true,
            "--size" => opts.params.size = parse_value("--size", iter.next())?,
            "--seed" => opts.params.seed = parse_value("--seed", iter.next())?,
            "--min" => opts.params.min_value = parse_value("--min", iter.next())?,
            "--max" => opts.params.max_value = parse_value("--max", iter.next())?,
            "--roughness" => opts.params.roughness = parse_value("--roughness", iter.next())?,
            "--overview" => opts.overview = parse_value("--overview", iter.next())?,
            "--json" => {
                let path = iter.next().ok_or("--json expects a file path")?;
                opts.json = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(opts)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let raw = value.ok_or_else(|| format!("{flag} expects a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag}: cannot parse '{raw}'"))
}

fn print_usage() {
    println!("landform - fractal height-field preview");
    println!();
    println!("Usage: landform [options]");
    println!("  --size <n>        grid side length, 2^k + 1 (default 257)");
    println!("  --seed <n>        PRNG seed; 0 = non-deterministic (default 0)");
    println!("  --min <f>         lowest corner elevation (default 0.0)");
    println!("  --max <f>         highest corner elevation (default 1.0)");
    println!("  --roughness <f>   noise multiplier, >= 0 (default 0.55)");
    println!("  --overview <n>    max side of the ASCII map (default 64)");
    println!("  --json <path>     export the grid as pretty JSON");
    println!("  --help            show this message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_when_no_args() {
        let opts = parse_args(&[]).unwrap();
        assert_eq!(opts.params, GenerationParams::default());
        assert_eq!(opts.overview, OVERVIEW_SIZE);
        assert!(opts.json.is_none());
        assert!(!opts.help);
    }

    #[test]
    fn test_all_flags_parsed() {
        let opts = parse_args(&args(&[
            "--size",
            "65",
            "--seed",
            "42",
            "--min",
            "-0.5",
            "--max",
            "2.5",
            "--roughness",
            "0.8",
            "--overview",
            "32",
            "--json",
            "out.json",
        ]))
        .unwrap();
        assert_eq!(opts.params.size, 65);
        assert_eq!(opts.params.seed, 42);
        assert_eq!(opts.params.min_value, -0.5);
        assert_eq!(opts.params.max_value, 2.5);
        assert_eq!(opts.params.roughness, 0.8);
        assert_eq!(opts.overview, 32);
        assert_eq!(opts.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(parse_args(&args(&["--size"])).is_err());
        assert!(parse_args(&args(&["--json"])).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("--frobnicate"));
    }

    #[test]
    fn test_unparsable_value_rejected() {
        let err = parse_args(&args(&["--size", "banana"])).unwrap_err();
        assert!(err.contains("banana"));
    }
}
