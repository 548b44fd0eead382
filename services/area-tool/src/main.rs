//! Area definition tool.
//!
//! Inspects area definition files and computes linesample arrays
//! (per-target-pixel source row/column indices) between two areas:
//! - `list`: print areas from a file as JSON
//! - `linesample`: map target pixels onto a source grid, quick or nearest neighbour

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::{Method, ToolConfig, DEFAULT_RADIUS_OF_INFLUENCE};

#[derive(Parser, Debug)]
#[command(name = "area-tool")]
#[command(about = "Area definition files and linesample arrays")]
struct Args {
    /// Log level
    #[arg(long, env = "AREA_LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "AREA_LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print areas from an area file as a JSON array
    List {
        /// Area definition file
        #[arg(short, long, env = "AREA_FILE")]
        file: PathBuf,

        /// Area ids to print (default: all, in file order)
        names: Vec<String>,
    },

    /// Compute linesample arrays from a source area to a target area
    Linesample {
        /// Area definition file holding both areas
        #[arg(env = "AREA_FILE")]
        file: PathBuf,

        /// Source area id
        #[arg(long)]
        source: String,

        /// Target area id
        #[arg(long)]
        target: String,

        /// Matching method
        #[arg(long, value_enum, default_value = "quick")]
        method: Method,

        /// Radius of influence in meters (nearest only)
        #[arg(long, env = "AREA_RADIUS_OF_INFLUENCE", default_value_t = DEFAULT_RADIUS_OF_INFLUENCE)]
        radius: f64,

        /// Worker threads
        #[arg(long, env = "AREA_NPROCS", default_value = "1")]
        nprocs: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries results, logs go to stderr
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json)?;

    match args.command {
        Command::List { file, names } => {
            let stdout = std::io::stdout();
            commands::list_areas(&file, &names, &mut stdout.lock())?;
        }
        Command::Linesample {
            file,
            source,
            target,
            method,
            radius,
            nprocs,
            output,
        } => {
            let config = ToolConfig {
                area_file: file,
                source,
                target,
                method,
                radius_of_influence: radius,
                nprocs,
                output,
            };
            info!(file = %config.area_file.display(), "Starting linesample");

            let grid = commands::compute_linesample(&config)?;
            commands::write_grid(&grid, config.output.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_linesample_args() {
        let args = Args::try_parse_from([
            "area-tool",
            "linesample",
            "areas.def",
            "--source",
            "euro_stere",
            "--target",
            "scan_ll",
            "--method",
            "nearest",
            "--radius",
            "25000",
            "--nprocs",
            "4",
        ])
        .unwrap();

        match args.command {
            Command::Linesample { file, source, target, method, radius, nprocs, output } => {
                assert_eq!(file, PathBuf::from("areas.def"));
                assert_eq!(source, "euro_stere");
                assert_eq!(target, "scan_ll");
                assert_eq!(method, Method::Nearest);
                assert_eq!(radius, 25000.0);
                assert_eq!(nprocs, 4);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_args() {
        let args = Args::try_parse_from([
            "area-tool", "--log-level", "debug", "list", "a", "--file", "areas.def", "b",
        ])
        .unwrap();
        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::List { file, names } => {
                assert_eq!(file, PathBuf::from("areas.def"));
                // Every positional is an area id, never the file
                assert_eq!(names, vec!["a", "b"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        let result = Args::try_parse_from([
            "area-tool", "linesample", "areas.def", "--source", "a", "--target", "b", "--method", "bilinear",
        ]);
        assert!(result.is_err());
    }
}
