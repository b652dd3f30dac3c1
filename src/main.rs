use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use atmocalc::io::{csv, json};
use atmocalc::{evaluate_text, profile, ProfileConfig, Report};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every parameter at one altitude
    At {
        /// Geometric altitude in meters, within [-2000; 1200000]
        #[arg(allow_hyphen_values = true)]
        height: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Tabulate the model over a range of altitudes
    Profile {
        /// TOML file with `start`, `end` and `step` (meters)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        start: Option<f64>,

        #[arg(long)]
        end: Option<f64>,

        #[arg(long)]
        step: Option<f64>,

        #[arg(short, long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    // Default log level to "warn"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::At { height, json } => {
            let report = evaluate_text(&height)?;
            if json {
                json::write_report(io::stdout().lock(), &report)?;
                println!();
            } else {
                print_report(&report);
            }
        }
        Command::Profile {
            config,
            start,
            end,
            step,
            format,
            output,
        } => {
            let mut sweep = match &config {
                Some(path) => ProfileConfig::load(path)?,
                None => ProfileConfig::default(),
            };
            sweep.start = start.unwrap_or(sweep.start);
            sweep.end = end.unwrap_or(sweep.end);
            sweep.step = step.unwrap_or(sweep.step);

            let reports = profile(&sweep)?;
            info!("Computed {} altitudes", reports.len());

            match (format, output) {
                (Format::Csv, Some(path)) => csv::write_profile_file(&path, &reports)?,
                (Format::Json, Some(path)) => json::write_profile_file(&path, &reports)?,
                (Format::Csv, None) => csv::write_profile(io::stdout().lock(), &reports)?,
                (Format::Json, None) => {
                    let mut stdout = io::stdout().lock();
                    json::write_profile(&mut stdout, &reports)?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!();
    println!("  Altitude {} m", report.altitude);
    println!("  ──────────────────────────────────");
    for (symbol, value, unit) in report.rows() {
        println!("  {symbol:<4} = {value:>12}  {unit}");
    }
    println!();
}
