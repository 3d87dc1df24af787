//! Enum lesson: constants that carry their own data.
//!
//! Run with: cargo run --bin enums -- --light YELLOW --steps 6

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use oop_lessons::logging;
use oop_lessons::traffic_light::{ParseLightError, TrafficLight};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(about = "Traffic lights as an enum with per-constant data")]
struct Cli {
    /// Constant to look up by name
    #[arg(long, default_value = "GREEN")]
    light: String,

    /// How many lights to show when cycling from RED
    #[arg(long, default_value_t = 4)]
    steps: usize,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,
}

#[derive(Error, Debug)]
enum LessonError {
    #[error(transparent)]
    Light(#[from] ParseLightError),

    #[error("failed to write lesson output: {0}")]
    Io(#[from] io::Error),
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), LessonError> {
    // Resolve the requested light before printing anything
    let chosen: TrafficLight = cli.light.parse()?;

    // 1) The data each constant carries
    writeln!(out, "{}", "All lights with their data:".bold())?;
    for light in TrafficLight::ALL {
        writeln!(out, " - {} | name={} | stop={}", light, light.name(), light.is_stop())?;
    }

    // 2) Lookup by name
    writeln!(out, "\nChosen via parse(\"{}\"): {}", cli.light, chosen)?;
    writeln!(out, "Duration for {}: {} seconds", chosen.label(), chosen.seconds())?;
    writeln!(out, "Is it a stop? {}", chosen.is_stop())?;

    // 3) Computed from the data
    writeln!(out, "\nTotal cycle time: {} seconds", TrafficLight::cycle_seconds())?;

    // 4) State changes via next()
    writeln!(out, "\nCycle through with next():")?;
    for light in TrafficLight::cycle_from(TrafficLight::Red).take(cli.steps) {
        writeln!(out, " Current: {} | stop={}", light, light.is_stop())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init();

    match run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LessonError::Light(err)) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
