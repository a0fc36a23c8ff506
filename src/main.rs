//! Kover - Entry Point
//!
//! Reads a scene on stdin and runs one subcommand over it.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use kover::core::{KoverConfig, Result};
use kover::coverage::CoverageEvaluator;
use kover::report;
use kover::scene::{load_from_reader, Scene};
use kover::spatial::ValidationReport;

const SCENE_SYNTAX: &str = "\
A scene is a text stream read on stdin that must satisfy the following syntax:

  1. The first line must be exactly 'begin scene'
  2. The last line must be exactly 'end scene'
  3. Any line between the first and last line must either be a building line,
     a house line, or an antenna line
  4. A building line has the form 'building ID X Y W H' (with any number of
     blank characters before or after), where
       ID is the building identifier
       X and Y are the coordinates of the building's center
       W and H are the half-width and half-height of the building
  5. A house line has the form 'house ID X Y W H', with the same fields
  6. An antenna line has the form 'antenna ID X Y R', where
       ID is the antenna identifier
       X and Y are the coordinates of the antenna
       R is the range of the antenna";

/// Handles positioning of communication antennas by reading a scene on stdin
#[derive(Parser, Debug)]
#[command(name = "kover")]
#[command(about = "Handles positioning of communication antennas by reading a scene on stdin")]
#[command(after_long_help = SCENE_SYNTAX)]
struct Args {
    /// Optional TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Returns a bounding box of the loaded scene
    BoundingBox,
    /// Describes the loaded scene in details
    Describe,
    /// Evaluates the coverage quality of buildings and houses
    Quality,
    /// Summarizes the loaded scene
    Summarize,
    /// Validates the scene and reports if it's valid
    Validate,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the scene from stdin and reject it on the first geometric violation
fn load_valid_scene() -> Result<Scene> {
    let scene = load_from_reader(io::stdin().lock())?;
    ValidationReport::for_scene(&scene).into_result()?;
    Ok(scene)
}

fn run(command: Command, config: &KoverConfig) -> Result<()> {
    let scene = load_valid_scene()?;
    match command {
        Command::BoundingBox => println!("{}", report::bounding_box_line(scene.bounding_box())),
        Command::Describe => {
            for line in report::describe_lines(&scene) {
                println!("{}", line);
            }
        }
        Command::Quality => {
            let evaluator = CoverageEvaluator::new(config.coverage.boundary);
            for entry in evaluator.quality_report(&scene) {
                println!("{}", report::quality_line(&entry));
            }
        }
        Command::Summarize => println!("{}", report::summary_line(&scene.summary())),
        Command::Validate => println!("ok"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config.as_deref().map(KoverConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);
    tracing::debug!(command = ?args.command, "starting");

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_validation() {
                println!("not ok");
            }
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
