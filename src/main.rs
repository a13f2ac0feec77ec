//! Galaxy Warfare - Entry Point
//!
//! Reads a deployment header and stream from a file or stdin, runs the day,
//! and prints the report to stdout. Diagnostics go to stderr via tracing.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use galaxy_warfare::core::config::{GalaxyConfig, SimulationOptions};
use galaxy_warfare::core::error::Result;
use galaxy_warfare::input;
use galaxy_warfare::simulation::{ConsoleSink, Report, ReportSink, Simulation};
use tracing_subscriber::EnvFilter;

/// Jedi vs Sith deployment simulator
#[derive(Parser, Debug)]
#[command(name = "galaxy")]
#[command(about = "Simulate a day of Jedi and Sith deployments across the galaxy")]
struct Args {
    /// Print a line for every battle
    #[arg(short, long)]
    verbose: bool,

    /// Print median troops lost per planet whenever time advances
    #[arg(short, long)]
    median: bool,

    /// Print troop deployment and survival under each general
    #[arg(short = 'g', long = "general-eval")]
    general_eval: bool,

    /// Print the most interesting ambush and attack per planet
    #[arg(short, long)]
    watcher: bool,

    /// TOML file with [report] toggles and [generator] bounds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

impl Args {
    fn options(&self) -> SimulationOptions {
        SimulationOptions {
            verbose: self.verbose,
            median: self.median,
            general_eval: self.general_eval,
            watcher: self.watcher,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("galaxy_warfare=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("run aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GalaxyConfig::load(path)?,
        None => GalaxyConfig::default(),
    };
    let options = config.report.merge(args.options());
    tracing::info!(?options, "Galaxy Warfare starting...");

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut sink = ConsoleSink::new(BufWriter::new(stdout.lock()));
    sink.emit(&Report::DeploymentStarted)?;

    let (header, stream) = match input::open(reader, config.generator) {
        Ok(opened) => opened,
        Err(e) => {
            sink.finish()?;
            return Err(e);
        }
    };

    let mut simulation = Simulation::new(header.num_generals, header.num_planets, options, &mut sink);
    let outcome = simulation.run(stream);
    // Whatever was reported before a fatal error still reaches stdout
    sink.finish()?;
    let summary = outcome?;

    if let Some(path) = &args.summary_json {
        std::fs::write(path, summary.to_json()?)?;
        tracing::info!("Run summary written to {:?}", path);
    }
    Ok(())
}
