use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rope::parser::read_input;
use rope::{parse_motions, Simulation};

/// Counts the cells visited by the last knot of a rope dragged around by its head.
#[derive(Parser, Debug)]
struct Args {
    /// File with one `<direction> <count>` motion per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Number of knots in the rope, head included.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..))]
    knots: u32,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let buffer = read_input(args.input.as_deref())?;
    let motions = parse_motions(&buffer)?;
    info!(motions = motions.len(), knots = args.knots, "parsed input");

    let mut simulation = Simulation::new(args.knots as usize);
    simulation.run(motions);

    let visited = simulation.visits().count();
    info!(visited, tail = ?simulation.rope().tail(), "simulation finished");
    println!("{}", visited);

    Ok(())
}
