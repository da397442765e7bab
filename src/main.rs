//! Command line navigation between the main cities of Java.
//!
//! Missing arguments are asked interactively on the terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use cityroute::{Criterion, ShortestPathConfig, seed};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Finds the shortest route between two cities by distance, travel time or fuel consumption.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin city, case-insensitive.
    #[arg(short, long)]
    from: Option<String>,

    /// Destination city, case-insensitive.
    #[arg(short, long)]
    to: Option<String>,

    /// Criterion to minimize: `distance`, `time`, `fuel` or the menu choice 1, 2, 3.
    #[arg(short, long, value_parser = parse_criterion)]
    criterion: Option<Criterion>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

fn parse_criterion(s: &str) -> Result<Criterion, String> {
    match s.trim().parse::<u8>() {
        Ok(choice) => Criterion::from_choice(choice),
        Err(_) => Criterion::parse(s),
    }
    .map_err(|e| e.to_string())
}

fn setup_logging(verbosity: &str) {
    let filter = EnvFilter::try_new(verbosity).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input");
    }

    Ok(line.trim().to_owned())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.verbosity);

    let network = seed::java_network()?;
    info!(
        "Loaded {} cities and {} routes",
        network.city_count(),
        network.route_count()
    );

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let cities: Vec<_> = network.cities().map(|(_, city)| city.name()).collect();
    writeln!(output, "Intercity navigation")?;
    writeln!(output, "Available cities: {}", cities.join(", "))?;

    let from = match args.from {
        Some(from) => from,
        None => prompt(&mut input, &mut output, "Origin city: ")?,
    };
    let to = match args.to {
        Some(to) => to,
        None => prompt(&mut input, &mut output, "Destination city: ")?,
    };

    let origin = network.resolve(&from)?;
    let destination = network.resolve(&to)?;

    let criterion = match args.criterion {
        Some(criterion) => criterion,
        None => {
            writeln!(output, "\nShortest route by:")?;
            writeln!(output, "1. Distance")?;
            writeln!(output, "2. Travel time")?;
            writeln!(output, "3. Fuel consumption")?;
            let choice = prompt(&mut input, &mut output, "Choice (1-3): ")?;
            parse_criterion(&choice).map_err(anyhow::Error::msg)?
        }
    };

    let config = ShortestPathConfig::new(criterion);
    let trip = cityroute::shortest_path(&config, &network, origin, destination)?;

    writeln!(output, "\n{}", trip.summary(&network))?;
    Ok(())
}
