mod terminal;

use anyhow::{bail, Context, Result};
use breakeven_core::{Config, Engine, RawInputs};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use terminal::{logging, report};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Break-even analysis: contribution margin, margin ratio, and the
/// quantity and revenue at which total revenue covers total cost.
#[derive(Parser, Debug)]
#[command(name = "breakeven", version, about)]
struct CommandLine {
    /// Costs that do not depend on volume
    #[arg(long, allow_hyphen_values = true)]
    fixed_costs: String,

    /// Cost to produce one unit
    #[arg(long, allow_hyphen_values = true)]
    variable_cost: String,

    /// Selling price of one unit
    #[arg(long, allow_hyphen_values = true)]
    price: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON file overriding display and chart settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CommandLine::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => Config::from_path(path).context("could not load configuration")?,
        None => Config::default(),
    };

    let raw = RawInputs::new(args.fixed_costs, args.variable_cost, args.price);
    let evaluation = match Engine::new(config).evaluate(&raw) {
        Ok(evaluation) => evaluation,
        Err(errors) => {
            for err in &errors {
                error!("{}: {}", err.field, err.message);
            }
            bail!("{} input(s) rejected", errors.len());
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&evaluation)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
    }
    Ok(())
}
