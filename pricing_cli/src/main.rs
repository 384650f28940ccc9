//! # Pricing CLI
//!
//! Command-line front end for the order pricing engine.
//!
//! ```text
//! pricing_cli sample-order > order.json
//! pricing_cli price --order order.json
//! pricing_cli price --order order.json --config pricing.json --strict --json
//! pricing_cli catalog
//! ```

mod logging;
mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use pricing_core::building::{BuildingType, Room, TrussType};
use pricing_core::calculations::{price, quote, CostBreakdown};
use pricing_core::config::{load_config, PricingConfig};
use pricing_core::errors::PricingError;
use pricing_core::materials::{ProfileType, TrussCatalog};
use pricing_core::order::Order;
use pricing_core::units::Distance;

#[derive(Debug, Parser)]
#[command(name = "pricing_cli", version, about = "Light-steel-frame order pricing")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price an order read from a JSON file
    Price(PriceArgs),
    /// List the truss catalog
    Catalog(CatalogArgs),
    /// Print a sample order as JSON
    SampleOrder,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Truss catalog CSV, overrides the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PriceArgs {
    /// Order file (JSON)
    #[arg(long)]
    order: PathBuf,

    #[command(flatten)]
    source: SourceArgs,

    /// Fail on orders that cannot be priced instead of reporting them
    #[arg(long)]
    strict: bool,

    /// Exact amounts, no rounding to the configured step
    #[arg(long)]
    exact: bool,

    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CatalogArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match cli.command {
        Command::Price(args) => run_price(&args),
        Command::Catalog(args) => run_catalog(&args),
        Command::SampleOrder => run_sample_order(),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Print an error chain, plus the structured form when the root cause is a
/// pricing error.
fn report_error(error: &anyhow::Error) {
    eprintln!("Error: {:#}", error);
    if let Some(pricing_error) = error.downcast_ref::<PricingError>() {
        if let Ok(json) = serde_json::to_string_pretty(pricing_error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
    }
}

/// Resolve configuration and catalog.
///
/// Without `--config` the defaults apply; a relative catalog path from a
/// config file is resolved against the config file's directory. Without any
/// catalog file the bundled catalog is used.
fn load_sources(source: &SourceArgs) -> Result<(PricingConfig, TrussCatalog)> {
    let config = match &source.config {
        Some(path) => load_config(path).with_context(|| format!("loading configuration {}", path.display()))?,
        None => PricingConfig::default(),
    };

    let catalog = match (&source.catalog, &source.config) {
        (Some(path), _) => {
            TrussCatalog::load_from_csv(path).with_context(|| format!("loading catalog {}", path.display()))?
        }
        (None, Some(config_path)) => {
            let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
            config
                .load_catalog(Some(base_dir))
                .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?
        }
        (None, None) => TrussCatalog::bundled().context("loading bundled catalog")?,
    };

    Ok((config, catalog))
}

fn read_order(path: &Path) -> Result<Order> {
    let content = fs::read_to_string(path).with_context(|| format!("reading order {}", path.display()))?;
    let order: Order =
        serde_json::from_str(&content).with_context(|| format!("parsing order {}", path.display()))?;
    debug!(path = %path.display(), rooms = order.rooms.len(), "order loaded");
    Ok(order)
}

fn run_price(args: &PriceArgs) -> Result<ExitCode> {
    let (config, catalog) = load_sources(&args.source)?;
    let order = read_order(&args.order)?;

    let breakdown = price_order(&order, &catalog, &config, args.strict, args.exact)?;
    info!(priceable = breakdown.priceable, total_czk = breakdown.total_czk(), "order priced");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", render::breakdown_report(&order, &breakdown)?);
        println!();
        println!("Result: {}", status_icon(breakdown.priceable));
    }

    // A lenient run that could not price the order still completes
    Ok(ExitCode::SUCCESS)
}

fn price_order(
    order: &Order,
    catalog: &TrussCatalog,
    config: &PricingConfig,
    strict: bool,
    exact: bool,
) -> Result<CostBreakdown> {
    // Rates come from the configuration, never from the submitted order
    let order = Order {
        price_list: config.price_list,
        ..order.clone()
    };
    let step = if exact { 0.0 } else { config.rounding_step_czk };
    if strict {
        let breakdown = price(&order, catalog)?;
        Ok(breakdown.rounded_up(step))
    } else {
        Ok(quote(&order, catalog, step))
    }
}

fn run_catalog(args: &CatalogArgs) -> Result<ExitCode> {
    let (_, catalog) = load_sources(&args.source)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", render::catalog_report(&catalog)?);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_sample_order() -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(&sample_order()?)?);
    Ok(ExitCode::SUCCESS)
}

fn sample_order() -> Result<Order> {
    Ok(Order {
        building_type: BuildingType::DetachedHouse,
        truss_type: TrussType::Gable15,
        openings: 4,
        profile: ProfileType::C89x41x1_0,
        wall_height: Distance::from_meters(3.2)?,
        length: Distance::from_meters(6.0)?,
        width: Distance::from_meters(6.0)?,
        rooms: vec![Room::from_meters("A", 6.0, 6.0)?],
        price_list: PricingConfig::default().price_list,
    })
}

fn status_icon(priced: bool) -> &'static str {
    if priced {
        "[OK]"
    } else {
        "[NELZE VYPOČÍTAT]"
    }
}
