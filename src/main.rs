//! Investment Projection CLI
//!
//! Computes the shortest path to a target balance and prints the single
//! best (period, method) combination.

use anyhow::Result;
use clap::Parser;

use investment_projection::{
    format::{format_currency, format_days},
    Bonuses, CalcRequest, CsvRateProvider, Planner,
};

#[derive(Parser, Debug)]
#[command(name = "investment_projection", about = "Shortest path to a target balance")]
struct Args {
    /// Starting balance, k/m/b suffixes accepted (e.g. "2000m")
    #[arg(long)]
    principal: String,

    /// Target balance, same encoding (e.g. "3000m")
    #[arg(long)]
    target: String,

    /// Bank merit level (each level adds 5% to rates)
    #[arg(long, default_value_t = 0)]
    merits: u8,

    /// Apply the +10% bank stock bonus
    #[arg(long)]
    stock_bonus: bool,

    /// Optional CSV of live annual rates (period_days,apr_pct rows)
    #[arg(long)]
    rates_csv: Option<std::path::PathBuf>,

    /// Emit the result as JSON instead of a table row
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let bonuses = Bonuses::new(args.merits, args.stock_bonus);
    let request = CalcRequest::from_inputs(&args.principal, &args.target, bonuses)?;

    let mut planner = Planner::new();
    if let Some(path) = &args.rates_csv {
        let provider = CsvRateProvider::new(path);
        planner.apply_rate_provider(&provider, bonuses.merit_multiplier());
    }

    match planner.plan(&request)? {
        Some(best) if args.json => {
            println!("{}", serde_json::to_string_pretty(&best)?);
        }
        Some(best) => {
            println!("Shortest Path to Target:");
            println!(
                "{:<24} {:<12} {:<16} {:<12}",
                "Period", "Method", "Time to Target", "Profit"
            );
            println!("{}", "-".repeat(64));
            println!(
                "{:<24} {:<12} {:<16} {:<12}",
                best.label,
                best.policy.to_string(),
                format_days(best.days),
                format_currency(best.profit),
            );
        }
        None => {
            println!("No valid path");
        }
    }

    Ok(())
}
