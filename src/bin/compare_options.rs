//! Full comparison table across every option and reinvestment policy
//!
//! Unlike the main CLI, which prints only the winning row, this prints
//! the complete option x policy grid for side-by-side inspection.

use anyhow::Result;
use clap::Parser;

use investment_projection::{
    format::{format_currency, format_days},
    projection::{ProjectionConfig, ProjectionEngine, ProjectionOutcome, ReinvestPolicy},
    Bonuses, CalcRequest, OptionTable,
};

#[derive(Parser, Debug)]
#[command(name = "compare_options", about = "Compare every investment option and policy")]
struct Args {
    /// Starting balance, k/m/b suffixes accepted
    #[arg(long)]
    principal: String,

    /// Target balance, same encoding
    #[arg(long)]
    target: String,

    /// Bank merit level
    #[arg(long, default_value_t = 0)]
    merits: u8,

    /// Apply the +10% bank stock bonus
    #[arg(long)]
    stock_bonus: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let bonuses = Bonuses::new(args.merits, args.stock_bonus);
    let request = CalcRequest::from_inputs(&args.principal, &args.target, bonuses)?;

    let table = OptionTable::default();
    let engine = ProjectionEngine::new(ProjectionConfig::default());

    println!(
        "Comparing {} -> {} (merits: {}, stock bonus: {})\n",
        format_currency(request.principal),
        format_currency(request.target),
        args.merits,
        args.stock_bonus,
    );
    println!(
        "{:<24} {:<12} {:>10} {:>16} {:>12}",
        "Period", "Method", "Periods", "Time to Target", "Profit"
    );
    println!("{}", "-".repeat(78));

    for option in table.options() {
        let rate = engine.effective_rate_pct(option, &bonuses);

        let rows = [
            (
                ReinvestPolicy::NoReinvest,
                engine.project_without_reinvestment(
                    request.principal,
                    request.target,
                    rate,
                    option.period_days,
                ),
            ),
            (
                ReinvestPolicy::Reinvest,
                engine.project_with_reinvestment(
                    request.principal,
                    request.target,
                    rate,
                    option.period_days,
                ),
            ),
        ];

        for (policy, outcome) in rows {
            match outcome {
                ProjectionOutcome::Reached { periods, days, profit } => {
                    println!(
                        "{:<24} {:<12} {:>10} {:>16} {:>12}",
                        option.label,
                        policy.to_string(),
                        periods,
                        format_days(days),
                        format_currency(profit),
                    );
                }
                ProjectionOutcome::Unbounded => {
                    println!(
                        "{:<24} {:<12} {:>10} {:>16} {:>12}",
                        option.label,
                        policy.to_string(),
                        "-",
                        "never",
                        "-",
                    );
                }
            }
        }
    }

    match engine.select_best_option(
        request.principal,
        request.target,
        table.options(),
        &bonuses,
    ) {
        Some(best) => println!(
            "\nBest: {} [{}] in {}",
            best.label,
            best.policy,
            format_days(best.days)
        ),
        None => println!("\nNo valid path"),
    }

    Ok(())
}
