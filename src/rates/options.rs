//! Investment options and the fixed default rate table

use serde::{Deserialize, Serialize};

/// One bank investment option: a period length and its base periodic rate
///
/// Base rates are quoted per reference period (weekly) before merit and
/// stock bonuses; the engine scales them to the option's own period length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOption {
    /// Investment period length in days
    pub period_days: u32,

    /// Base periodic rate in percent (e.g. 0.833 = 0.833%)
    pub base_rate_pct: f64,

    /// Display label, e.g. "30 Days (0.83% base)"
    pub label: String,
}

impl InvestmentOption {
    /// Create an option with the standard label format
    pub fn new(period_days: u32, base_rate_pct: f64) -> Self {
        Self {
            period_days,
            base_rate_pct,
            label: format!("{} Days ({:.2}% base)", period_days, base_rate_pct),
        }
    }

    /// Refresh the label after a base-rate change
    pub fn relabel(&mut self) {
        self.label = format!("{} Days ({:.2}% base)", self.period_days, self.base_rate_pct);
    }
}

/// Ordered table of investment options evaluated for each calculation
///
/// The table is read-only input for the duration of one calculation; rate
/// overrides (see [`super::provider`]) rewrite it between calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionTable {
    options: Vec<InvestmentOption>,
}

impl OptionTable {
    /// Build a table from an explicit option list
    pub fn from_options(options: Vec<InvestmentOption>) -> Self {
        Self { options }
    }

    /// Options in evaluation order
    pub fn options(&self) -> &[InvestmentOption] {
        &self.options
    }

    /// Number of options in the table
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Replace the base rates in table order, relabeling each option
    ///
    /// Extra rates beyond the table length are ignored; a short slice
    /// leaves the remaining options untouched.
    pub fn set_base_rates(&mut self, base_rates: &[f64]) {
        for (opt, &rate) in self.options.iter_mut().zip(base_rates) {
            opt.base_rate_pct = rate;
            opt.relabel();
        }
    }
}

impl Default for OptionTable {
    /// The fixed five-entry bank table
    fn default() -> Self {
        Self {
            options: vec![
                InvestmentOption::new(7, 0.6889),
                InvestmentOption::new(14, 0.800),
                InvestmentOption::new(30, 0.833),
                InvestmentOption::new(60, 0.953),
                InvestmentOption::new(90, 0.953),
            ],
        }
    }
}
