//! Investment option table, bonus multipliers, and rate-source overrides

mod bonus;
mod options;
mod provider;

pub use bonus::{Bonuses, MERIT_STEP, STOCK_MULTIPLIER};
pub use options::{InvestmentOption, OptionTable};
pub use provider::{apply_rate_overrides, CsvRateProvider, RateProvider, MIN_OVERRIDE_RATES};
