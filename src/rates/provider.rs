//! Pluggable rate-source overrides for the option table
//!
//! Live annual rates (APR percentages) can replace the fixed base rates,
//! but only when the source supplies enough values to be trusted; a thin
//! or failing source leaves the defaults untouched.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::options::OptionTable;

/// Minimum number of observed APR values required before overriding defaults
pub const MIN_OVERRIDE_RATES: usize = 5;

/// Weeks per year, used to de-annualize observed APRs to weekly base rates
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Source of observed annual rates for the investment options
///
/// Implementations supply APR percentages in option-table order. The
/// observed APRs already include the caller's merit bonus, so conversion
/// back to base rates divides it out.
pub trait RateProvider {
    /// Observed APR percentages, one per option, in table order
    fn annual_rate_percents(&self) -> Result<Vec<f64>, Box<dyn Error>>;
}

/// Rate provider backed by a CSV file of `period_days,apr_pct` rows
#[derive(Debug, Clone)]
pub struct CsvRateProvider {
    path: PathBuf,
}

impl CsvRateProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RateProvider for CsvRateProvider {
    fn annual_rate_percents(&self) -> Result<Vec<f64>, Box<dyn Error>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut aprs = Vec::new();
        for result in reader.records() {
            let record = result?;
            let apr: f64 = record[1].parse()?;
            aprs.push(apr);
        }

        Ok(aprs)
    }
}

/// Override the table's base rates from a provider, keeping defaults on a
/// thin or failing source
///
/// Observed APRs are converted to weekly base rates by de-annualizing and
/// dividing out the merit multiplier baked into the displayed rate. The
/// table is rewritten only when at least [`MIN_OVERRIDE_RATES`] values are
/// available; otherwise it is returned unchanged.
pub fn apply_rate_overrides(
    table: &mut OptionTable,
    provider: &dyn RateProvider,
    merit_multiplier: f64,
) {
    let aprs = match provider.annual_rate_percents() {
        Ok(aprs) => aprs,
        Err(e) => {
            warn!("rate override source failed, keeping current rates: {}", e);
            return;
        }
    };

    if aprs.len() < MIN_OVERRIDE_RATES {
        warn!(
            "insufficient APR data ({} of {} required), keeping current rates",
            aprs.len(),
            MIN_OVERRIDE_RATES
        );
        return;
    }

    let base_rates: Vec<f64> = aprs
        .iter()
        .map(|apr| apr / WEEKS_PER_YEAR / merit_multiplier)
        .collect();
    table.set_base_rates(&base_rates);

    info!("applied {} live base rates to option table", table.len());
}
