//! End-to-end planner tying the option table to the projection engine
//!
//! Holds the option table and engine config once, then answers many
//! validated requests without rebuilding either.

use crate::error::CalcError;
use crate::input::CalcRequest;
use crate::projection::{BestOption, ProjectionConfig, ProjectionEngine};
use crate::rates::{apply_rate_overrides, OptionTable, RateProvider};

/// Pre-configured planner for repeated calculations
///
/// # Example
/// ```
/// use investment_projection::{Planner, CalcRequest, Bonuses};
///
/// let planner = Planner::new();
/// let request = CalcRequest::from_inputs("2000m", "3000m", Bonuses::default()).unwrap();
/// let best = planner.plan(&request).unwrap().expect("viable path");
/// assert!(best.days > 0);
/// ```
#[derive(Debug)]
pub struct Planner {
    options: OptionTable,
    config: ProjectionConfig,
}

impl Planner {
    /// Planner with the fixed default option table and default config
    pub fn new() -> Self {
        Self {
            options: OptionTable::default(),
            config: ProjectionConfig::default(),
        }
    }

    /// Planner with a caller-supplied option table
    pub fn with_options(options: OptionTable) -> Self {
        Self {
            options,
            config: ProjectionConfig::default(),
        }
    }

    /// Planner with explicit options and config
    pub fn with_config(options: OptionTable, config: ProjectionConfig) -> Self {
        Self { options, config }
    }

    /// Override the table's base rates from a live source
    ///
    /// Keeps the current rates when the source is thin or failing; see
    /// [`apply_rate_overrides`].
    pub fn apply_rate_provider(&mut self, provider: &dyn RateProvider, merit_multiplier: f64) {
        apply_rate_overrides(&mut self.options, provider, merit_multiplier);
    }

    /// Validate the request and pick the fastest (option, policy) pair
    ///
    /// `Ok(None)` means the request was valid but no combination reaches
    /// the target.
    pub fn plan(&self, request: &CalcRequest) -> Result<Option<BestOption>, CalcError> {
        request.validate()?;

        let engine = ProjectionEngine::new(self.config.clone());
        Ok(engine.select_best_option(
            request.principal,
            request.target,
            self.options.options(),
            &request.bonuses,
        ))
    }

    /// Current option table for inspection
    pub fn options(&self) -> &OptionTable {
        &self.options
    }

    /// Mutable option table for customization
    pub fn options_mut(&mut self) -> &mut OptionTable {
        &mut self.options
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ReinvestPolicy;
    use crate::rates::{Bonuses, InvestmentOption};

    #[test]
    fn test_plan_default_table() {
        let planner = Planner::new();
        let request = CalcRequest::from_inputs("1m", "2m", Bonuses::default()).unwrap();

        let best = planner.plan(&request).unwrap().expect("viable path");
        assert_eq!(best.policy, ReinvestPolicy::Reinvest);
        assert_eq!(best.days, 540);
    }

    #[test]
    fn test_plan_rejects_invalid_principal() {
        let planner = Planner::new();
        let request = CalcRequest {
            principal: 500.0,
            target: 1_000_000.0,
            bonuses: Bonuses::default(),
        };

        assert!(matches!(
            planner.plan(&request),
            Err(CalcError::InvalidPrincipal { .. })
        ));
    }

    #[test]
    fn test_plan_rejects_invalid_target() {
        let planner = Planner::new();
        let request = CalcRequest {
            principal: 2_000_000.0,
            target: 1_000_000.0,
            bonuses: Bonuses::default(),
        };

        assert!(matches!(
            planner.plan(&request),
            Err(CalcError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_plan_no_viable_path() {
        let table = OptionTable::from_options(vec![
            InvestmentOption::new(7, 0.0),
            InvestmentOption::new(14, 0.0),
            InvestmentOption::new(30, 0.0),
            InvestmentOption::new(60, 0.0),
            InvestmentOption::new(90, 0.0),
        ]);
        let planner = Planner::with_options(table);
        let request = CalcRequest::from_inputs("1m", "2m", Bonuses::default()).unwrap();

        assert_eq!(planner.plan(&request).unwrap(), None);
    }

    #[test]
    fn test_bonuses_shorten_the_path() {
        let planner = Planner::new();

        let plain = CalcRequest::from_inputs("1m", "2m", Bonuses::default()).unwrap();
        let boosted = CalcRequest::from_inputs("1m", "2m", Bonuses::new(10, true)).unwrap();

        let plain_best = planner.plan(&plain).unwrap().unwrap();
        let boosted_best = planner.plan(&boosted).unwrap().unwrap();

        assert!(boosted_best.days < plain_best.days);
    }
}
