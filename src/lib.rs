//! Investment Projection System - fastest path to a target balance
//!
//! This library provides:
//! - Time-to-target projections with and without reinvestment
//! - Best-option selection across the bank's period/rate table
//! - Merit and stock bonus rate multipliers
//! - Pluggable live-rate overrides with a confidence threshold
//! - Input parsing/validation and display formatting for the UI layer

pub mod error;
pub mod format;
pub mod input;
pub mod planner;
pub mod projection;
pub mod rates;

// Re-export commonly used types
pub use error::CalcError;
pub use input::{parse_amount, CalcRequest, MIN_PRINCIPAL};
pub use planner::Planner;
pub use projection::{BestOption, ProjectionConfig, ProjectionEngine, ProjectionOutcome, ReinvestPolicy};
pub use rates::{Bonuses, CsvRateProvider, InvestmentOption, OptionTable, RateProvider};
