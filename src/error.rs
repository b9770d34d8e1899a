//! Error taxonomy for the calculation boundary
//!
//! All errors are raised before the projection engine runs; the engine
//! itself is total and resolves abnormal cases to unbounded outcomes.

use thiserror::Error;

/// Errors rejecting a calculation request at the input boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input text could not be parsed as a currency amount
    #[error("could not parse amount '{0}'")]
    InvalidAmount(String),

    /// Principal below the platform minimum (or non-positive)
    #[error("principal ${principal:.2} is below the ${minimum:.0} minimum")]
    InvalidPrincipal { principal: f64, minimum: f64 },

    /// Target does not exceed the principal
    #[error("target ${target:.2} must exceed principal ${principal:.2}")]
    InvalidTarget { target: f64, principal: f64 },
}
