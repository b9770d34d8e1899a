//! Input parsing and request validation
//!
//! Amounts arrive as user-typed strings with optional k/m/b suffixes
//! ("2000m", "1.5b", "$250,000"). Everything is validated here so the
//! projection engine only ever sees well-formed numbers.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::rates::Bonuses;

/// Smallest principal the bank accepts
pub const MIN_PRINCIPAL: f64 = 1000.0;

/// Parse a currency amount with an optional k/m/b suffix
///
/// Currency symbols, commas, and whitespace are stripped; the suffix
/// scales by 1e3 / 1e6 / 1e9. Anything that does not resolve to a
/// number is rejected.
pub fn parse_amount(input: &str) -> Result<f64, CalcError> {
    let cleaned: String = input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'k' | 'm' | 'b'))
        .collect();

    let (digits, multiplier) = match cleaned.chars().last() {
        Some('k') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        Some('b') => (&cleaned[..cleaned.len() - 1], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v * multiplier)
        .ok_or_else(|| CalcError::InvalidAmount(input.to_string()))
}

/// One validated calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalcRequest {
    /// Starting balance
    pub principal: f64,

    /// Balance the user wants to reach
    pub target: f64,

    /// Merit and stock bonuses applied to every rate
    pub bonuses: Bonuses,
}

impl CalcRequest {
    /// Build a request from raw input strings, parsing and validating
    pub fn from_inputs(
        principal: &str,
        target: &str,
        bonuses: Bonuses,
    ) -> Result<Self, CalcError> {
        let request = Self {
            principal: parse_amount(principal)?,
            target: parse_amount(target)?,
            bonuses,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the boundary invariants: principal at least the minimum,
    /// target strictly above principal
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.principal.is_finite() || self.principal < MIN_PRINCIPAL {
            return Err(CalcError::InvalidPrincipal {
                principal: self.principal,
                minimum: MIN_PRINCIPAL,
            });
        }
        if !self.target.is_finite() || self.target <= self.principal {
            return Err(CalcError::InvalidTarget {
                target: self.target,
                principal: self.principal,
            });
        }
        Ok(())
    }
}
