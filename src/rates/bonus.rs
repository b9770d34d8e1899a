//! Rate bonus multipliers from bank merits and stock ownership

use serde::{Deserialize, Serialize};

/// Rate increase per merit level (5% each)
pub const MERIT_STEP: f64 = 0.05;

/// Multiplier granted by owning the bank stock (+10%)
pub const STOCK_MULTIPLIER: f64 = 1.10;

/// User-held rate bonuses applied to every option's base rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonuses {
    /// Bank merit level (0-10 in practice)
    pub merit_level: u8,

    /// Whether the user owns the rate-boosting stock
    pub has_stock_bonus: bool,
}

impl Bonuses {
    pub fn new(merit_level: u8, has_stock_bonus: bool) -> Self {
        Self {
            merit_level,
            has_stock_bonus,
        }
    }

    /// Merit multiplier: 1 + level x 0.05
    pub fn merit_multiplier(&self) -> f64 {
        1.0 + f64::from(self.merit_level) * MERIT_STEP
    }

    /// Stock multiplier: 1.10 if held, else 1.00
    pub fn stock_multiplier(&self) -> f64 {
        if self.has_stock_bonus {
            STOCK_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Combined multiplier applied to a base rate
    pub fn combined_multiplier(&self) -> f64 {
        self.merit_multiplier() * self.stock_multiplier()
    }
}
