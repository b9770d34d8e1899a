//! Outcome structures for target projections

use serde::{Deserialize, Serialize};

/// Reinvestment policy evaluated for each investment option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReinvestPolicy {
    /// Profit is withdrawn each period; the principal never grows
    NoReinvest,
    /// Profit is rolled back into the invested amount each period
    Reinvest,
}

impl std::fmt::Display for ReinvestPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReinvestPolicy::NoReinvest => write!(f, "No Reinvest"),
            ReinvestPolicy::Reinvest => write!(f, "Reinvest"),
        }
    }
}

/// Result of projecting one (option, policy) pair toward the target
///
/// `Unbounded` means the target is never reached under this combination
/// (zero/negative rate, or the simulation safety bound was hit). No
/// NaN or infinity values ever appear in a `Reached` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectionOutcome {
    /// Target reached after the given number of periods
    Reached {
        /// Whole periods needed to meet or exceed the target
        periods: u64,
        /// Elapsed calendar days (periods x period length)
        days: u64,
        /// Total profit accrued by the time the target is met
        profit: f64,
    },
    /// Target is unreachable under this option and policy
    Unbounded,
}

impl ProjectionOutcome {
    /// Zero-period outcome for a target that is already met
    pub fn already_met() -> Self {
        ProjectionOutcome::Reached {
            periods: 0,
            days: 0,
            profit: 0.0,
        }
    }

    /// Elapsed days if the target was reached
    pub fn days(&self) -> Option<u64> {
        match self {
            ProjectionOutcome::Reached { days, .. } => Some(*days),
            ProjectionOutcome::Unbounded => None,
        }
    }

    /// Whether the target was reached in a finite number of periods
    pub fn is_reached(&self) -> bool {
        matches!(self, ProjectionOutcome::Reached { .. })
    }
}

/// The single winning (option, policy) combination for a calculation
///
/// Produced by `ProjectionEngine::select_best_option`; absence of a
/// `BestOption` means no combination reaches the target at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestOption {
    /// Display label of the originating investment option
    pub label: String,
    /// Policy that produced the winning time
    pub policy: ReinvestPolicy,
    /// Periods needed to reach the target
    pub periods: u64,
    /// Elapsed calendar days
    pub days: u64,
    /// Total profit at the time the target is met
    pub profit: f64,
}
