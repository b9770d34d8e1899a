//! Projection engine for time-to-target calculations

mod engine;
mod outcome;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use outcome::{BestOption, ProjectionOutcome, ReinvestPolicy};
