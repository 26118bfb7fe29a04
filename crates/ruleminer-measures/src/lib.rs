//! # ruleminer-measures
//!
//! Objective interestingness measures over a rule's frequency combo.
//! Every measure is a pure `f64` formula: degenerate inputs produce NaN or
//! ±∞ instead of an error, so one pathological rule never stops a batch.

pub mod contingency;
pub mod evaluator;
pub mod measures;

pub use contingency::ContingencyTable;
pub use evaluator::InterestingnessEvaluator;
pub use measures::{Measure, MEASURES};
