//! Layout contracts & constraint resolution for Vitrine
//!
//! Provides the [`Constraints`] model, the [`Measurable`] seam and a
//! minimal vertical box solver. The constraint-based text measurement
//! strategy and self-sizing cells are built on top of these.

mod constraints;
mod measure;

pub use constraints::*;
pub use measure::*;
