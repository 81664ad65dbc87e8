//! Testing utilities and fixtures for Vitrine

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
