//! Bonus Types
//!
//! This crate defines the value types shared by the bonus calculator workspace
//! (currently `bonus-calculator` and `bonus-cli`). It holds the form field
//! representation, the calculation input and the derived result so the engine
//! and any presentation layer agree on one shape.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod types;
pub use types::{BonusFrequency, CalculationInput, CalculationResult, FieldValue};
