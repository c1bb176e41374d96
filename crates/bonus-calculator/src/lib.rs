//! The bonus pay calculation engine.
//!
//! This crate provides the `Calculator` trait and the `CalculatorInputs` struct
//! for reading named form fields, the [`BonusCalculator`] engine itself, and the
//! formatting and view helpers a presentation layer needs to display a result.
//!
//! The engine is pure: [`compute`] maps a [`CalculationInput`] to a
//! [`CalculationResult`] and cannot fail. Invalid input is normalised to zero at
//! the field-reading boundary instead.

use std::collections::HashMap;
use tracing::debug;

pub mod calculator;
pub mod error;
pub mod form;
pub mod format;
pub mod view;

pub use bonus_types::{BonusFrequency, CalculationInput, CalculationResult, FieldValue};
pub use calculator::{BonusCalculator, compute};
pub use error::{BonusError, BonusResult};
pub use form::{FormFields, parse_number};
pub use format::{format_currency, format_subtraction};
pub use view::{DisplayOptions, ResultRow, ResultView};

/// Field ids of the bonus form.
pub mod fields {
    pub const BASE_SALARY: &str = "baseSalary";
    pub const BONUS_PERCENTAGE: &str = "bonusPercentage";
    pub const TAX_RATE: &str = "taxRate";
    pub const DEDUCTIONS: &str = "deductions";
    pub const BONUS_FREQUENCY: &str = "bonusFrequency";
    pub const INCLUDE_OVERTIME: &str = "includeOT";
    pub const OVERTIME_HOURS: &str = "otHours";
}

/// A trait for all calculators.
/// Calculators are stateless and thread-safe.
pub trait Calculator: Send + Sync {
    /// The name of the calculator.
    fn name(&self) -> &str;

    /// Calculates a result from named form fields. Never fails.
    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult;
}

/// Provides a fail-soft interface for calculators to read input fields.
///
/// Every getter has a default: missing or unreadable numbers are `0`, missing
/// checkboxes are unchecked, a missing frequency is annual.
#[derive(Debug)]
pub struct CalculatorInputs<'a> {
    variables: &'a HashMap<String, FieldValue>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs`.
    pub fn new(variables: &'a HashMap<String, FieldValue>) -> Self {
        Self { variables }
    }

    /// Gets a numeric field, parsing text the way the form does.
    pub fn get_f64(&self, name: &str) -> f64 {
        match self.variables.get(name) {
            Some(FieldValue::Text(s)) => parse_number(s),
            Some(value) => value.as_number().unwrap_or_else(|| {
                debug!(field = name, kind = value.type_name(), "Non-numeric field read as zero");
                0.0
            }),
            None => 0.0,
        }
    }

    /// Gets a checkbox field.
    pub fn get_bool(&self, name: &str) -> bool {
        self.variables.get(name).is_some_and(FieldValue::is_truthy)
    }

    /// Gets the bonus frequency field.
    pub fn get_frequency(&self, name: &str) -> BonusFrequency {
        self.variables
            .get(name)
            .and_then(FieldValue::as_text)
            .map(BonusFrequency::parse_lenient)
            .unwrap_or_default()
    }

    /// Reads every bonus form field into a `CalculationInput`.
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput {
            base_salary: self.get_f64(fields::BASE_SALARY),
            bonus_percentage: self.get_f64(fields::BONUS_PERCENTAGE),
            tax_rate: self.get_f64(fields::TAX_RATE),
            deductions: self.get_f64(fields::DEDUCTIONS),
            bonus_frequency: self.get_frequency(fields::BONUS_FREQUENCY),
            include_overtime: self.get_bool(fields::INCLUDE_OVERTIME),
            overtime_hours: self.get_f64(fields::OVERTIME_HOURS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(pairs: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn missing_fields_read_as_defaults() {
        let vars = HashMap::new();
        let inputs = CalculatorInputs::new(&vars);
        assert_eq!(inputs.get_f64(fields::BASE_SALARY), 0.0);
        assert!(!inputs.get_bool(fields::INCLUDE_OVERTIME));
        assert_eq!(inputs.get_frequency(fields::BONUS_FREQUENCY), BonusFrequency::Annual);
        assert_eq!(inputs.to_input(), CalculationInput::default());
    }

    #[test]
    fn mixed_field_kinds_are_coerced() {
        let vars = fields_of(&[
            (fields::BASE_SALARY, FieldValue::from("85000")),
            (fields::BONUS_PERCENTAGE, FieldValue::Number(7.5)),
            (fields::TAX_RATE, FieldValue::from("22%")),
            (fields::DEDUCTIONS, FieldValue::Flag(true)),
            (fields::BONUS_FREQUENCY, FieldValue::from("quarterly")),
            (fields::INCLUDE_OVERTIME, FieldValue::from("on")),
            (fields::OVERTIME_HOURS, FieldValue::Number(f64::NAN)),
        ]);
        let input = CalculatorInputs::new(&vars).to_input();
        assert_eq!(input.base_salary, 85000.0);
        assert_eq!(input.bonus_percentage, 7.5);
        assert_eq!(input.tax_rate, 22.0);
        assert_eq!(input.deductions, 0.0);
        assert_eq!(input.bonus_frequency, BonusFrequency::Quarterly);
        assert!(input.include_overtime);
        assert_eq!(input.overtime_hours, 0.0);
    }

    #[test]
    fn non_numeric_kinds_read_as_zero() {
        let vars = fields_of(&[
            (fields::BASE_SALARY, FieldValue::Empty),
            (fields::TAX_RATE, FieldValue::Number(f64::INFINITY)),
            (fields::DEDUCTIONS, FieldValue::Number(-250.0)),
        ]);
        let inputs = CalculatorInputs::new(&vars);
        assert_eq!(inputs.get_f64(fields::BASE_SALARY), 0.0);
        assert_eq!(inputs.get_f64(fields::TAX_RATE), 0.0);
        assert_eq!(inputs.get_f64(fields::DEDUCTIONS), -250.0);
    }
}
