//! Form parsing
//!
//! Turns raw form strings into the numbers the engine consumes. Results are
//! recomputed on every keystroke, so a half typed value such as `"12."` or
//! `"1e"` still produces a number. Anything unreadable counts as zero.

use crate::{CalculatorInputs, fields};
use bonus_types::{CalculationInput, FieldValue};
use std::collections::HashMap;

/// Parses the longest numeric prefix of `raw`, ignoring leading whitespace and
/// any trailing text. Blank, unparseable, non-finite and negative-zero values
/// all yield `0.0`.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if digit_count > 0 || frac_count > 0 {
            digit_count += frac_count;
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return 0.0;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_start = end + 1;
        if exp_start < len && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite() && *v != 0.0).unwrap_or(0.0)
}

/// Raw values of the bonus form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    values: HashMap<String, FieldValue>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn inputs(&self) -> CalculatorInputs<'_> {
        CalculatorInputs::new(&self.values)
    }

    /// Parses every field into a `CalculationInput`, defaulting anything
    /// missing or unreadable.
    pub fn to_input(&self) -> CalculationInput {
        self.inputs().to_input()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl From<&CalculationInput> for FormFields {
    fn from(input: &CalculationInput) -> Self {
        let mut form = Self::new();
        form.set(fields::BASE_SALARY, input.base_salary)
            .set(fields::BONUS_PERCENTAGE, input.bonus_percentage)
            .set(fields::TAX_RATE, input.tax_rate)
            .set(fields::DEDUCTIONS, input.deductions)
            .set(fields::BONUS_FREQUENCY, input.bonus_frequency.as_str())
            .set(fields::INCLUDE_OVERTIME, input.include_overtime)
            .set(fields::OVERTIME_HOURS, input.overtime_hours);
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonus_types::BonusFrequency;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("100000"), 100000.0);
        assert_eq!(parse_number("  3.5"), 3.5);
        assert_eq!(parse_number("-.5"), -0.5);
        assert_eq!(parse_number("+7"), 7.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2.5E-1"), 0.25);
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("22%"), 22.0);
        assert_eq!(parse_number("1,234"), 1.0);
        assert_eq!(parse_number("12."), 12.0);
        assert_eq!(parse_number("4e"), 4.0);
        assert_eq!(parse_number("4e+"), 4.0);
        assert_eq!(parse_number("1.2.3"), 1.2);
    }

    #[test]
    fn unreadable_values_are_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("$100"), 0.0);
        assert_eq!(parse_number("Infinity"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("1e400"), 0.0);
    }

    #[test]
    fn negative_zero_becomes_positive_zero() {
        let zero = parse_number("-0");
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn form_round_trips_an_input() {
        let input = CalculationInput::new(90000.0, 12.0)
            .with_tax_rate(30.0)
            .with_deductions(250.0)
            .with_frequency(BonusFrequency::SemiAnnual)
            .with_overtime(6.0);
        assert_eq!(FormFields::from(&input).to_input(), input);
    }

    #[test]
    fn collects_raw_strings() {
        let form: FormFields = [
            (fields::BASE_SALARY, "75000"),
            (fields::BONUS_PERCENTAGE, "8"),
            (fields::BONUS_FREQUENCY, ""),
            (fields::OVERTIME_HOURS, "five"),
        ]
        .into_iter()
        .collect();
        let input = form.to_input();
        assert_eq!(input.base_salary, 75000.0);
        assert_eq!(input.bonus_percentage, 8.0);
        assert_eq!(input.bonus_frequency, BonusFrequency::Annual);
        assert_eq!(input.overtime_hours, 0.0);
        assert_eq!(form.get(fields::BASE_SALARY), Some(&FieldValue::from("75000")));
    }
}
