use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value read from the bonus form.
///
/// Form controls produce either free text (number inputs, selects) or a checked
/// state (checkboxes). Callers that already hold parsed numbers can pass them
/// directly as `Number`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state.
    Flag(bool),
    /// Already-parsed numeric value.
    Number(f64),
    /// Raw text as typed into the form.
    Text(String),
    /// Field present but left blank.
    Empty,
}

impl FieldValue {
    /// Returns the numeric value if this is a finite `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw text if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Type checking utility
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Empty => "empty",
        }
    }

    /// Check if this value is "truthy" when read as a checkbox
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "on" | "1" | "yes" | "checked"
            ),
            Self::Empty => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// How often the bonus is paid.
///
/// Display-only: the engine always treats the bonus as a lump sum and never
/// annualises by frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusFrequency {
    /// Paid once a year.
    #[default]
    Annual,
    /// Paid twice a year.
    SemiAnnual,
    /// Paid every quarter.
    Quarterly,
    /// Paid every month.
    Monthly,
    /// A single, non-recurring payment.
    OneTime,
}

impl BonusFrequency {
    /// All frequencies in display order.
    pub const ALL: [Self; 5] =
        [Self::Annual, Self::SemiAnnual, Self::Quarterly, Self::Monthly, Self::OneTime];

    /// Parses a form value, falling back to `Annual` for blank or unknown labels.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL.into_iter().find(|f| f.as_str() == normalized).unwrap_or_default()
    }

    /// The machine-readable form value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::SemiAnnual => "semi-annual",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
            Self::OneTime => "one-time",
        }
    }

    /// Human-readable label for result displays.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::SemiAnnual => "Semi-annual",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
            Self::OneTime => "One-time",
        }
    }
}

impl fmt::Display for BonusFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a single bonus calculation.
///
/// Constructed per invocation and owned by the caller. Values are expected to
/// be already normalised (blank or invalid form input becomes `0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationInput {
    /// Annual salary the bonus percentage applies to.
    pub base_salary: f64,
    /// Bonus as a percentage of base salary (10 means 10%).
    pub bonus_percentage: f64,
    /// Tax rate applied to the gross bonus, as a percentage.
    pub tax_rate: f64,
    /// Flat amount subtracted after tax.
    pub deductions: f64,
    /// Payment frequency label, echoed to the result.
    pub bonus_frequency: BonusFrequency,
    /// Whether overtime pay is added to the gross bonus.
    pub include_overtime: bool,
    /// Overtime hours, only read when `include_overtime` is set.
    pub overtime_hours: f64,
}

impl CalculationInput {
    /// Creates an input with the given salary and bonus percentage and no tax,
    /// deductions or overtime.
    #[must_use]
    pub fn new(base_salary: f64, bonus_percentage: f64) -> Self {
        Self { base_salary, bonus_percentage, ..Self::default() }
    }

    /// Sets the tax rate percentage.
    #[must_use]
    pub const fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Sets the flat deductions amount.
    #[must_use]
    pub const fn with_deductions(mut self, deductions: f64) -> Self {
        self.deductions = deductions;
        self
    }

    /// Sets the payment frequency label.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: BonusFrequency) -> Self {
        self.bonus_frequency = frequency;
        self
    }

    /// Enables overtime with the given number of hours.
    #[must_use]
    pub const fn with_overtime(mut self, hours: f64) -> Self {
        self.include_overtime = true;
        self.overtime_hours = hours;
        self
    }
}

/// Derived amounts for one calculation. Nothing here is rounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Bonus before tax and deductions, overtime included.
    pub gross_bonus: f64,
    /// Overtime component of `gross_bonus`; zero when overtime was not applied.
    pub overtime_pay: f64,
    /// Tax on the gross bonus.
    pub tax_amount: f64,
    /// Deductions echoed from the input.
    pub deductions: f64,
    /// `gross_bonus - tax_amount - deductions`. May be negative.
    pub net_bonus: f64,
    /// `net_bonus / 12`.
    pub monthly_equivalent: f64,
    /// Payment frequency echoed from the input.
    pub bonus_frequency: BonusFrequency,
}
