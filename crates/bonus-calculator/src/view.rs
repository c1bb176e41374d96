//! Result view
//!
//! Display rules for a computed bonus, independent of any rendering target.
//! Tax and deductions are shown as subtractions. The tax row only appears with
//! advanced options enabled, and the deductions row additionally requires a
//! positive deduction.

use crate::format::{format_currency, format_subtraction};
use bonus_types::CalculationResult;
use serde::{Deserialize, Serialize};

/// Which optional parts of the result are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Show tax and deductions rows.
    pub advanced: bool,
    /// Show the line-item breakdown table.
    pub show_breakdown: bool,
}

/// One labelled, formatted line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
    pub visible: bool,
}

impl ResultRow {
    fn shown(label: &'static str, value: String) -> Self {
        Self { label, value, visible: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub frequency: &'static str,
    pub rows: Vec<ResultRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<ResultRow>>,
}

impl ResultView {
    pub fn build(result: &CalculationResult, options: DisplayOptions) -> Self {
        let rows = vec![
            ResultRow::shown("Gross bonus", format_currency(result.gross_bonus)),
            ResultRow {
                label: "Tax",
                value: format_subtraction(result.tax_amount),
                visible: options.advanced,
            },
            ResultRow {
                label: "Deductions",
                value: format_subtraction(result.deductions),
                visible: options.advanced && result.deductions > 0.0,
            },
            ResultRow::shown("Net bonus", format_currency(result.net_bonus)),
            ResultRow::shown("Monthly equivalent", format_currency(result.monthly_equivalent)),
        ];

        let breakdown = options.show_breakdown.then(|| {
            vec![
                ResultRow::shown("Gross", format_currency(result.gross_bonus)),
                ResultRow::shown("Federal tax", format_subtraction(result.tax_amount)),
                ResultRow::shown("Deductions", format_subtraction(result.deductions)),
                ResultRow::shown("Net", format_currency(result.net_bonus)),
            ]
        });

        Self { frequency: result.bonus_frequency.label(), rows, breakdown }
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.rows.iter().filter(|row| row.visible)
    }

    pub fn row(&self, label: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}
