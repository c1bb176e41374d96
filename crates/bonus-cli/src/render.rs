use crate::config::OutputFormat;
use bonus_calculator::calculator::{MONTHS_PER_YEAR, OVERTIME_MULTIPLIER, STANDARD_WORK_YEAR_HOURS};
use bonus_calculator::{BonusResult, CalculationInput, CalculationResult, ResultRow, ResultView};
use serde::Serialize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 20;

/// Everything produced by one `compute` run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: CalculationInput,
    pub result: CalculationResult,
    pub view: ResultView,
}

pub fn render(report: &Report, format: OutputFormat) -> BonusResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(&report.view)),
    }
}

fn render_text(view: &ResultView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bonus frequency: {}", view.frequency);
    for row in view.visible_rows() {
        push_row(&mut out, row, "");
    }
    if let Some(breakdown) = &view.breakdown {
        out.push_str("\nBreakdown\n");
        for row in breakdown {
            push_row(&mut out, row, "  ");
        }
    }
    out
}

fn push_row(out: &mut String, row: &ResultRow, indent: &str) {
    let width = LABEL_WIDTH.saturating_sub(indent.len());
    let _ = writeln!(out, "{indent}{:<width$} {:>16}", row.label, row.value);
}

pub fn render_explanation() -> String {
    format!(
        "Bonus Calculator - how results are derived\n\
         \n\
         gross bonus  = base salary x bonus percentage / 100\n\
         overtime pay = base salary / {STANDARD_WORK_YEAR_HOURS} x overtime hours x {OVERTIME_MULTIPLIER}\n\
         \x20              (added to gross bonus only with --include-overtime and hours > 0)\n\
         tax          = gross bonus x tax rate / 100\n\
         net bonus    = gross bonus - tax - deductions\n\
         monthly      = net bonus / {MONTHS_PER_YEAR}\n\
         \n\
         Amounts are never rounded until display, and a negative net bonus is shown as is.\n\
         The bonus frequency is a label only; it does not change any amount.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonus_calculator::{DisplayOptions, compute};

    fn report(options: DisplayOptions) -> Report {
        let input = CalculationInput::new(100000.0, 10.0).with_tax_rate(25.0).with_deductions(500.0);
        let result = compute(&input);
        let view = ResultView::build(&result, options);
        Report { input, result, view }
    }

    #[test]
    fn text_omits_hidden_rows() {
        let text = render(&report(DisplayOptions::default()), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Bonus frequency: Annual\n"));
        assert!(text.contains("$10,000.00"));
        assert!(!text.contains("Tax"));
        assert!(!text.contains("Breakdown"));
    }

    #[test]
    fn text_includes_breakdown() {
        let options = DisplayOptions { advanced: true, show_breakdown: true };
        let text = render(&report(options), OutputFormat::Text).unwrap();
        assert!(text.contains("\nBreakdown\n"));
        assert!(text.contains("  Federal tax"));
        assert_eq!(text.matches("-$500.00").count(), 2);
    }

    #[test]
    fn json_carries_input_result_and_view() {
        let json = render(&report(DisplayOptions::default()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["baseSalary"], 100000.0);
        assert_eq!(value["result"]["netBonus"], 7000.0);
        assert_eq!(value["result"]["bonusFrequency"], "annual");
        assert_eq!(value["view"]["rows"][0]["value"], "$10,000.00");
        assert!(value["view"].get("breakdown").is_none());
    }

    #[test]
    fn explanation_names_constants() {
        let text = render_explanation();
        assert!(text.contains("/ 2080"));
        assert!(text.contains("x 1.5"));
    }
}
