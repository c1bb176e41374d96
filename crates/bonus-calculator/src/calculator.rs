//! Bonus Calculator
//!
//! Computes gross bonus, tax, net bonus and the monthly equivalent from a
//! salary, a bonus percentage and optional overtime.
//!
//! ```text
//! gross   = base_salary * bonus_percentage / 100
//!         + base_salary / 2080 * overtime_hours * 1.5   (overtime only)
//! tax     = gross * tax_rate / 100
//! net     = gross - tax - deductions
//! monthly = net / 12
//! ```
//!
//! Nothing is rounded and nothing is clamped: deductions larger than the bonus
//! produce a negative net bonus.

use crate::{Calculator, CalculatorInputs};
use bonus_types::{CalculationInput, CalculationResult};
use tracing::debug;

/// Standard work year: 40 hours x 52 weeks.
pub const STANDARD_WORK_YEAR_HOURS: f64 = 2080.0;

/// Time and a half.
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Hourly rate derived from an annual salary.
pub fn hourly_rate(base_salary: f64) -> f64 {
    base_salary / STANDARD_WORK_YEAR_HOURS
}

/// Overtime pay for `hours` at the overtime multiplier of the derived hourly rate.
pub fn overtime_pay(base_salary: f64, hours: f64) -> f64 {
    hourly_rate(base_salary) * hours * OVERTIME_MULTIPLIER
}

/// Computes a bonus result from scratch. Total and deterministic.
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let mut gross_bonus = input.base_salary * input.bonus_percentage / 100.0;

    let overtime = if input.include_overtime && input.overtime_hours > 0.0 {
        overtime_pay(input.base_salary, input.overtime_hours)
    } else {
        0.0
    };
    gross_bonus += overtime;

    let tax_amount = gross_bonus * input.tax_rate / 100.0;
    let net_bonus = gross_bonus - tax_amount - input.deductions;

    debug!(
        gross_bonus,
        overtime_pay = overtime,
        tax_amount,
        net_bonus,
        frequency = %input.bonus_frequency,
        "bonus computed"
    );

    CalculationResult {
        gross_bonus,
        overtime_pay: overtime,
        tax_amount,
        deductions: input.deductions,
        net_bonus,
        monthly_equivalent: net_bonus / MONTHS_PER_YEAR,
        bonus_frequency: input.bonus_frequency,
    }
}

/// The bonus engine behind the `Calculator` seam.
#[derive(Debug, Default, Clone, Copy)]
pub struct BonusCalculator;

impl BonusCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for BonusCalculator {
    fn name(&self) -> &str {
        "bonus"
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> CalculationResult {
        compute(&inputs.to_input())
    }
}
