//! Command-line interface definition and dispatch.

use crate::config::{BonusConfig, OutputFormat};
use crate::render::{Report, render, render_explanation};
use bonus_calculator::{BonusCalculator, Calculator, FormFields, ResultView, fields};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Bonus pay calculator
#[derive(Parser, Debug)]
#[command(name = "bonus")]
#[command(about = "Calculate gross and net bonus pay from salary, tax and overtime")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to bonus.toml)
    #[arg(long, global = true, env = "BONUS_CONFIG_PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a bonus and print the result
    Compute(ComputeArgs),
    /// Explain how the bonus is calculated
    Explain,
    /// Print the effective configuration as TOML
    Config,
}

/// Form values. Numbers are read leniently: unreadable input counts as zero.
#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    /// Annual base salary
    #[arg(long, allow_hyphen_values = true)]
    pub base_salary: Option<String>,

    /// Bonus as a percentage of base salary
    #[arg(long, allow_hyphen_values = true)]
    pub bonus_percentage: Option<String>,

    /// Tax rate percentage applied to the gross bonus
    #[arg(long, allow_hyphen_values = true)]
    pub tax_rate: Option<String>,

    /// Flat deductions subtracted after tax
    #[arg(long, allow_hyphen_values = true)]
    pub deductions: Option<String>,

    /// Bonus frequency label (annual, semi-annual, quarterly, monthly, one-time)
    #[arg(long)]
    pub frequency: Option<String>,

    /// Add overtime pay to the gross bonus
    #[arg(long)]
    pub include_overtime: bool,

    /// Leave overtime out, even when the configuration includes it
    #[arg(long, conflicts_with = "include_overtime")]
    pub no_overtime: bool,

    /// Overtime hours, used with --include-overtime
    #[arg(long, allow_hyphen_values = true)]
    pub overtime_hours: Option<String>,

    /// Show tax and deductions rows
    #[arg(long)]
    pub advanced: bool,

    /// Show the line-item breakdown
    #[arg(long)]
    pub breakdown: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ComputeArgs {
    /// Builds the form from configured defaults, overlaid with any flags given.
    pub fn form(&self, config: &BonusConfig) -> FormFields {
        let mut form = FormFields::from(&config.defaults.to_input());
        let raw_fields = [
            (fields::BASE_SALARY, &self.base_salary),
            (fields::BONUS_PERCENTAGE, &self.bonus_percentage),
            (fields::TAX_RATE, &self.tax_rate),
            (fields::DEDUCTIONS, &self.deductions),
            (fields::BONUS_FREQUENCY, &self.frequency),
            (fields::OVERTIME_HOURS, &self.overtime_hours),
        ];
        for (name, raw) in raw_fields {
            if let Some(raw) = raw {
                form.set(name, raw.as_str());
            }
        }
        if self.include_overtime {
            form.set(fields::INCLUDE_OVERTIME, true);
        } else if self.no_overtime {
            form.set(fields::INCLUDE_OVERTIME, false);
        }
        form
    }
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<BonusConfig> {
        let loaded = match &self.config {
            Some(path) => BonusConfig::load_from(path),
            None => BonusConfig::load(),
        };
        let config = loaded.inspect_err(|err| {
            error!(category = err.category(), error = %err, "Configuration rejected");
        })?;
        Ok(config)
    }

    /// Runs the command and returns what should be printed.
    pub fn execute(&self, config: &BonusConfig) -> anyhow::Result<String> {
        match &self.command {
            Command::Compute(args) => compute(args, config),
            Command::Explain => Ok(render_explanation()),
            Command::Config => Ok(config.to_toml()?),
        }
    }
}

fn compute(args: &ComputeArgs, config: &BonusConfig) -> anyhow::Result<String> {
    let form = args.form(config);
    let input = form.to_input();
    debug!(?input, "Parsed form input");

    let calculator = BonusCalculator::new();
    let result = calculator.calculate(&form.inputs());

    let mut options = config.display.options();
    options.advanced |= args.advanced;
    options.show_breakdown |= args.breakdown;
    let view = ResultView::build(&result, options);

    info!(
        calculator = calculator.name(),
        net_bonus = result.net_bonus,
        frequency = %result.bonus_frequency,
        "Bonus calculated"
    );

    let format = args.format.unwrap_or(config.display.format);
    Ok(render(&Report { input, result, view }, format)?)
}
