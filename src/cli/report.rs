//! Report CLI commands
//!
//! Budget alerts, cash flow, spending by category and report export.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::format_spending_by_category;
use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml, ReportExport};
use crate::models::{OwnerId, Period};
use crate::reports::{BudgetAlertReport, CashFlowSummary};
use crate::services::{PeriodService, SpendingService};
use crate::storage::{Snapshot, Storage};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (budget status rows)
    Csv,
    /// JSON format (full report)
    Json,
    /// YAML format (full report, human-readable)
    Yaml,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show budget status and alerts
    Alerts {
        /// Budget period (e.g., "2025-01", "January", "current", "last")
        #[arg(short, long)]
        period: Option<String>,
        /// Include every budget up to and including the period
        #[arg(short, long)]
        through: bool,
    },

    /// Show total income, expenses and net balance
    Summary {
        /// Restrict to one period (all time when omitted)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show expenses by category for a period
    Spending {
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export the budget report
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        period: Option<String>,
        /// Include every budget up to and including the period
        #[arg(short, long)]
        through: bool,
    },
}

fn build_report(
    snapshot: &Snapshot,
    owner: OwnerId,
    period: Period,
    through: bool,
    settings: &Settings,
) -> BudgetAlertReport {
    if through {
        BudgetAlertReport::generate_through(snapshot, owner, period, settings)
    } else {
        BudgetAlertReport::generate(snapshot, owner, period, settings)
    }
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    owner: OwnerId,
    cmd: ReportCommands,
) -> BudgetAlertsResult<()> {
    let period_service = PeriodService::new();
    let symbol = settings.currency_symbol.as_str();
    let snapshot = Snapshot::capture(storage, owner)?;

    match cmd {
        ReportCommands::Alerts { period, through } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let report = build_report(&snapshot, owner, period, through, settings);
            print!("{}", report.format_terminal(symbol));
        }

        ReportCommands::Summary { period } => {
            let period = match period.as_deref() {
                Some(p) => Some(period_service.parse(p)?),
                None => None,
            };
            let summary = CashFlowSummary::generate(&snapshot, owner, period);
            print!("{}", summary.format_terminal(symbol));
        }

        ReportCommands::Spending { period } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let totals = SpendingService::new(&snapshot).totals_by_category(owner, period);

            println!(
                "Spending - {}",
                period_service.format_period_friendly(&period)
            );
            println!("{}", "=".repeat(31));
            print!("{}", format_spending_by_category(&totals, symbol));
        }

        ReportCommands::Export {
            format,
            output,
            period,
            through,
        } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let report = build_report(&snapshot, owner, period, through, settings);

            match &output {
                Some(path) => {
                    let file = File::create(path).map_err(|e| {
                        BudgetAlertsError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    write_export(&snapshot, owner, period, report, format, BufWriter::new(file))?;
                    println!("Report exported to: {}", path.display());
                }
                None => {
                    let stdout = io::stdout();
                    write_export(&snapshot, owner, period, report, format, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    snapshot: &Snapshot,
    owner: OwnerId,
    period: Period,
    report: BudgetAlertReport,
    format: ExportFormat,
    mut writer: W,
) -> BudgetAlertsResult<()> {
    match format {
        ExportFormat::Csv => export_report_csv(&report, &mut writer)?,
        ExportFormat::Json | ExportFormat::Yaml => {
            let cash_flow = CashFlowSummary::generate(snapshot, owner, Some(period));
            let export = ReportExport::new(report, cash_flow);
            if format == ExportFormat::Json {
                export_report_json(&export, &mut writer, true)?;
            } else {
                export_report_yaml(&export, &mut writer)?;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| BudgetAlertsError::Export(e.to_string()))?;
    Ok(())
}
