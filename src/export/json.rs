//! JSON Export functionality
//!
//! Exports a budget alert report together with the cash flow summary of the
//! same period.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::reports::{BudgetAlertReport, CashFlowSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export document
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub report: BudgetAlertReport,

    pub cash_flow: CashFlowSummary,
}

impl ReportExport {
    pub fn new(report: BudgetAlertReport, cash_flow: CashFlowSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
            cash_flow,
        }
    }
}

/// Write the export as JSON
pub fn export_report_json<W: Write>(
    export: &ReportExport,
    writer: &mut W,
    pretty: bool,
) -> BudgetAlertsResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| BudgetAlertsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| BudgetAlertsError::Export(e.to_string()))?;
    Ok(())
}
