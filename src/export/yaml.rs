//! YAML Export functionality

use std::io::Write;

use crate::error::{BudgetAlertsError, BudgetAlertsResult};
use crate::export::json::ReportExport;

/// Write the export as YAML with a short comment header
pub fn export_report_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> BudgetAlertsResult<()> {
    let to_export_error = |e: std::io::Error| BudgetAlertsError::Export(e.to_string());

    writeln!(writer, "# budget-alerts report export").map_err(to_export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_error)?;
    writeln!(writer).map_err(to_export_error)?;

    serde_yaml::to_writer(writer, export).map_err(|e| BudgetAlertsError::Export(e.to_string()))?;

    Ok(())
}
