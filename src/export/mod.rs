//! Export module for budget-alerts
//!
//! - CSV: budget status rows and transactions (spreadsheet-compatible)
//! - JSON: the full report document, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_report_csv, export_transactions_csv};
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
