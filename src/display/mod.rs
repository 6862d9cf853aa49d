//! Display formatting for terminal output
//!
//! Tables and register views for budgets, transactions and reports.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_list, format_status_table};
pub use report::{format_category_list, format_spending_by_category};
pub use transaction::{format_transaction_register, format_transaction_row};

/// Format a spend ratio as a percentage; "n/a" when the limit is not positive
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.1}%", ratio * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
