//! Report formatting utilities for terminal output

use std::collections::BTreeMap;

use super::{format_bar, truncate};
use crate::models::{CategoryId, Money};

const BAR_WIDTH: usize = 20;

/// Format per-category spend with a bar relative to the largest category
pub fn format_spending_by_category(totals: &BTreeMap<CategoryId, Money>, symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = totals.values().map(|m| m.cents()).max().unwrap_or(0) as f64;
    let total: Money = totals.values().sum();

    let mut output = String::new();
    for (category, spent) in totals {
        output.push_str(&format!(
            "{:<18} {:>12}  {}\n",
            truncate(category.as_str(), 18),
            spent.format_with_symbol(symbol),
            format_bar(spent.cents() as f64, max, BAR_WIDTH)
        ));
    }
    output.push_str(&"-".repeat(31));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format a list of category names, one per line
pub fn format_category_list(categories: &[CategoryId]) -> String {
    let mut output = String::new();
    for category in categories {
        output.push_str(category.as_str());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spending_by_category() {
        let mut totals = BTreeMap::new();
        totals.insert(CategoryId::new("Food").unwrap(), Money::from_units(100));
        totals.insert(CategoryId::new("Transport").unwrap(), Money::from_units(50));

        let output = format_spending_by_category(&totals, "$");
        assert!(output.contains("Food"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("$150.00"));
    }

    #[test]
    fn test_no_spending() {
        assert_eq!(
            format_spending_by_category(&BTreeMap::new(), "$"),
            "No expenses recorded.\n"
        );
    }
}
