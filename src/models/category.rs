//! Category value type
//!
//! Budgets and transactions are correlated only through their category, so
//! both sides share this type. Surrounding whitespace is trimmed on
//! construction; after that, comparison is exact and case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categories offered even before any transaction uses them
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Housing",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

/// A non-empty, trimmed category name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a category, trimming whitespace
    pub fn new(name: impl AsRef<str>) -> Result<Self, CategoryValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CategoryValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default category list as values
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| Self((*name).to_string()))
            .collect()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryId {
    type Err = CategoryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = CategoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(category: CategoryId) -> Self {
        category.0
    }
}

/// Validation errors for category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    Empty,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
