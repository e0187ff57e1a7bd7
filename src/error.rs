//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Validation errors (rejected input, no state change)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expense id not present in the collection
    #[error("Expense not found: {id}")]
    NotFound { id: u32 },

    /// Storage errors (I/O failures, malformed rows)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a validation error for a negative amount
    pub fn negative_amount(amount: i64) -> Self {
        Self::Validation(format!("amount cannot be negative: {}", amount))
    }

    /// Create a "not found" error for an expense id
    pub fn not_found(id: u32) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<chrono::ParseError> for ExpenseError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Storage(format!("malformed date: {}", err))
    }
}

/// Result type alias for spendlog operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
