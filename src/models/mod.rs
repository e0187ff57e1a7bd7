//! Core data models for spendlog
//!
//! The expense entity, the caller-facing draft type, and the ordered
//! collection that owns id assignment, validation, and aggregation.

pub mod collection;
pub mod expense;

pub use collection::ExpenseCollection;
pub use expense::{Expense, ExpenseDraft, DATE_FORMAT, LIST_HEADER};
