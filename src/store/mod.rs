//! Storage layer for spendlog
//!
//! Defines the store contract every backend satisfies and provides two
//! implementations: an ephemeral in-memory store and a CSV-file-backed
//! store that rewrites the file after every mutation.

pub mod csv;
pub mod memory;

pub use csv::CsvStore;
pub use memory::InMemoryStore;

use crate::error::ExpenseResult;
use crate::models::ExpenseDraft;

/// Capability contract for expense storage backends.
///
/// Each backend owns one [`ExpenseCollection`](crate::models::ExpenseCollection)
/// and delegates the id/validation/aggregation rules to it; the trait only
/// adds durability. Listing and summaries return rendered lines rather than
/// printing, so callers decide where the text goes.
pub trait ExpenseStore {
    /// Record a new expense
    fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<()>;

    /// Overwrite the amount and description of the expense with `id`
    fn update(&mut self, id: u32, draft: ExpenseDraft) -> ExpenseResult<()>;

    /// Remove the expense with `id`
    fn delete(&mut self, id: u32) -> ExpenseResult<()>;

    /// The listing: header line followed by one rendered line per expense
    fn list(&self) -> Vec<String>;

    /// Overall total, rendered as `Total expenses: <n>`
    fn summary(&self) -> String;

    /// Total for `month` of the current year, rendered as `Total expenses: <n>`
    fn summary_for_month(&self, month: u32) -> String;
}

/// Shared rendering for the summary lines
pub(crate) fn summary_line(total: i64) -> String {
    format!("Total expenses: {}", total)
}
