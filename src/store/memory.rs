//! In-memory expense store
//!
//! No durability: everything lives in the owned collection for the process
//! lifetime. Used for tests and ephemeral sessions.

use crate::error::ExpenseResult;
use crate::models::{ExpenseCollection, ExpenseDraft};

use super::{summary_line, ExpenseStore};

/// Store backed only by an in-memory collection
#[derive(Debug, Default)]
pub struct InMemoryStore {
    expenses: ExpenseCollection,
}

impl InMemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the underlying collection
    pub fn expenses(&self) -> &ExpenseCollection {
        &self.expenses
    }
}

impl ExpenseStore for InMemoryStore {
    fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<()> {
        self.expenses.add(draft)?;
        Ok(())
    }

    fn update(&mut self, id: u32, draft: ExpenseDraft) -> ExpenseResult<()> {
        self.expenses.update(id, draft)
    }

    fn delete(&mut self, id: u32) -> ExpenseResult<()> {
        self.expenses.delete(id)
    }

    fn list(&self) -> Vec<String> {
        self.expenses.render_lines()
    }

    fn summary(&self) -> String {
        summary_line(self.expenses.total())
    }

    fn summary_for_month(&self, month: u32) -> String {
        summary_line(self.expenses.total_for_month(month))
    }
}
