//! Ordered expense collection
//!
//! Owns id assignment, validation, mutation, and aggregation over an ordered
//! sequence of expenses. Stores wrap one collection each; the collection is
//! the single source of truth for a save.

use chrono::{Datelike, Utc};

use crate::error::{ExpenseError, ExpenseResult};

use super::expense::{Expense, ExpenseDraft, LIST_HEADER};

/// Ordered, mutable container of expenses with unique ids
#[derive(Debug, Clone, Default)]
pub struct ExpenseCollection {
    expenses: Vec<Expense>,
}

impl ExpenseCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expenses in the collection
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate over expenses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Look up an expense by id
    pub fn get(&self, id: u32) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    // Next id is one past the current maximum. Deleting the max-id entry
    // lets a later add reuse that numeric value; interior gaps are never
    // back-filled.
    fn next_id(&self) -> u32 {
        self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Add a new expense from a draft, returning the assigned id.
    ///
    /// Assigns the id, stamps `created_at`, and appends to the end of the
    /// sequence. A negative amount is rejected without mutating anything.
    pub fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<u32> {
        if draft.amount < 0 {
            return Err(ExpenseError::negative_amount(draft.amount));
        }

        let id = self.next_id();
        self.expenses.push(Expense {
            id,
            description: draft.description,
            amount: draft.amount,
            created_at: Utc::now(),
            updated_at: None,
        });

        Ok(id)
    }

    /// Overwrite the amount and description of the expense with `id` and
    /// stamp `updated_at`.
    ///
    /// The amount is validated before the id search, so a negative amount is
    /// rejected even when no such id exists. An unknown id leaves the
    /// collection untouched.
    pub fn update(&mut self, id: u32, draft: ExpenseDraft) -> ExpenseResult<()> {
        if draft.amount < 0 {
            return Err(ExpenseError::negative_amount(draft.amount));
        }

        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.amount = draft.amount;
                expense.description = draft.description;
                expense.updated_at = Some(Utc::now());
                Ok(())
            }
            None => Err(ExpenseError::not_found(id)),
        }
    }

    /// Remove the expense with `id`, preserving the order of the rest.
    pub fn delete(&mut self, id: u32) -> ExpenseResult<()> {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(index) => {
                self.expenses.remove(index);
                Ok(())
            }
            None => Err(ExpenseError::not_found(id)),
        }
    }

    /// Re-insert an expense loaded from storage, bypassing id assignment and
    /// validation. Only storage backends should call this during hydration.
    pub fn restore(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// The listing: a fixed header line followed by one rendered line per
    /// expense in current order.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.expenses.len() + 1);
        lines.push(LIST_HEADER.to_string());
        lines.extend(self.expenses.iter().map(Expense::render));
        lines
    }

    /// Sum of all amounts
    pub fn total(&self) -> i64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts for expenses whose effective date falls in `month` of
    /// the *current* calendar year.
    ///
    /// The current-year coupling is a confirmed business rule: an expense
    /// from another year is excluded even when its month matches.
    pub fn total_for_month(&self, month: u32) -> i64 {
        self.total_for_month_in_year(month, Utc::now().year())
    }

    /// Sum of amounts for expenses whose effective date falls in `month` of
    /// `year`.
    pub fn total_for_month_in_year(&self, month: u32, year: i32) -> i64 {
        self.expenses
            .iter()
            .filter(|e| {
                let date = e.effective_date();
                date.month() == month && date.year() == year
            })
            .map(|e| e.amount)
            .sum()
    }
}
