//! Expense entity and its textual rendering
//!
//! One recorded line item: an amount in whole currency units, a free-text
//! description, and creation/update timestamps. The fixed-width rendering
//! here is shared with the CSV codec, which is why both use [`DATE_FORMAT`].

use chrono::{DateTime, Utc};

/// Date rendering used by both listing output and the CSV file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header line emitted before rendered expense rows
pub const LIST_HEADER: &str = "|ID|Description|Amount|Created At|Updated At|";

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique identifier, assigned by the collection
    pub id: u32,

    /// Free-text description
    pub description: String,

    /// Amount in the domain currency unit (no conversion is performed)
    pub amount: i64,

    /// When the expense was recorded; never changes after creation
    pub created_at: DateTime<Utc>,

    /// When the expense was last updated; `None` until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// The date an expense counts toward for month-scoped aggregation:
    /// the last update if there was one, otherwise the creation time.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Render the expense as one fixed-width listing row.
    ///
    /// Field widths are left-justified pad targets, not truncation limits;
    /// an expense that was never updated renders an empty final field.
    pub fn render(&self) -> String {
        let created = self.created_at.format(DATE_FORMAT).to_string();
        let updated = self
            .updated_at
            .map(|t| t.format(DATE_FORMAT).to_string())
            .unwrap_or_default();

        format!(
            "|{:<3}|{:<10}|{:<6}|{:<10}|{:<10}|",
            self.id, self.description, self.amount, created, updated
        )
    }
}

/// A caller-supplied candidate for creating or updating an expense.
///
/// Ids and timestamps are never supplied by callers; the collection assigns
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Free-text description
    pub description: String,

    /// Amount in the domain currency unit; must be non-negative
    pub amount: i64,
}

impl ExpenseDraft {
    /// Create a new draft
    pub fn new(description: impl Into<String>, amount: i64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}
