//! CSV-file-backed expense store
//!
//! Hydrates its collection from the backing file on open and rewrites the
//! whole file after every successful mutation. The collection in memory is
//! the single source of truth for a save; there is no append log and no
//! batching. Quoting and escaping are delegated to the csv codec.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use csv::{Reader, Writer, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseCollection, ExpenseDraft, DATE_FORMAT};

use super::{summary_line, ExpenseStore};

/// Column headers of the backing file; order is fixed
pub const FILE_HEADER: [&str; 5] = ["ID", "Description", "Amount", "Created At", "Updated At"];

/// One row of the backing file. Dates travel as `%Y-%m-%d` strings, with an
/// empty updated field meaning "never updated".
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: i64,
    #[serde(rename = "Created At")]
    created_at: String,
    #[serde(rename = "Updated At")]
    updated_at: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description.clone(),
            amount: expense.amount,
            created_at: expense.created_at.format(DATE_FORMAT).to_string(),
            updated_at: expense
                .updated_at
                .map(|t| t.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

impl ExpenseRow {
    fn into_expense(self) -> ExpenseResult<Expense> {
        Ok(Expense {
            id: self.id,
            description: self.description,
            amount: self.amount,
            created_at: parse_date(&self.created_at)?,
            updated_at: if self.updated_at.is_empty() {
                None
            } else {
                Some(parse_date(&self.updated_at)?)
            },
        })
    }
}

// Dates round-trip at day precision; the time of day is not persisted.
fn parse_date(text: &str) -> ExpenseResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Store backed by a flat CSV file on local disk
#[derive(Debug)]
pub struct CsvStore {
    expenses: ExpenseCollection,
    path: PathBuf,
}

impl CsvStore {
    /// Open a store against `path`.
    ///
    /// Creates the file with only the header row when it does not exist,
    /// then loads every existing row into the collection. An unwritable
    /// path or a malformed row is a fatal open error.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        if !path.exists() {
            write_rows(&path, std::iter::empty())?;
        }

        let expenses = load(&path)?;
        Ok(Self { expenses, path })
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access the underlying collection
    pub fn expenses(&self) -> &ExpenseCollection {
        &self.expenses
    }

    fn save(&self) -> ExpenseResult<()> {
        write_rows(&self.path, self.expenses.iter())
    }
}

fn load(path: &Path) -> ExpenseResult<ExpenseCollection> {
    let mut reader = Reader::from_path(path)?;
    let mut expenses = ExpenseCollection::new();

    for row in reader.deserialize::<ExpenseRow>() {
        expenses.restore(row?.into_expense()?);
    }

    Ok(expenses)
}

// Full rewrite: truncates the file, writes the header, then every expense
// in collection order.
fn write_rows<'a>(
    path: &Path,
    expenses: impl Iterator<Item = &'a Expense>,
) -> ExpenseResult<()> {
    let mut writer: Writer<_> = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(FILE_HEADER)?;
    for expense in expenses {
        writer.serialize(ExpenseRow::from(expense))?;
    }
    writer.flush()?;

    Ok(())
}

impl ExpenseStore for CsvStore {
    fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<()> {
        self.expenses.add(draft)?;
        self.save()
    }

    fn update(&mut self, id: u32, draft: ExpenseDraft) -> ExpenseResult<()> {
        self.expenses.update(id, draft)?;
        self.save()
    }

    fn delete(&mut self, id: u32) -> ExpenseResult<()> {
        self.expenses.delete(id)?;
        self.save()
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
