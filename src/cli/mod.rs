//! CLI command handlers
//!
//! Bridges clap argument parsing with the store contract. Handlers are
//! generic over the store so tests can run them against the in-memory
//! backend.

use clap::Subcommand;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseDraft;
use crate::store::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(short, long)]
        description: String,
        /// Amount of the expense (whole currency units)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: i64,
    },
    /// List all expenses
    List,
    /// Update the description and amount of an expense
    Update {
        /// ID of the expense
        #[arg(long)]
        id: u32,
        /// New description
        #[arg(short, long)]
        description: String,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: i64,
    },
    /// Delete an expense
    Delete {
        /// ID of the expense
        #[arg(long)]
        id: u32,
    },
    /// Show the total of all expenses, or of one month of the current year
    Summary {
        /// Month (1-12); 0 or omitted means the overall total
        #[arg(short, long)]
        month: Option<u32>,
    },
}

/// Handle an expense command against the given store
pub fn handle_command<S: ExpenseStore>(store: &mut S, cmd: Commands) -> ExpenseResult<()> {
    match cmd {
        Commands::Add {
            description,
            amount,
        } => {
            // Required and non-zero at the command surface; negative amounts
            // fall through to the collection's validation.
            if description.is_empty() || amount == 0 {
                return Err(ExpenseError::Validation(
                    "Description and amount are required".into(),
                ));
            }
            store.add(ExpenseDraft::new(description, amount))?;
        }

        Commands::List => {
            for line in store.list() {
                println!("{}", line);
            }
        }

        Commands::Update {
            id,
            description,
            amount,
        } => {
            store.update(id, ExpenseDraft::new(description, amount))?;
        }

        Commands::Delete { id } => {
            store.delete(id)?;
        }

        Commands::Summary { month } => match month {
            None | Some(0) => println!("{}", store.summary()),
            Some(month @ 1..=12) => println!("{}", store.summary_for_month(month)),
            Some(month) => {
                return Err(ExpenseError::Validation(format!(
                    "month must be between 1 and 12, got {}",
                    month
                )))
            }
        },
    }

    Ok(())
}
