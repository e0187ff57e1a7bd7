//! spendlog - Personal expense tracker for the command line
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: an ordered collection of expense records with id assignment,
//! validation, and aggregation, behind a store contract with in-memory and
//! CSV-file-backed implementations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and path management
//! - `error`: Custom error types
//! - `models`: The expense entity and the ordered collection engine
//! - `store`: The store contract and its two backends
//! - `cli`: Command handlers bridging clap to the store
//!
//! # Example
//!
//! ```rust
//! use spendlog::models::ExpenseDraft;
//! use spendlog::store::{ExpenseStore, InMemoryStore};
//!
//! let mut store = InMemoryStore::new();
//! store.add(ExpenseDraft::new("Lunch", 20))?;
//! assert_eq!(store.summary(), "Total expenses: 20");
//! # Ok::<(), spendlog::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::ExpenseError;
