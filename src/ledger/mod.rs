//! Ledger management for the application.
//!
//! This module contains everything related to ledger entries:
//! - The `LedgerEntry` model and the database functions for querying and
//!   inserting entries
//! - The date-range filter and its permissive date parsing
//! - The route handlers for the finance page

pub(crate) mod core;
mod create_entry_endpoint;
pub(crate) mod date_input;
mod finance_page;
mod view;

pub use self::core::create_ledger_table;
pub use create_entry_endpoint::create_entry_endpoint;
pub use finance_page::get_finance_page;
