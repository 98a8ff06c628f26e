//! Database initialization for the application.

use rusqlite::Connection;

use crate::{Error, ledger::create_ledger_table};

/// Create the application's tables if they do not already exist.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is some other
/// SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_ledger_table(connection)?;

    Ok(())
}
