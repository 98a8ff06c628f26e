//! Defines the core data model and database queries for the ledger.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::Date;

use crate::Error;

use super::date_input::{DateFilter, parse_date};

// ============================================================================
// MODELS
// ============================================================================

/// One financial transaction record.
///
/// Entries are insert-only: the application never updates or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A free-text label for the kind of transaction, e.g. "groceries".
    pub entry_type: String,
    /// A free-text note about the transaction.
    pub remark: String,
}

/// The raw form fields of a candidate ledger entry, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    /// The transaction date as submitted, expected in `YYYY-MM-DD` form.
    pub date: String,
    /// The amount as submitted, expected to parse as a decimal number.
    pub amount: String,
    /// A free-text label for the kind of transaction.
    pub entry_type: String,
    /// A free-text note about the transaction.
    pub remark: String,
}

/// The outcome of a write attempt, shown to the user as a status banner.
///
/// A fresh page load carries no outcome at all (`Option::None` at the
/// call sites), which is distinct from both variants here.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// The entry was persisted.
    Inserted,
    /// The entry was not persisted. The reason is only ever rendered to
    /// the user and logged, never matched on.
    Rejected(String),
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Map a database row of (date, amount, entry_type, remark) to a [LedgerEntry].
pub fn map_ledger_row(row: &Row) -> Result<LedgerEntry, rusqlite::Error> {
    Ok(LedgerEntry {
        date: row.get(0)?,
        amount: row.get(1)?,
        entry_type: row.get(2)?,
        remark: row.get(3)?,
    })
}

/// Retrieve the ledger entries that fall within `filter`, ordered by
/// ascending date.
///
/// Exactly one of four query variants runs, selected by which boundaries
/// the filter carries.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_entries(filter: DateFilter, connection: &Connection) -> Result<Vec<LedgerEntry>, Error> {
    let entries = match (filter.start, filter.end) {
        (Some(start), Some(end)) => connection
            .prepare(
                "SELECT date, amount, entry_type, remark FROM ledger
                 WHERE date BETWEEN :start AND :end ORDER BY date ASC",
            )?
            .query_map(&[(":start", &start), (":end", &end)], map_ledger_row)?
            .collect::<Result<Vec<_>, _>>()?,
        (Some(start), None) => connection
            .prepare(
                "SELECT date, amount, entry_type, remark FROM ledger
                 WHERE date >= :start ORDER BY date ASC",
            )?
            .query_map(&[(":start", &start)], map_ledger_row)?
            .collect::<Result<Vec<_>, _>>()?,
        (None, Some(end)) => connection
            .prepare(
                "SELECT date, amount, entry_type, remark FROM ledger
                 WHERE date <= :end ORDER BY date ASC",
            )?
            .query_map(&[(":end", &end)], map_ledger_row)?
            .collect::<Result<Vec<_>, _>>()?,
        (None, None) => connection
            .prepare("SELECT date, amount, entry_type, remark FROM ledger ORDER BY date ASC")?
            .query_map([], map_ledger_row)?
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(entries)
}

/// Validate `draft` and attempt to persist it as a new ledger entry.
///
/// Failures are contained here: a malformed date or amount, or an SQL
/// error, yields [InsertOutcome::Rejected] and leaves the ledger
/// unchanged. Nothing propagates to the caller.
pub fn submit_entry(draft: &EntryDraft, connection: &Connection) -> InsertOutcome {
    let Some(date) = parse_date(&draft.date) else {
        return InsertOutcome::Rejected(format!("{:?} is not a date in YYYY-MM-DD form", draft.date));
    };

    let amount: f64 = match draft.amount.parse() {
        Ok(amount) => amount,
        Err(_) => {
            return InsertOutcome::Rejected(format!("{:?} is not a number", draft.amount));
        }
    };

    let result = connection.execute(
        "INSERT INTO ledger (date, amount, entry_type, remark) VALUES (?1, ?2, ?3, ?4)",
        (date, amount, &draft.entry_type, &draft.remark),
    );

    match result {
        Ok(_) => InsertOutcome::Inserted,
        Err(error) => {
            tracing::warn!("could not insert ledger entry: {error}");
            InsertOutcome::Rejected(error.to_string())
        }
    }
}

/// Compute the sum of the entries' amounts, truncated to two decimal places.
///
/// Truncation takes the integer part of `sum * 100` and divides by 100,
/// so a sum of 20.005 reports as 20.0 rather than the rounded 20.01.
pub fn truncated_total(entries: &[LedgerEntry]) -> f64 {
    let sum: f64 = entries.iter().map(|entry| entry.amount).sum();

    (sum * 100.0).trunc() / 100.0
}

/// Create the ledger table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_ledger_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS ledger (
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                entry_type TEXT NOT NULL,
                remark TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}


#[cfg(test)]
mod submit_entry_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{db::initialize, ledger::date_input::DateFilter};

    use super::{EntryDraft, InsertOutcome, get_entries, submit_entry};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn valid_draft() -> EntryDraft {
        EntryDraft {
            date: "2024-03-01".to_owned(),
            amount: "12.34".to_owned(),
            entry_type: "groceries".to_owned(),
            remark: "weekly shop".to_owned(),
        }
    }

    #[test]
    fn valid_draft_is_inserted() {
        let conn = get_test_connection();

        let outcome = submit_entry(&valid_draft(), &conn);

        assert_eq!(outcome, InsertOutcome::Inserted);

        let entries = get_entries(DateFilter::default(), &conn).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date!(2024 - 03 - 01));
        assert_eq!(entries[0].amount, 12.34);
        assert_eq!(entries[0].entry_type, "groceries");
        assert_eq!(entries[0].remark, "weekly shop");
    }

    #[test]
    fn malformed_date_is_rejected_without_insert() {
        let conn = get_test_connection();

        let outcome = submit_entry(
            &EntryDraft {
                date: "2024-02-30".to_owned(),
                ..valid_draft()
            },
            &conn,
        );

        assert!(matches!(outcome, InsertOutcome::Rejected(_)));
        assert!(get_entries(DateFilter::default(), &conn).unwrap().is_empty());
    }

    #[test]
    fn malformed_amount_is_rejected_without_insert() {
        let conn = get_test_connection();

        let outcome = submit_entry(
            &EntryDraft {
                amount: "twelve".to_owned(),
                ..valid_draft()
            },
            &conn,
        );

        assert!(matches!(outcome, InsertOutcome::Rejected(_)));
        assert!(get_entries(DateFilter::default(), &conn).unwrap().is_empty());
    }

    #[test]
    fn sql_failure_is_contained_as_rejection() {
        let conn = get_test_connection();
        conn.execute("DROP TABLE ledger", ()).unwrap();

        let outcome = submit_entry(&valid_draft(), &conn);

        assert!(matches!(outcome, InsertOutcome::Rejected(_)));
    }
}
