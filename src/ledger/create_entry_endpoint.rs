//! Defines the endpoint for creating a new ledger entry.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error};

use super::{
    core::{EntryDraft, get_entries, submit_entry, truncated_total},
    date_input::DateFilter,
    view::{FilterInputs, finance_view},
};

/// The state needed to create a ledger entry.
#[derive(Debug, Clone)]
pub struct CreateEntryState {
    /// The database connection for managing ledger entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateEntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for creating a ledger entry.
///
/// All fields are kept as raw text: validation happens in
/// [submit_entry] so that a malformed value becomes a rendered
/// rejection rather than a request-level parse error.
#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    /// The date when the transaction occurred, in `YYYY-MM-DD` form.
    #[serde(default)]
    pub date: Option<String>,
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: Option<String>,
    /// A free-text label for the kind of transaction.
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    /// A free-text note about the transaction.
    #[serde(default)]
    pub remark: Option<String>,
}

impl EntryForm {
    /// Collect the form into a draft entry if all four fields were
    /// submitted, even if some are empty or malformed.
    fn into_draft(self) -> Option<EntryDraft> {
        match (self.date, self.amount, self.entry_type, self.remark) {
            (Some(date), Some(amount), Some(entry_type), Some(remark)) => Some(EntryDraft {
                date,
                amount,
                entry_type,
                remark,
            }),
            _ => None,
        }
    }
}

/// A route handler for creating a new ledger entry, then re-rendering the
/// full unfiltered listing.
///
/// If any of the four fields is missing from the form, no insert is
/// attempted and the page renders without a status banner. An attempted
/// insert renders its outcome as the status banner; insert failures never
/// propagate beyond this handler. Storage failures while re-reading the
/// listing are fatal to the request.
pub async fn create_entry_endpoint(
    State(state): State<CreateEntryState>,
    Form(form): Form<EntryForm>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let status = form.into_draft().map(|draft| submit_entry(&draft, &connection));

    let entries = get_entries(DateFilter::default(), &connection)?;
    let total = truncated_total(&entries);

    Ok(finance_view(&entries, total, status.as_ref(), &FilterInputs::default()).into_response())
}
