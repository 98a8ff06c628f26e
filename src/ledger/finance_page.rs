//! Defines the route handler for the page that displays ledger entries as a table.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{AppState, Error};

use super::{
    core::{get_entries, truncated_total},
    date_input::DateFilter,
    view::{FilterInputs, finance_view},
};

/// The state needed for the finance page.
#[derive(Debug, Clone)]
pub struct LedgerViewState {
    /// The database connection for reading ledger entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LedgerViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The optional query parameters for filtering the ledger listing.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// The lower date boundary in `YYYY-MM-DD` form.
    #[serde(default)]
    pub start: Option<String>,
    /// The upper date boundary in `YYYY-MM-DD` form.
    #[serde(default)]
    pub end: Option<String>,
}

/// Render the ledger listing, optionally bounded by the `start`/`end`
/// query parameters, along with the truncated total and the entry form.
///
/// Malformed boundary dates silently widen the query instead of producing
/// an error. Storage failures on this path are not contained and render
/// as an internal server error.
pub async fn get_finance_page(
    State(state): State<LedgerViewState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();
    let filter = DateFilter::from_params(&start, &end);

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let entries = get_entries(filter, &connection)?;
    let total = truncated_total(&entries);

    Ok(finance_view(&entries, total, None, &FilterInputs { start, end }).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{
        db::initialize,
        ledger::core::{EntryDraft, InsertOutcome, submit_entry},
        test_utils::{assert_valid_html, parse_html_document},
    };

    use super::{FilterQuery, LedgerViewState, get_finance_page};

    fn get_test_state() -> LedgerViewState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        for (date, amount) in [
            ("2024-01-01", "10.0"),
            ("2024-01-15", "20.0"),
            ("2024-02-01", "30.0"),
        ] {
            let outcome = submit_entry(
                &EntryDraft {
                    date: date.to_owned(),
                    amount: amount.to_owned(),
                    entry_type: "test".to_owned(),
                    remark: "sample".to_owned(),
                },
                &conn,
            );
            assert_eq!(outcome, InsertOutcome::Inserted);
        }

        LedgerViewState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn entry_dates(html: &Html) -> Vec<String> {
        let selector = Selector::parse("tbody tr td:first-child").unwrap();
        html.select(&selector)
            .map(|cell| cell.text().collect::<String>())
            .filter(|text| text != "No entries.")
            .collect()
    }

    fn total_text(html: &Html) -> String {
        let selector = Selector::parse("main p span").unwrap();
        html.select(&selector)
            .next()
            .expect("expected a total on the page")
            .text()
            .collect()
    }

    #[tokio::test]
    async fn no_filter_lists_all_entries_with_total() {
        let state = get_test_state();

        let response = get_finance_page(State(state), Query(FilterQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(
            entry_dates(&html),
            vec!["2024-01-01", "2024-01-15", "2024-02-01"]
        );
        assert_eq!(total_text(&html), "$60.00");
    }

    #[tokio::test]
    async fn start_filter_drops_earlier_entries() {
        let state = get_test_state();

        let query = FilterQuery {
            start: Some("2024-01-10".to_owned()),
            end: None,
        };
        let response = get_finance_page(State(state), Query(query)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(entry_dates(&html), vec!["2024-01-15", "2024-02-01"]);
        assert_eq!(total_text(&html), "$50.00");
    }

    #[tokio::test]
    async fn invalid_start_is_ignored() {
        let state = get_test_state();

        let query = FilterQuery {
            start: Some("not-a-date".to_owned()),
            end: Some("2024-01-15".to_owned()),
        };
        let response = get_finance_page(State(state), Query(query)).await.unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(entry_dates(&html), vec!["2024-01-01", "2024-01-15"]);
    }

    #[tokio::test]
    async fn fresh_page_load_has_no_status_banner() {
        let state = get_test_state();

        let response = get_finance_page(State(state), Query(FilterQuery::default()))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let selector = Selector::parse("#status-banner").unwrap();
        assert!(html.select(&selector).next().is_none());
    }

    #[tokio::test]
    async fn read_failure_is_fatal_to_the_request() {
        let state = get_test_state();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE ledger", ())
            .unwrap();

        let result = get_finance_page(State(state), Query(FilterQuery::default())).await;

        assert!(result.is_err());
    }
}
