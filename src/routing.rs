//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    home::get_home_page,
    ledger::{create_entry_endpoint, get_finance_page},
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::HOME_VIEW, get(get_home_page))
        .route(
            endpoints::FINANCE_VIEW,
            get(get_finance_page).post(create_entry_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the home page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::HOME_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, endpoints, routing::build_router};

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn serves_home_page() {
        let server = get_test_server();

        let response = server.get(endpoints::HOME_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Home Ledger"));
    }

    #[tokio::test]
    async fn post_then_filtered_get_round_trip() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FINANCE_VIEW)
            .form(&[
                ("date", "2024-01-15"),
                ("amount", "12.34"),
                ("type", "groceries"),
                ("remark", "weekly shop"),
            ])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("Entry added."));

        let listing = server
            .get(endpoints::FINANCE_VIEW)
            .add_query_param("start", "2024-01-01")
            .add_query_param("end", "2024-01-31")
            .await;
        listing.assert_status_ok();
        assert!(listing.text().contains("2024-01-15"));
        assert!(listing.text().contains("$12.34"));

        let excluded = server
            .get(endpoints::FINANCE_VIEW)
            .add_query_param("start", "2024-02-01")
            .await;
        excluded.assert_status_ok();
        assert!(!excluded.text().contains("2024-01-15"));
    }

    #[tokio::test]
    async fn unknown_route_renders_not_found() {
        let server = get_test_server();

        let response = server.get("/no-such-page").await;

        response.assert_status_not_found();
    }
}
