//! Defines the route handler and template for the home landing page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Render the landing page.
pub async fn get_home_page() -> Response {
    home_view().into_response()
}

fn home_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::HOME_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 text-center"
            {
                h1 class="text-xl font-bold" { "Welcome" }

                p
                {
                    "Track your spending on the "
                    a href=(endpoints::FINANCE_VIEW) class=(LINK_STYLE) { "finance" }
                    " page."
                }
            }
        }
    };

    base("Home", &content)
}
