//! The application's endpoint URIs.

/// The root route which redirects to the home page.
pub const ROOT: &str = "/";
/// The landing page.
pub const HOME_VIEW: &str = "/home";
/// The page for displaying and adding ledger entries.
pub const FINANCE_VIEW: &str = "/finance";
/// The route for static files.
pub const STATIC: &str = "/static";
