//! Root handler.

/// Banner returned by `GET /`.
pub const BANNER: &str = "Clinic API is running";

/// Handler for `GET [base]/`.
///
/// Returns a plain-text banner so a browser pointed at the server shows
/// something useful.
pub async fn index_handler() -> &'static str {
    BANNER
}
