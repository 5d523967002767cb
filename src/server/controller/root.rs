use axum::response::Redirect;

/// Entry page of the static front end.
pub static FRONT_END_ENTRY: &str = "/static/index.html";

/// Redirects the site root to the front end.
pub async fn root() -> Redirect {
    Redirect::temporary(FRONT_END_ENTRY)
}
