//! Static form pages.

use axum::response::Html;

use super::render;

/// GET / - Login form.
pub async fn login_form() -> Html<String> {
    Html(render::login_page())
}

/// GET /register - Registration form.
pub async fn register_form() -> Html<String> {
    Html(render::register_page())
}
