//! Registration and login endpoints.

use axum::{extract::State, response::Html, response::Redirect, Form};

use super::{render, HtmlResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::CredentialsForm;
use crate::AppState;

/// POST /register - Create an account and continue to its list.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, AppError> {
    // Reject before paying for the hash
    if form.name.is_empty() {
        return Err(AppError::Validation(
            "Registrierung fehlgeschlagen. Der Benutzername darf nicht leer sein.".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&form.pw).await?;
    state.store.register(&form.name, &password_hash).await?;

    tracing::info!("New user registered: {:?}", form.name);
    Ok(Redirect::to(&format!(
        "/todolist?name={}",
        urlencoding::encode(&form.name)
    )))
}

/// POST /login - Check credentials and show the user's list.
///
/// Unknown users and wrong passwords get the same answer.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> HtmlResult {
    let document = state.store.snapshot().await?;

    let Some(user) = document.find_user(&form.name) else {
        return Err(AppError::AuthFailed);
    };
    if !auth::verify_password(&form.pw, &user.password_hash).await {
        return Err(AppError::AuthFailed);
    }

    tracing::debug!("User {:?} logged in", form.name);
    Ok(Html(render::todo_list_page(
        &form.name,
        document.todos_of(&form.name),
    )))
}
