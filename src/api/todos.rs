//! To-do list endpoints.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};

use super::{render, HtmlResult};
use crate::errors::AppError;
use crate::models::{AddTodoForm, NameQuery, ToggleForm};
use crate::AppState;

/// GET /todolist - Show a user's list.
pub async fn todo_list(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> HtmlResult {
    let document = state.store.snapshot().await?;
    Ok(Html(render::todo_list_page(
        &params.name,
        document.todos_of(&params.name),
    )))
}

/// POST /addtodo - Append a to-do and show the updated list.
pub async fn add_todo(State(state): State<AppState>, Form(form): Form<AddTodoForm>) -> HtmlResult {
    let (name, todo) = form.into_parts();

    // Only registered users get lists.
    if state.store.find_user(&name).await?.is_none() {
        return Err(AppError::Validation(format!(
            "Unbekannter Benutzer \"{}\".",
            name
        )));
    }

    let todos = state.store.append_todo(&name, todo).await?;
    Ok(Html(render::todo_list_page(&name, &todos)))
}

/// POST /togglestatus - Flip a to-do between Offen and Erledigt.
pub async fn toggle_status(
    State(state): State<AppState>,
    Form(form): Form<ToggleForm>,
) -> HtmlResult {
    let index = form
        .index
        .trim()
        .parse::<usize>()
        .map_err(|_| AppError::OutOfRange {
            name: form.name.clone(),
            index: form.index.clone(),
        })?;

    let (_, todos) = state.store.toggle_todo(&form.name, index).await?;
    Ok(Html(render::todo_list_page(&form.name, &todos)))
}
