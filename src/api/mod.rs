//! HTTP handlers.
//!
//! Handlers translate form and query parameters into store and auth calls and
//! render the outcome as HTML. Business rules live in the store.

mod accounts;
mod pages;
pub mod render;
mod search;
mod todos;

pub use accounts::*;
pub use pages::*;
pub use search::*;
pub use todos::*;

use axum::response::Html;

/// Response type for handlers that render a page.
pub type HtmlResult = Result<Html<String>, crate::errors::AppError>;
