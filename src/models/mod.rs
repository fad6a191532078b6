//! Data models for the to-do application.
//!
//! The serialized layout matches the JSON document on disk field for field.

mod document;
mod todo;
mod user;

pub use document::*;
pub use todo::*;
pub use user::*;
