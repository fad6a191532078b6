//! User account model.

use serde::{Deserialize, Serialize};

/// An account in the user directory.
///
/// `name` is the case-sensitive primary key. The hash field keeps its
/// on-disk name `passwort` so existing data files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(rename = "passwort")]
    pub password_hash: String,
}

/// Form body for `POST /register` and `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pw: String,
}

/// Query string carrying only the user name.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}
