//! The persistent document: the account directory plus every user's to-do list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Todo, User};

/// The root document stored on disk.
///
/// Keys of `user_todo_lists` without a matching user record are tolerated on
/// read; mutations never create them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub users: Vec<User>,
    pub user_todo_lists: BTreeMap<String, Vec<Todo>>,
}

impl Document {
    /// Find the first user record with exactly this name.
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// The user's list, or an empty slice if the user has none.
    pub fn todos_of(&self, name: &str) -> &[Todo] {
        self.user_todo_lists
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
