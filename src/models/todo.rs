//! To-do item model.

use serde::{Deserialize, Serialize};

/// Category assigned when the form leaves it empty.
pub const DEFAULT_CATEGORY: &str = "Allgemein";

/// Completion state of a to-do item. Stored as the literals `Offen` / `Erledigt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoStatus {
    #[serde(rename = "Offen")]
    Open,
    #[serde(rename = "Erledigt")]
    Done,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Open => "Offen",
            TodoStatus::Done => "Erledigt",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Open => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Open,
        }
    }
}

/// One item of a user's list. Items are addressed by their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub status: TodoStatus,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Fields supplied when appending a to-do. Empty optional fields fall back to
/// their defaults.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
}

impl NewTodo {
    #[cfg(test)]
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Build the stored record. The status always starts out open.
    pub fn into_todo(self) -> Todo {
        Todo {
            title: self.title,
            description: non_empty(self.description).unwrap_or_default(),
            due_date: non_empty(self.due_date).unwrap_or_default(),
            category: non_empty(self.category).unwrap_or_else(default_category),
            status: TodoStatus::Open,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Form body for `POST /addtodo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTodoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl AddTodoForm {
    /// Split the form into the owner's name and the new item.
    pub fn into_parts(self) -> (String, NewTodo) {
        let todo = NewTodo {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            category: self.category,
        };
        (self.name, todo)
    }
}

/// Form body for `POST /togglestatus`. The index stays text so a malformed
/// value is reported like any other bad position.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub index: String,
}

/// Query string for `GET /searchtodos`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "type")]
    pub field: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_creation() {
        let todo = NewTodo {
            title: "Milch".into(),
            description: None,
            due_date: Some("2025-01-02".into()),
            category: Some(String::new()),
        }
        .into_todo();

        assert_eq!(todo.description, "");
        assert_eq!(todo.due_date, "2025-01-02");
        assert_eq!(todo.category, "Allgemein");
        assert_eq!(todo.status, TodoStatus::Open);
    }

    #[test]
    fn test_status_literals() {
        let json = serde_json::to_string(&TodoStatus::Done).unwrap();
        assert_eq!(json, "\"Erledigt\"");
        assert!(serde_json::from_str::<TodoStatus>("\"Fertig\"").is_err());
        assert_eq!(TodoStatus::Open.toggled().toggled(), TodoStatus::Open);
    }

    #[test]
    fn test_missing_fields_read_with_defaults() {
        let todo: Todo = serde_json::from_str(r#"{"title":"Brot","status":"Offen"}"#).unwrap();
        assert_eq!(todo.category, "Allgemein");
        assert_eq!(todo.due_date, "");
    }
}
