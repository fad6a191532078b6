//! Store operations over the JSON document.
//!
//! Every mutation runs snapshot, change and commit while holding one lock, so
//! concurrent requests cannot lose each other's writes.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::sync::Mutex;

use super::write_atomically;
use crate::errors::AppError;
use crate::models::{Document, NewTodo, Todo, User};
use crate::search::{filter_todos, SearchField, SearchHit};

/// Accepted due date layout.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sole owner of the persistent document.
pub struct Store {
    data_path: PathBuf,
    write_lock: Mutex<()>,
}

impl Store {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Read and parse the document as it is on disk right now.
    pub async fn snapshot(&self) -> Result<Document, AppError> {
        let raw = tokio::fs::read_to_string(&self.data_path)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read {:?}: {}", self.data_path, e);
                AppError::StorageUnavailable(format!("{}: {}", self.data_path.display(), e))
            })?;

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Failed to parse {:?}: {}", self.data_path, e);
            AppError::StorageCorrupt(format!("{}: {}", self.data_path.display(), e))
        })
    }

    /// Replace the document on disk.
    pub async fn commit(&self, document: &Document) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        write_atomically(&self.data_path, document).await
    }

    /// Run `change` against a fresh snapshot and commit the result.
    ///
    /// Nothing is written when `change` fails.
    async fn update<T, F>(&self, change: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Document) -> Result<T, AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.snapshot().await?;
        let result = change(&mut document)?;
        write_atomically(&self.data_path, &document).await?;
        Ok(result)
    }

    // ==================== USER OPERATIONS ====================

    /// Add a user record and an empty list for it.
    pub async fn register(&self, name: &str, password_hash: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::Validation(
                "Registrierung fehlgeschlagen. Der Benutzername darf nicht leer sein.".to_string(),
            ));
        }

        self.update(|document| {
            if document.find_user(name).is_some() {
                return Err(AppError::NameTaken(name.to_string()));
            }

            document.users.push(User {
                name: name.to_string(),
                password_hash: password_hash.to_string(),
            });
            document
                .user_todo_lists
                .entry(name.to_string())
                .or_default();
            Ok(())
        })
        .await?;

        tracing::debug!("Registered user {:?}", name);
        Ok(())
    }

    /// Look up a user by exact name.
    pub async fn find_user(&self, name: &str) -> Result<Option<User>, AppError> {
        let document = self.snapshot().await?;
        Ok(document.find_user(name).cloned())
    }

    // ==================== TODO OPERATIONS ====================

    /// Append a to-do to `name`'s list and return the updated list.
    ///
    /// A missing list is created; whether `name` is a registered user is the
    /// caller's concern.
    pub async fn append_todo(&self, name: &str, todo: NewTodo) -> Result<Vec<Todo>, AppError> {
        validate_new_todo(&todo)?;
        let todo = todo.into_todo();

        let list = self
            .update(|document| {
                let list = document
                    .user_todo_lists
                    .entry(name.to_string())
                    .or_default();
                list.push(todo);
                Ok(list.clone())
            })
            .await?;

        tracing::debug!("Appended todo #{} for {:?}", list.len() - 1, name);
        Ok(list)
    }

    /// Flip the status of the to-do at `index`.
    ///
    /// Returns the updated to-do and the user's list as committed.
    pub async fn toggle_todo(
        &self,
        name: &str,
        index: usize,
    ) -> Result<(Todo, Vec<Todo>), AppError> {
        let (todo, list) = self
            .update(|document| {
                let list = document
                    .user_todo_lists
                    .get_mut(name)
                    .filter(|list| index < list.len())
                    .ok_or_else(|| AppError::OutOfRange {
                        name: name.to_string(),
                        index: index.to_string(),
                    })?;
                let todo = &mut list[index];
                todo.status = todo.status.toggled();
                Ok((todo.clone(), list.clone()))
            })
            .await?;

        tracing::debug!(
            "Toggled todo #{} for {:?} to {}",
            index,
            name,
            todo.status.as_str()
        );
        Ok((todo, list))
    }

    /// Find `name`'s to-dos whose `field` matches `query`.
    pub async fn search(
        &self,
        name: &str,
        field: &str,
        query: &str,
    ) -> Result<Vec<SearchHit>, AppError> {
        let field = SearchField::parse(field)?;
        let document = self.snapshot().await?;
        Ok(filter_todos(document.todos_of(name), field, query))
    }
}

fn validate_new_todo(todo: &NewTodo) -> Result<(), AppError> {
    if todo.title.is_empty() {
        return Err(AppError::Validation(
            "Der Titel darf nicht leer sein.".to_string(),
        ));
    }

    if let Some(due_date) = todo.due_date.as_deref().filter(|d| !d.is_empty()) {
        let canonical = NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT)
            .map(|date| date.format(DUE_DATE_FORMAT).to_string() == due_date)
            .unwrap_or(false);
        if !canonical {
            return Err(AppError::Validation(format!(
                "Ungültiges Fälligkeitsdatum \"{}\". Erwartet wird JJJJ-MM-TT.",
                due_date
            )));
        }
    }

    Ok(())
}
