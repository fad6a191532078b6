//! Field search over a user's to-do list.
//!
//! Text fields match on case-sensitive substrings; the due date must match
//! exactly.

use crate::errors::AppError;
use crate::models::Todo;

/// The to-do field a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
    DueDate,
    Category,
}

impl SearchField {
    /// All searchable fields, in the order the search form offers them.
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Description,
        SearchField::DueDate,
        SearchField::Category,
    ];

    /// Parse the `type` parameter of a search request.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "title" => Ok(SearchField::Title),
            "description" => Ok(SearchField::Description),
            "dueDate" => Ok(SearchField::DueDate),
            "category" => Ok(SearchField::Category),
            other => Err(AppError::InvalidSearchField(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Description => "description",
            SearchField::DueDate => "dueDate",
            SearchField::Category => "category",
        }
    }

    /// Label shown in the search form.
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "Titel",
            SearchField::Description => "Beschreibung",
            SearchField::DueDate => "Fälligkeitsdatum",
            SearchField::Category => "Kategorie",
        }
    }

    pub fn matches(&self, todo: &Todo, query: &str) -> bool {
        match self {
            SearchField::Title => todo.title.contains(query),
            SearchField::Description => todo.description.contains(query),
            SearchField::DueDate => todo.due_date == query,
            SearchField::Category => todo.category.contains(query),
        }
    }
}

/// A matching to-do together with its position in the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub todo: Todo,
}

/// Collect the matches in list order.
pub fn filter_todos(todos: &[Todo], field: SearchField, query: &str) -> Vec<SearchHit> {
    todos
        .iter()
        .enumerate()
        .filter(|(_, todo)| field.matches(todo, query))
        .map(|(index, todo)| SearchHit {
            index,
            todo: todo.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTodo;

    fn todo(title: &str, description: &str, due_date: &str, category: &str) -> Todo {
        NewTodo {
            title: title.to_string(),
            description: Some(description.to_string()),
            due_date: Some(due_date.to_string()),
            category: Some(category.to_string()),
        }
        .into_todo()
    }

    fn titles(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.todo.title.as_str()).collect()
    }

    #[test]
    fn test_title_substring_keeps_order() {
        let todos = vec![
            todo("Milch", "", "", ""),
            todo("Mehl", "", "", ""),
            todo("Butter", "", "", ""),
        ];

        let hits = filter_todos(&todos, SearchField::Title, "M");
        assert_eq!(titles(&hits), vec!["Milch", "Mehl"]);
        assert_eq!(hits[1].index, 1);
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        let todos = vec![todo("Milch", "", "", "")];
        assert!(filter_todos(&todos, SearchField::Title, "m").is_empty());
    }

    #[test]
    fn test_due_date_requires_exact_match() {
        let todos = vec![
            todo("A", "", "2025-01-02", ""),
            todo("B", "", "2025-01-20", ""),
        ];

        let hits = filter_todos(&todos, SearchField::DueDate, "2025-01-2");
        assert!(hits.is_empty());

        let hits = filter_todos(&todos, SearchField::DueDate, "2025-01-20");
        assert_eq!(titles(&hits), vec!["B"]);
        assert_eq!(hits[0].index, 1);
    }

    #[test]
    fn test_category_and_description() {
        let todos = vec![
            todo("A", "beim Bäcker", "", "Einkauf"),
            todo("B", "", "", ""),
        ];

        assert_eq!(
            titles(&filter_todos(&todos, SearchField::Category, "Allg")),
            vec!["B"]
        );
        assert_eq!(
            titles(&filter_todos(&todos, SearchField::Description, "Bäcker")),
            vec!["A"]
        );
    }

    #[test]
    fn test_parse_search_field() {
        for field in SearchField::ALL {
            assert_eq!(SearchField::parse(field.as_str()).unwrap(), field);
        }
        assert!(matches!(
            SearchField::parse("status"),
            Err(AppError::InvalidSearchField(f)) if f == "status"
        ));
        assert!(SearchField::parse("Title").is_err());
    }
}
