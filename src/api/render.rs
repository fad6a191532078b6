//! HTML rendering for all pages.
//!
//! Every user-supplied string passes through [`escape_html`] before it is
//! interpolated.

use crate::models::Todo;
use crate::search::{SearchField, SearchHit};

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// A bare message, as sent for rejected registrations and logins.
pub fn message_page(message: &str) -> String {
    escape_html(message)
}

/// `GET /` - login form.
pub fn login_page() -> String {
    page(
        "Login",
        r#"<h1>To-Do App</h1>
<form method="post" action="/login">
    <label for="name">Name:</label>
    <input id="name" name="name" type="text">
    <label for="pw">Passwort:</label>
    <input id="pw" name="pw" type="password">
    <button type="submit">Login</button>
</form>
<br>
<form method="get" action="/register">
    <button type="submit">Zur Registrierung</button>
</form>"#,
    )
}

/// `GET /register` - registration form.
pub fn register_page() -> String {
    page(
        "Registrierung",
        r#"<h1>Registrierung</h1>
<form method="post" action="/register">
    <label for="name">Name:</label>
    <input id="name" name="name" type="text">
    <label for="pw">Passwort:</label>
    <input id="pw" name="pw" type="password">
    <button type="submit">Registrieren</button>
</form>
<br>
<a href="/">Zurück zum Login</a>"#,
    )
}

/// The full list of `name` with forms to add, search and toggle.
pub fn todo_list_page(name: &str, todos: &[Todo]) -> String {
    let name_html = escape_html(name);
    let mut body = format!(
        r#"<h2>To-Do-Liste für {name}</h2>
<form method="post" action="/addtodo">
    <input type="hidden" name="name" value="{name}">
    <label for="title">Titel:</label>
    <input id="title" name="title" type="text" placeholder="Titel" required>
    <label for="description">Beschreibung:</label>
    <input id="description" name="description" type="text" placeholder="Beschreibung (optional)">
    <label for="dueDate">Fälligkeitsdatum:</label>
    <input id="dueDate" name="dueDate" type="date">
    <label for="category">Kategorie:</label>
    <input id="category" name="category" type="text" placeholder="Allgemein">
    <button type="submit">Hinzufügen</button>
</form>
<form method="get" action="/searchtodos">
    <input type="hidden" name="name" value="{name}">
    <label for="query">Suche:</label>
    <input id="query" name="query" type="text" placeholder="Suche">
    <select name="type">
"#,
        name = name_html
    );
    for field in SearchField::ALL {
        body.push_str(&format!(
            "        <option value=\"{}\">{}</option>\n",
            field.as_str(),
            field.label()
        ));
    }
    body.push_str("    </select>\n    <button type=\"submit\">Suchen</button>\n</form>\n");

    body.push_str("<ul>");
    for (index, todo) in todos.iter().enumerate() {
        push_item(&mut body, name, index, todo);
    }
    body.push_str("</ul>");

    page(&format!("To-Do-Liste für {}", name), &body)
}

/// Search matches of `name`, each with a toggle form for its list position.
pub fn search_results_page(name: &str, hits: &[SearchHit]) -> String {
    let mut body = format!("<h2>Suchergebnisse für {}</h2>\n", escape_html(name));

    if hits.is_empty() {
        body.push_str("<p>Keine Treffer.</p>\n");
    } else {
        body.push_str("<ul>");
        for hit in hits {
            push_item(&mut body, name, hit.index, &hit.todo);
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        r#"<a href="/todolist?name={}">Zurück zur Liste</a>"#,
        escape_html(&urlencoding::encode(name))
    ));

    page(&format!("Suchergebnisse für {}", name), &body)
}

fn push_item(body: &mut String, name: &str, index: usize, todo: &Todo) {
    body.push_str(&format!(
        "\n    <li>\n        <strong>{}</strong>",
        escape_html(&todo.title)
    ));
    if !todo.description.is_empty() {
        body.push_str(&format!("\n        <br>{}", escape_html(&todo.description)));
    }
    if !todo.due_date.is_empty() {
        body.push_str(&format!("\n        <br>Fällig: {}", escape_html(&todo.due_date)));
    }
    body.push_str(&format!(
        r#"
        <br>Kategorie: {category}
        <br>Status: {status}
        <form method="post" action="/togglestatus">
            <input type="hidden" name="name" value="{name}">
            <input type="hidden" name="index" value="{index}">
            <button type="submit">Status ändern</button>
        </form>
    </li>"#,
        category = escape_html(&todo.category),
        status = todo.status.as_str(),
        name = escape_html(name),
        index = index
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTodo, TodoStatus};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
        assert_eq!(escape_html("Fälligkeit"), "Fälligkeit");
    }

    #[test]
    fn test_list_page_escapes_user_input() {
        let todo = NewTodo::titled("<b>fett</b>").into_todo();
        let html = todo_list_page("<img src=x>", &[todo]);

        assert!(html.contains("To-Do-Liste für &lt;img src=x&gt;"));
        assert!(html.contains("<strong>&lt;b&gt;fett&lt;/b&gt;</strong>"));
        assert!(!html.contains("<img src=x>"));
    }

    #[test]
    fn test_list_page_forms() {
        let html = todo_list_page("alice", &[]);

        assert!(html.contains(r#"action="/searchtodos""#));
        assert!(html.contains(r#"<option value="dueDate">"#));
        assert!(html.contains(r#"name="category""#));
        assert!(html.contains("<ul></ul>"));
    }

    #[test]
    fn test_search_page_uses_list_positions() {
        let mut todo = NewTodo::titled("Mehl").into_todo();
        todo.status = TodoStatus::Done;
        let html = search_results_page("alice", &[SearchHit { index: 4, todo }]);

        assert!(html.contains("Suchergebnisse für alice"));
        assert!(html.contains(r#"name="index" value="4""#));
        assert!(html.contains("Status: Erledigt"));
        assert!(html.contains(r#"href="/todolist?name=alice""#));
    }

    #[test]
    fn test_item_lists_optional_fields_only_when_set() {
        let bare = NewTodo::titled("Brot").into_todo();
        let full = NewTodo {
            title: "Steuer".into(),
            description: Some("Belege sammeln".into()),
            due_date: Some("2025-05-31".into()),
            category: Some("Büro".into()),
        }
        .into_todo();
        let html = todo_list_page("alice", &[bare, full]);

        assert!(html.contains("<strong>Brot</strong>\n        <br>Kategorie: Allgemein"));
        assert!(html.contains("<br>Belege sammeln\n        <br>Fällig: 2025-05-31"));
        assert!(html.contains("<br>Kategorie: Büro"));
        assert!(html.contains(r#"name="index" value="1""#));
        assert!(html.contains(r#"<option value="category">Kategorie</option>"#));
    }

    #[test]
    fn test_search_page_without_hits() {
        let html = search_results_page("a b", &[]);
        assert!(html.contains("Keine Treffer."));
        assert!(html.contains(r#"href="/todolist?name=a%20b""#));
    }
}
