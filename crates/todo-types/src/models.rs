use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account, identified by its unique `username`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    /// Insertion order is the order returned to clients.
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            todos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    /// `None` when the client sent something that is not a time.
    #[serde(with = "crate::time::iso_millis_opt")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(with = "crate::time::iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: impl Into<String>, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            deadline,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn todo_wire_shape() {
        let deadline = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let todo = Todo::new("Buy milk", Some(deadline));
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["id"], todo.id.to_string());
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["done"], false);
        assert_eq!(json["deadline"], "2024-01-01T00:00:00.000Z");
        assert!(json["created_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn invalid_deadline_serializes_as_null() {
        let json = serde_json::to_value(Todo::new("x", None)).unwrap();
        assert!(json["deadline"].is_null());
    }

    #[test]
    fn new_user_has_no_todos() {
        let user = User::new("Ann", "ann");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["username"], "ann");
        assert_eq!(json["todos"], serde_json::json!([]));
    }

    #[test]
    fn user_with_todos_reads_back_from_json() {
        let mut user = User::new("Ann", "ann");
        let mut dated = Todo::new("dated", Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        dated.created_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        dated.done = true;
        let mut undated = Todo::new("undated", None);
        undated.created_at = Utc.timestamp_millis_opt(1_700_000_000_456).unwrap();
        user.todos = vec![dated, undated];

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn sub_millisecond_precision_is_dropped_on_the_wire() {
        let mut todo = Todo::new("x", None);
        todo.created_at = Utc.timestamp_nanos(1_700_000_000_123_456_789);

        let back: Todo = serde_json::from_value(serde_json::to_value(&todo).unwrap()).unwrap();
        assert_eq!(back.created_at, Utc.timestamp_millis_opt(1_700_000_000_123).unwrap());
    }

    #[test]
    fn malformed_timestamp_does_not_deserialize() {
        let raw = serde_json::json!({
            "id": uuid::Uuid::new_v4(),
            "title": "x",
            "done": false,
            "deadline": "soon",
            "created_at": "2024-01-01T00:00:00.000Z",
        });
        assert!(serde_json::from_value::<Todo>(raw).is_err());
    }
}
