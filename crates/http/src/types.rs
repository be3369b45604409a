//! Wire types exchanged with the Tasklist API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login and registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Token pair issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Refresh response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// A single task record owned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    /// Server fields this client does not model, echoed back on update
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Todo {
    pub fn new(id: i64, title: impl Into<String>, is_completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_completed,
            extra: Map::new(),
        }
    }

    /// Copy of this todo with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }

    /// Copy of this todo with a new title
    pub fn renamed(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Create todo request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_uses_camel_case_on_the_wire() {
        let todo = Todo::new(1, "x", false);
        assert_eq!(
            serde_json::to_value(&todo).unwrap(),
            json!({"id": 1, "title": "x", "isCompleted": false})
        );
    }

    #[test]
    fn test_toggled_keeps_other_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 7,
            "title": "water plants",
            "isCompleted": true,
            "userId": 42,
            "createdAt": "2024-01-01"
        }))
        .unwrap();
        let toggled = todo.toggled();
        assert_eq!(toggled.id, 7);
        assert_eq!(toggled.title, "water plants");
        assert!(!toggled.is_completed);
        assert_eq!(
            serde_json::to_value(&toggled.renamed("repot plants")).unwrap(),
            json!({
                "id": 7,
                "title": "repot plants",
                "isCompleted": false,
                "userId": 42,
                "createdAt": "2024-01-01"
            })
        );
    }

    #[test]
    fn test_token_pair_parses_server_response() {
        let pair: TokenPair =
            serde_json::from_value(json!({"accessToken": "a", "refreshToken": "r"})).unwrap();
        assert_eq!(pair.access_token, "a");
        assert_eq!(pair.refresh_token, "r");
    }
}
