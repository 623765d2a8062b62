use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a short text post as the backend returns it.
///
/// The backend assigns `id` and `user_id`; the owning user id never changes
/// after creation. Deserialization is strict about the fields it does use,
/// so a malformed payload fails at the boundary instead of propagating
/// missing fields into the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    /// Author summary embedded by the backend for display.
    #[serde(rename = "User", default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PostAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Display name of the author, falling back when the backend did not
    /// embed one.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.username.as_str())
            .unwrap_or("unknown")
    }

    /// Whether the given user id owns this post. Advisory only - the
    /// backend enforces ownership on mutation.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// The author include on a fetched post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub username: String,
}

/// The only payload the client ever sends for create/update.
///
/// Deliberately has no user id field: ownership derives from the bearer
/// token on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "title": "Hello",
            "content": "World",
            "userId": 3,
            "User": { "username": "alice" },
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 3);
        assert_eq!(post.author_name(), "alice");
        assert!(post.created_at.is_some());
    }

    #[test]
    fn author_name_falls_back_without_include() {
        let json = r#"{"id":1,"title":"t","content":"c","userId":2}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author_name(), "unknown");
    }

    #[test]
    fn rejects_payload_missing_required_fields() {
        let json = r#"{"id":1,"title":"t"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn draft_serializes_without_user_id() {
        let draft = PostDraft::new("T", "C");
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("title"));
        assert!(object.contains_key("content"));
    }
}
