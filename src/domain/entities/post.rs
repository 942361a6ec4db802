//! Post, like and comment payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post text.
    pub content: String,
}

/// Body for liking a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePost {
    /// Target post id.
    pub post_id: u64,
}

/// Like counter after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikePostResponse {
    /// Post id.
    pub id: u64,
    /// Updated like count.
    pub likes: u64,
}

/// Post as stored by the backend; the code snippet is only referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct RawPost {
    pub id: u64,
    pub content: String,
    pub user_id: u64,
    pub file_id: Option<String>,
    #[serde(rename = "code_url")]
    pub code_url: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub avatar: Option<String>,
    pub likes: u64,
    pub user_has_liked: bool,
}

/// Post with its code snippet resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Post {
    pub id: u64,
    pub content: String,
    pub user_id: u64,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub avatar: Option<String>,
    pub likes: u64,
    pub user_has_liked: bool,
    pub file_id: Option<String>,
    #[serde(rename = "code_url")]
    pub code_url: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "code_language")]
    pub code_language: Option<String>,
}

impl Post {
    /// Builds a post from its raw form and the downloaded snippet.
    #[must_use]
    pub fn from_raw(raw: RawPost, code: Option<String>, code_language: Option<String>) -> Self {
        Self {
            id: raw.id,
            content: raw.content,
            user_id: raw.user_id,
            username: raw.username,
            created_at: raw.created_at,
            avatar: raw.avatar,
            likes: raw.likes,
            user_has_liked: raw.user_has_liked,
            file_id: raw.file_id,
            code_url: raw.code_url,
            code,
            code_language,
        }
    }
}

/// Comment under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Comment {
    pub id: u64,
    pub avatar: String,
    pub username: String,
    pub user_id: u64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub has_liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "id": 12,
        "content": "look at this",
        "userId": 3,
        "fileId": null,
        "code_url": "https://cdn.codevalley.dev/snippets/12.rs",
        "username": "trinity",
        "createdAt": "2024-05-01T10:00:00Z",
        "avatar": null,
        "likes": 4,
        "userHasLiked": true
    }"#;

    #[test]
    fn test_raw_post_mixed_case_fields() {
        let raw: RawPost = serde_json::from_str(RAW).unwrap();
        assert_eq!(raw.user_id, 3);
        assert_eq!(
            raw.code_url.as_deref(),
            Some("https://cdn.codevalley.dev/snippets/12.rs")
        );
        assert!(raw.user_has_liked);
    }

    #[test]
    fn test_post_from_raw_keeps_metadata() {
        let raw: RawPost = serde_json::from_str(RAW).unwrap();
        let post = Post::from_raw(raw.clone(), Some("fn main() {}".into()), Some("rust".into()));

        assert_eq!(post.id, raw.id);
        assert_eq!(post.created_at, raw.created_at);
        assert_eq!(post.code_language.as_deref(), Some("rust"));

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["code_language"], "rust");
        assert_eq!(json["userHasLiked"], true);
    }

    #[test]
    fn test_like_post_wire_name() {
        let body = serde_json::to_value(LikePost { post_id: 9 }).unwrap();
        assert_eq!(body, serde_json::json!({"postId": 9}));
    }

    #[test]
    fn test_comment_requires_all_fields() {
        let missing_avatar = r#"{"id":1,"username":"a","userId":2,"content":"c",
            "createdAt":"2024-05-01T10:00:00Z","hasLiked":false}"#;
        assert!(serde_json::from_str::<Comment>(missing_avatar).is_err());
    }
}
