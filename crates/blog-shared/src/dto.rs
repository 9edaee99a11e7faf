//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional at the serde level so that a missing field
//! surfaces as a validation failure naming the field, rather than as an
//! opaque deserialization error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author as sent by clients: `{"firstName": "...", "lastName": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl AuthorPayload {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    fn missing_fields(&self, out: &mut Vec<String>) {
        if is_blank(&self.first_name) {
            out.push("author.firstName".to_string());
        }
        if is_blank(&self.last_name) {
            out.push("author.lastName".to_string());
        }
    }
}

/// Request to create a post. POST /posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn new(author: AuthorPayload, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: Some(author),
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Names of required fields that are absent or blank, in field order.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        match &self.author {
            Some(author) => author.missing_fields(&mut missing),
            None => missing.push("author".to_string()),
        }
        if is_blank(&self.title) {
            missing.push("title".to_string());
        }
        if is_blank(&self.content) {
            missing.push("content".to_string());
        }
        missing
    }
}

/// Request to update a post. PUT /posts/{id}
///
/// Every field is optional; `id`, when present, must match the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Public read projection of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    /// Flattened "First Last".
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
