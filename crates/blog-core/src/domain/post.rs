use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Create an author, rejecting blank name parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "author.firstName must not be empty".to_string(),
            ));
        }
        if last_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "author.lastName must not be empty".to_string(),
            ));
        }

        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// The "First Last" form used in read projections.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// BlogPost entity - the single article type served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post stamped with a fresh id and the current time.
    pub fn new(author: Author, title: String, content: String) -> Self {
        Self::with_created(author, title, content, Utc::now())
    }

    /// Create a new post with an explicit creation time (used for seeding).
    pub fn with_created(
        author: Author,
        title: String,
        content: String,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created,
        }
    }

    /// Overwrite the fields present in `changes`. `id` and `created` never change.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// A partial update to a post. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }

    /// Reject empty change sets and blank text fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(
                "at least one of author, title or content is required".to_string(),
            ));
        }
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        if matches!(&self.content, Some(c) if c.trim().is_empty()) {
            return Err(DomainError::Validation(
                "content must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
