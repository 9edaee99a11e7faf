use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a newly created entity and return the stored form.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// The post collection.
///
/// Listing order is `created` ascending with ties broken by `id`, for every
/// implementation.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Bulk insert, returning how many records were written.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError>;

    /// All stored posts.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The first post in listing order, if any.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Apply a partial update and return the stored result.
    /// Fails with `RepoError::NotFound` if the id is unknown.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post. Only test teardown calls this.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
