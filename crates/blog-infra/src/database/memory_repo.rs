//! In-memory post repository - used when no database is configured and by
//! the integration test harness.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn listing_order(a: &BlogPost, b: &BlogPost) -> std::cmp::Ordering {
        a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                post.id
            )));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;

        // All-or-nothing, like a single multi-row INSERT.
        if let Some(dup) = posts.iter().find(|p| store.contains_key(&p.id)) {
            return Err(RepoError::Constraint(format!("post {} already exists", dup.id)));
        }

        let count = posts.len() as u64;
        for post in posts {
            store.insert(post.id, post);
        }
        Ok(count)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(Self::listing_order);
        Ok(posts)
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().min_by(|a, b| Self::listing_order(a, b)).cloned())
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(changes);
        Ok(post.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        self.store.write().await.clear();
        Ok(())
    }
}
