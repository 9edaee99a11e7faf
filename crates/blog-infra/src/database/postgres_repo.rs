//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Select};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn in_listing_order() -> Select<PostEntity> {
    PostEntity::find()
        .order_by_asc(post::Column::Created)
        .order_by_asc(post::Column::Id)
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        if posts.is_empty() {
            return Ok(0);
        }
        tracing::debug!(count = posts.len(), "Inserting posts");

        let models: Vec<post::ActiveModel> = posts.into_iter().map(Into::into).collect();
        PostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(repo_err)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = in_listing_order().all(&self.db).await.map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = in_listing_order().one(&self.db).await.map_err(repo_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError> {
        let existing = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_err)?
            .ok_or(RepoError::NotFound)?;

        let mut post: BlogPost = existing.into();
        post.apply(changes);

        let active: post::ActiveModel = post.into();
        let model = active.update(&self.db).await.map_err(repo_err)?;

        Ok(model.into())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(repo_err)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(repo_err)?;
        tracing::debug!(removed = result.rows_affected, "Dropped all posts");

        Ok(())
    }
}
