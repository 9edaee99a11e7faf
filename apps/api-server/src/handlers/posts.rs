//! Post CRUD handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, PostChanges};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

/// A path segment that is not a UUID cannot name a stored post.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", ENTITY, raw)))
}

fn not_found(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }
        .into(),
        other => other.into(),
    }
}

fn author_from(payload: AuthorPayload) -> Result<Author, DomainError> {
    Author::new(
        payload.first_name.unwrap_or_default(),
        payload.last_name.unwrap_or_default(),
    )
}

fn new_post(req: CreatePostRequest) -> AppResult<BlogPost> {
    let missing = req.missing_fields();

    // `missing_fields` is empty exactly when all three are present and non-blank.
    let (true, Some(author), Some(title), Some(content)) =
        (missing.is_empty(), req.author, req.title, req.content)
    else {
        return Err(AppError::Validation(
            missing
                .into_iter()
                .map(|field| format!("missing required field: {}", field))
                .collect(),
        ));
    };

    Ok(BlogPost::new(author_from(author)?, title, content))
}

fn changes_for(id: Uuid, req: UpdatePostRequest) -> AppResult<PostChanges> {
    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::Validation(vec![format!(
                "request path id ({}) and request body id ({}) must match",
                id, body_id
            )]));
        }
    }

    let changes = PostChanges {
        author: req.author.map(author_from).transpose()?,
        title: req.title,
        content: req.content,
    };
    changes.validate()?;

    Ok(changes)
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = new_post(body.into_inner())?;
    let saved = state.posts.save(post).await?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .json(to_response(saved)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let changes = changes_for(id, body.into_inner())?;

    state.posts.update(id, changes).await.map_err(not_found(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await.map_err(not_found(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
