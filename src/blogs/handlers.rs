//! Blog Handlers
//!
//! HTTP handlers for blog CRUD. All of these routes sit behind the bearer
//! token middleware; the authenticated user arrives via the [`AuthUser`]
//! extractor and is used as the creator when posting.
//!
//! # Routes
//!
//! - `GET /blog` - List all blogs
//! - `POST /blog` - Create a blog (201)
//! - `GET /blog/{id}` - Get one blog
//! - `PUT /blog/{id}` - Update title/body (202)
//! - `DELETE /blog/{id}` - Delete (204)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::blogs::db::{
    create_blog, delete_blog, get_blog, list_blogs, update_blog, BlogWithCreator,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::users::UserResponse;

/// Blog create/update request
#[derive(Deserialize, Serialize, Debug)]
pub struct BlogRequest {
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
}

/// Blog response with the creator's public fields
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BlogResponse {
    /// Blog's unique ID
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// The user who created the post
    pub creator: UserResponse,
}

impl From<BlogWithCreator> for BlogResponse {
    fn from(row: BlogWithCreator) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            creator: UserResponse {
                id: row.user_id,
                name: row.creator_name,
                email: row.creator_email,
            },
        }
    }
}

fn blog_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Blog with the id {id} is not available"))
}

/// List all blogs
pub async fn all(State(pool): State<SqlitePool>) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let blogs = list_blogs(&pool).await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Create a blog owned by the authenticated user
///
/// # Errors
///
/// * `400 Bad Request` - empty title
pub async fn create(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<BlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title must not be empty"));
    }

    let blog = create_blog(&pool, &request.title, &request.body, user.id).await?;

    tracing::info!("Blog created: {} by {}", blog.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            id: blog.id,
            title: blog.title,
            body: blog.body,
            creator: UserResponse {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

/// Get one blog
///
/// # Errors
///
/// * `404 Not Found` - no blog with this id
pub async fn show(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog = get_blog(&pool, id).await?.ok_or_else(|| blog_not_found(id))?;
    Ok(Json(BlogResponse::from(blog)))
}

/// Update a blog's title and body
///
/// # Errors
///
/// * `404 Not Found` - no blog with this id
pub async fn update(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
    Json(request): Json<BlogRequest>,
) -> Result<(StatusCode, Json<&'static str>), ApiError> {
    let updated = update_blog(&pool, id, &request.title, &request.body).await?;
    if !updated {
        return Err(blog_not_found(id));
    }

    Ok((StatusCode::ACCEPTED, Json("updated")))
}

/// Delete a blog
///
/// # Errors
///
/// * `404 Not Found` - no blog with this id
pub async fn destroy(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = delete_blog(&pool, id).await?;
    if !deleted {
        return Err(blog_not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
