//! Database operations for blog posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Blog post row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    /// Unique blog ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// Creator's user ID
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Blog post joined with its creator's public fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BlogWithCreator {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub user_id: Uuid,
    pub creator_name: String,
    pub creator_email: String,
}

const BLOG_WITH_CREATOR: &str = r#"
    SELECT b.id, b.title, b.body, b.user_id,
           u.name AS creator_name, u.email AS creator_email
    FROM blogs b
    JOIN users u ON u.id = b.user_id
"#;

/// Get all blogs with their creators, oldest first
pub async fn list_blogs(pool: &SqlitePool) -> Result<Vec<BlogWithCreator>, sqlx::Error> {
    sqlx::query_as::<_, BlogWithCreator>(&format!("{BLOG_WITH_CREATOR} ORDER BY b.created_at"))
        .fetch_all(pool)
        .await
}

/// Get one blog with its creator, or `None` if not found
pub async fn get_blog(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<BlogWithCreator>, sqlx::Error> {
    sqlx::query_as::<_, BlogWithCreator>(&format!("{BLOG_WITH_CREATOR} WHERE b.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Create a new blog post owned by `user_id`
pub async fn create_blog(
    pool: &SqlitePool,
    title: &str,
    body: &str,
    user_id: Uuid,
) -> Result<Blog, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO blogs (id, title, body, user_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(body)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Blog {
        id,
        title: title.to_string(),
        body: body.to_string(),
        user_id,
        created_at: now,
        updated_at: now,
    })
}

/// Update a blog's title and body.
///
/// Returns `true` if a row was updated, `false` if no blog has this id.
pub async fn update_blog(
    pool: &SqlitePool,
    id: Uuid,
    title: &str,
    body: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE blogs
        SET title = ?, body = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a blog.
///
/// Returns `true` if a row was deleted, `false` if no blog has this id.
pub async fn delete_blog(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
