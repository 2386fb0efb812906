/**
 * User Model and Database Operations
 *
 * This module handles user records. Usernames and emails are unique at the
 * schema level; the signup handler checks them up front to report which one
 * collided.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, first_name, last_name, created_at";

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Empty when not supplied at signup
    pub first_name: String,
    /// Empty when not supplied at signup
    pub last_name: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a user
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Create a new user
///
/// # Returns
/// Created user, or a database error (including unique violations)
pub async fn create_user(pool: &SqlitePool, new_user: NewUser<'_>) -> Result<User, sqlx::Error> {
    let query = format!(
        "INSERT INTO users (username, email, password_hash, first_name, last_name, created_at) \
         VALUES (?, ?, ?, ?, ?, ?) \
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");

    sqlx::query_as::<_, User>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");

    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");

    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Delete a user; their events go with them (ON DELETE CASCADE)
///
/// # Returns
/// Whether a row was removed
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
