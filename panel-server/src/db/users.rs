use shared::models::{RoleSummary, User, UserSummary, UserWithRole};
use sqlx::PgPool;
use uuid::Uuid;

/// User row joined with its role name, used for login and role checks
#[derive(sqlx::FromRow)]
pub struct UserAuthRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role_id: Uuid,
    pub role_name: String,
}

#[derive(sqlx::FromRow)]
struct UserRoleRow {
    id: Uuid,
    name: String,
    email: String,
    role_id: Uuid,
    role_name: String,
}

impl From<UserRoleRow> for UserWithRole {
    fn from(row: UserRoleRow) -> Self {
        UserWithRole {
            id: row.id,
            name: row.name,
            email: row.email,
            role: RoleSummary {
                id: row.role_id,
                name: row.role_name,
            },
        }
    }
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_auth_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserAuthRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT u.id, u.email, u.name, u.password_hash, u.role_id, r.name AS role_name
         FROM users u JOIN roles r ON r.id = u.role_id
         WHERE u.email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_auth_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<UserAuthRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT u.id, u.email, u.name, u.password_hash, u.role_id, r.name AS role_name
         FROM users u JOIN roles r ON r.id = u.role_id
         WHERE u.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_summary_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<UserSummary>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, email FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List users with their role summary, optionally filtered by role name.
pub async fn list(
    pool: &PgPool,
    role_filter: Option<&str>,
) -> Result<Vec<UserWithRole>, sqlx::Error> {
    let rows: Vec<UserRoleRow> = match role_filter {
        Some(role_name) => {
            sqlx::query_as(
                "SELECT u.id, u.name, u.email, u.role_id, r.name AS role_name
                 FROM users u JOIN roles r ON r.id = u.role_id
                 WHERE r.name = $1
                 ORDER BY u.email",
            )
            .bind(role_name)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT u.id, u.name, u.email, u.role_id, r.name AS role_name
                 FROM users u JOIN roles r ON r.id = u.role_id
                 ORDER BY u.email",
            )
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows.into_iter().map(UserWithRole::from).collect())
}

pub async fn update_role(pool: &PgPool, user_id: Uuid, role_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET role_id = $1 WHERE id = $2")
        .bind(role_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn create(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, email, name, password_hash, role_id, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password_hash)
    .bind(user.role_id)
    .bind(user.created_at)
    .execute(pool)
    .await?;
    Ok(())
}
