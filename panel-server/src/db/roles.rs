use shared::models::Role;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, description FROM roles ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn list_by_names(pool: &PgPool, names: &[&str]) -> Result<Vec<Role>, sqlx::Error> {
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    sqlx::query_as("SELECT id, name, description FROM roles WHERE name = ANY($1) ORDER BY name")
        .bind(&names)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as("SELECT id, name, description FROM roles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Permission names granted to a role (embedded into the session at login)
pub async fn permission_names(pool: &PgPool, role_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT p.name
         FROM permissions p
         JOIN role_permissions rp ON rp.permission_id = p.id
         WHERE rp.role_id = $1
         ORDER BY p.name",
    )
    .bind(role_id)
    .fetch_all(pool)
    .await
}
