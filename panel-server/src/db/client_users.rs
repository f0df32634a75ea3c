use shared::models::{ClientRef, ClientUser, ClientUserView, UserSummary};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ViewRow {
    id: Uuid,
    role: String,
    user_id: Uuid,
    user_name: String,
    user_email: String,
    client_uuid: Uuid,
    client_name: String,
    client_token: String,
}

impl From<ViewRow> for ClientUserView {
    fn from(row: ViewRow) -> Self {
        ClientUserView {
            id: row.id,
            role: row.role,
            user: UserSummary {
                id: row.user_id,
                name: row.user_name,
                email: row.user_email,
            },
            client: ClientRef {
                id: row.client_uuid,
                name: row.client_name,
                client_id: row.client_token,
            },
        }
    }
}

const VIEW_SELECT: &str = "SELECT cu.id, cu.role,
        u.id AS user_id, u.name AS user_name, u.email AS user_email,
        c.id AS client_uuid, c.name AS client_name, c.client_id AS client_token
     FROM client_users cu
     JOIN users u ON u.id = cu.user_id
     JOIN clients c ON c.id = cu.client_id";

pub async fn list_all(pool: &PgPool) -> Result<Vec<ClientUserView>, sqlx::Error> {
    let rows: Vec<ViewRow> = sqlx::query_as(&format!("{VIEW_SELECT} ORDER BY cu.created_at"))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(ClientUserView::from).collect())
}

/// Assignments whose client is owned by the given user (Admin listing)
pub async fn list_by_client_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<ClientUserView>, sqlx::Error> {
    let rows: Vec<ViewRow> = sqlx::query_as(&format!(
        "{VIEW_SELECT} WHERE c.owner_id = $1 ORDER BY cu.created_at"
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(ClientUserView::from).collect())
}

/// Assignment row paired with the owning client's owner id (for the
/// ownership gate on deletion)
#[derive(sqlx::FromRow)]
pub struct AssignmentWithOwner {
    pub id: Uuid,
    pub user_id: Uuid,
    pub client_id: Uuid,
    pub role: String,
    pub owner_id: Uuid,
}

pub async fn find_with_owner(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AssignmentWithOwner>, sqlx::Error> {
    sqlx::query_as(
        "SELECT cu.id, cu.user_id, cu.client_id, cu.role, c.owner_id
         FROM client_users cu JOIN clients c ON c.id = cu.client_id
         WHERE cu.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new assignment. A duplicate (user_id, client_id) pair fails on
/// the storage-level unique constraint; the caller maps that to Conflict.
pub async fn insert(pool: &PgPool, assignment: &ClientUser) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO client_users (id, user_id, client_id, role, created_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(assignment.id)
    .bind(assignment.user_id)
    .bind(assignment.client_id)
    .bind(&assignment.role)
    .bind(assignment.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM client_users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
