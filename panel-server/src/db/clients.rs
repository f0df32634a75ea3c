use shared::models::{Client, ClientWithOwner, UserSummary};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ClientOwnerRow {
    id: Uuid,
    name: String,
    client_id: String,
    client_secret: String,
    description: String,
    scopes: Vec<String>,
    grant_types: Vec<String>,
    owner_id: Uuid,
    created_at: i64,
    owner_name: String,
    owner_email: String,
}

impl From<ClientOwnerRow> for ClientWithOwner {
    fn from(row: ClientOwnerRow) -> Self {
        ClientWithOwner {
            owner: Some(UserSummary {
                id: row.owner_id,
                name: row.owner_name,
                email: row.owner_email,
            }),
            client: Client {
                id: row.id,
                name: row.name,
                client_id: row.client_id,
                client_secret: row.client_secret,
                description: row.description,
                scopes: row.scopes,
                grant_types: row.grant_types,
                owner_id: row.owner_id,
                created_at: row.created_at,
            },
        }
    }
}

/// All clients with their owner summaries (SuperAdmin listing)
pub async fn list_all_with_owner(pool: &PgPool) -> Result<Vec<ClientWithOwner>, sqlx::Error> {
    let rows: Vec<ClientOwnerRow> = sqlx::query_as(
        "SELECT c.*, u.name AS owner_name, u.email AS owner_email
         FROM clients c JOIN users u ON u.id = c.owner_id
         ORDER BY c.created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(ClientWithOwner::from).collect())
}

pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM clients WHERE owner_id = $1 ORDER BY created_at")
        .bind(owner_id)
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM clients WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, client: &Client) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO clients
             (id, name, client_id, client_secret, description, scopes, grant_types,
              owner_id, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(client.id)
    .bind(&client.name)
    .bind(&client.client_id)
    .bind(&client.client_secret)
    .bind(&client.description)
    .bind(&client.scopes)
    .bind(&client.grant_types)
    .bind(client.owner_id)
    .bind(client.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &PgPool, client: &Client) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE clients SET name = $1, description = $2, scopes = $3, grant_types = $4
         WHERE id = $5",
    )
    .bind(&client.name)
    .bind(&client.description)
    .bind(&client.scopes)
    .bind(&client.grant_types)
    .bind(client.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
