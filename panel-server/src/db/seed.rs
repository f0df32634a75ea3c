//! Bootstrap data: roles, permissions and the two fixed admin accounts.
//!
//! Runs at startup and is a no-op once roles exist. Passwords for the seeded
//! accounts can be overridden via SEED_SUPERADMIN_PASSWORD and
//! SEED_ADMIN_PASSWORD.

use shared::models::User;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::policy;
use crate::util::{hash_password, now_millis};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const PERMISSIONS: [(&str, &str); 7] = [
    ("manage_admins", "Can manage admin users"),
    ("manage_users", "Can manage regular users"),
    ("view_all_logs", "Can view all system logs"),
    ("view_limited_logs", "Can view limited system logs"),
    ("configure_system", "Can configure system settings"),
    ("basic_configuration", "Can perform basic configuration"),
    ("manage_integrations", "Can manage system integrations"),
];

const SUPER_ADMIN_PERMISSIONS: [&str; 5] = [
    "manage_admins",
    "manage_users",
    "view_all_logs",
    "configure_system",
    "manage_integrations",
];

const ADMIN_PERMISSIONS: [&str; 3] = ["manage_users", "view_limited_logs", "basic_configuration"];

const USER_PERMISSIONS: [&str; 1] = ["view_limited_logs"];

pub async fn run(pool: &PgPool) -> Result<(), BoxError> {
    let role_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
        .fetch_one(pool)
        .await?;
    if role_count > 0 {
        tracing::debug!("seed data already present, skipping bootstrap");
        return Ok(());
    }

    tracing::info!("seeding bootstrap roles, permissions and accounts");

    for (name, description) in PERMISSIONS {
        insert_permission(pool, name, description).await?;
    }

    let super_admin_role = insert_role(
        pool,
        policy::SUPER_ADMIN,
        "Has full access to all features and can manage Admins",
        &SUPER_ADMIN_PERMISSIONS,
    )
    .await?;
    let admin_role = insert_role(
        pool,
        policy::ADMIN,
        "Has limited administrative access",
        &ADMIN_PERMISSIONS,
    )
    .await?;
    insert_role(
        pool,
        policy::USER,
        "Regular user with limited permissions",
        &USER_PERMISSIONS,
    )
    .await?;

    let super_admin_password = std::env::var("SEED_SUPERADMIN_PASSWORD")
        .unwrap_or_else(|_| "superadmin123".into());
    let admin_password =
        std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into());

    insert_user(
        pool,
        "superadmin@example.com",
        "Super Admin",
        &super_admin_password,
        super_admin_role,
    )
    .await?;
    insert_user(
        pool,
        "admin@example.com",
        "Regular Admin",
        &admin_password,
        admin_role,
    )
    .await?;

    Ok(())
}

async fn insert_permission(pool: &PgPool, name: &str, description: &str) -> Result<(), BoxError> {
    sqlx::query(
        "INSERT INTO permissions (id, name, description) VALUES ($1, $2, $3)
         ON CONFLICT (name) DO NOTHING",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(description)
    .execute(pool)
    .await?;
    Ok(())
}

async fn insert_role(
    pool: &PgPool,
    name: &str,
    description: &str,
    permissions: &[&str],
) -> Result<Uuid, BoxError> {
    let role_id = Uuid::new_v4();
    sqlx::query("INSERT INTO roles (id, name, description) VALUES ($1, $2, $3)")
        .bind(role_id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;

    for permission in permissions {
        sqlx::query(
            "INSERT INTO role_permissions (role_id, permission_id)
             SELECT $1, id FROM permissions WHERE name = $2",
        )
        .bind(role_id)
        .bind(permission)
        .execute(pool)
        .await?;
    }

    Ok(role_id)
}

async fn insert_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    password: &str,
    role_id: Uuid,
) -> Result<(), BoxError> {
    let password_hash =
        hash_password(password).map_err(|e| format!("password hashing failed: {e}"))?;
    let user = User {
        id: Uuid::new_v4(),
        email: email.into(),
        name: name.into(),
        password_hash,
        role_id,
        created_at: now_millis(),
    };
    crate::db::users::create(pool, &user).await?;
    Ok(())
}
