//! Client registration endpoints

use axum::response::IntoResponse;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::models::{Client, ClientCreate, ClientUpdate, ClientWithOwner};
use shared::types::{GrantType, Scope};
use uuid::Uuid;

use crate::auth::{Principal, policy};
use crate::db;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;
use crate::util::{generate_client_id, generate_client_secret, now_millis};

fn validate_scopes(scopes: &[String]) -> Result<(), AppError> {
    Scope::validate_all(scopes).map_err(|_| AppError::validation("Invalid scopes provided"))
}

fn validate_grant_types(grant_types: &[String]) -> Result<(), AppError> {
    GrantType::validate_all(grant_types)
        .map_err(|_| AppError::validation("Invalid grant types provided"))
}

/// GET /api/clients — SuperAdmin sees all clients (with owner summaries),
/// everyone else only the clients they own.
pub async fn list_clients(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Vec<ClientWithOwner>> {
    if principal.role == policy::SUPER_ADMIN {
        return Ok(Json(db::clients::list_all_with_owner(&state.pool).await?));
    }

    let user = super::current_user(&state, &principal).await?;
    let clients = db::clients::list_by_owner(&state.pool, user.id)
        .await?
        .into_iter()
        .map(|client| ClientWithOwner {
            client,
            owner: None,
        })
        .collect();
    Ok(Json(clients))
}

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<ClientCreate>,
) -> Result<impl IntoResponse, AppError> {
    let name = body
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("Name is required"))?;

    let scopes = body.scopes.unwrap_or_default();
    validate_scopes(&scopes)?;
    let grant_types = body.grant_types.unwrap_or_default();
    validate_grant_types(&grant_types)?;

    let owner = super::current_user(&state, &principal).await?;

    let client = Client {
        id: Uuid::new_v4(),
        name,
        client_id: generate_client_id(),
        client_secret: generate_client_secret(),
        description: body.description.unwrap_or_default(),
        scopes,
        grant_types,
        owner_id: owner.id,
        created_at: now_millis(),
    };
    db::clients::create(&state.pool, &client).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients/{id}
pub async fn get_client(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> ApiResult<ClientWithOwner> {
    let client = db::clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    let user = super::current_user(&state, &principal).await?;
    if !policy::can_manage(&principal.role, client.owner_id, user.id) {
        return Err(AppError::forbidden("Forbidden"));
    }

    let owner = db::users::find_summary_by_id(&state.pool, client.owner_id).await?;
    Ok(Json(ClientWithOwner { client, owner }))
}

/// PUT /api/clients/{id} — partial update; omitted fields keep their
/// previous value, an explicit empty description is accepted.
pub async fn update_client(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClientUpdate>,
) -> ApiResult<Client> {
    let mut client = db::clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    let user = super::current_user(&state, &principal).await?;
    if !policy::can_manage(&principal.role, client.owner_id, user.id) {
        return Err(AppError::forbidden("Forbidden"));
    }

    if let Some(ref scopes) = body.scopes {
        validate_scopes(scopes)?;
    }
    if let Some(ref grant_types) = body.grant_types {
        validate_grant_types(grant_types)?;
    }

    apply_update(&mut client, body);

    db::clients::update(&state.pool, &client).await?;
    Ok(Json(client))
}

/// Apply partial-update semantics: omitted fields keep their previous value.
/// An empty name is treated as omitted; only description may be set to an
/// explicit empty string.
fn apply_update(client: &mut Client, body: ClientUpdate) {
    if let Some(name) = body.name.filter(|n| !n.is_empty()) {
        client.name = name;
    }
    if let Some(description) = body.description {
        client.description = description;
    }
    if let Some(scopes) = body.scopes {
        client.scopes = scopes;
    }
    if let Some(grant_types) = body.grant_types {
        client.grant_types = grant_types;
    }
}

/// DELETE /api/clients/{id}
pub async fn delete_client(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> ApiResult<serde_json::Value> {
    let client = db::clients::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;

    let user = super::current_user(&state, &principal).await?;
    if !policy::can_manage(&principal.role, client.owner_id, user.id) {
        return Err(AppError::forbidden("Forbidden"));
    }

    db::clients::delete(&state.pool, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Client deleted successfully" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client {
            id: Uuid::new_v4(),
            name: "My App".into(),
            client_id: "client_abc123def0".into(),
            client_secret: "secret_abc123def0abc123def0ab".into(),
            description: "original description".into(),
            scopes: vec!["open_id".into()],
            grant_types: vec!["authorization_code".into()],
            owner_id: Uuid::new_v4(),
            created_at: 0,
        }
    }

    #[test]
    fn update_with_no_fields_keeps_everything() {
        let mut c = client();
        apply_update(&mut c, ClientUpdate::default());
        assert_eq!(c.name, "My App");
        assert_eq!(c.description, "original description");
        assert_eq!(c.scopes, vec!["open_id".to_string()]);
    }

    #[test]
    fn empty_name_keeps_previous_name() {
        let mut c = client();
        apply_update(
            &mut c,
            ClientUpdate {
                name: Some("".into()),
                ..Default::default()
            },
        );
        assert_eq!(c.name, "My App");
    }

    #[test]
    fn explicit_empty_description_is_accepted() {
        let mut c = client();
        apply_update(
            &mut c,
            ClientUpdate {
                description: Some("".into()),
                ..Default::default()
            },
        );
        assert_eq!(c.description, "");
    }

    #[test]
    fn provided_fields_replace_previous_values() {
        let mut c = client();
        apply_update(
            &mut c,
            ClientUpdate {
                name: Some("Renamed".into()),
                scopes: Some(vec!["email".into()]),
                grant_types: Some(vec!["refresh_token".into()]),
                ..Default::default()
            },
        );
        assert_eq!(c.name, "Renamed");
        assert_eq!(c.scopes, vec!["email".to_string()]);
        assert_eq!(c.grant_types, vec!["refresh_token".to_string()]);
    }
}
