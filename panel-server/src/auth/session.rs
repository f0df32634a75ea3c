//! Session token handling for the panel API
//!
//! The signed token embeds the full principal — identity plus role and
//! permission names — as a point-in-time snapshot taken at login. Requests
//! decode the token instead of re-querying the database, so role or
//! permission changes only take effect at the next login.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::header::{AUTHORIZATION, COOKIE};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "panel_session";

const SESSION_EXPIRY_HOURS: i64 = 24;

/// Session claims: the principal snapshot plus standard JWT timestamps
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    /// Role name at login time
    pub role: String,
    /// Permission names at login time
    pub permissions: Vec<String>,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated identity extracted from the session token
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl From<SessionClaims> for Principal {
    fn from(claims: SessionClaims) -> Self {
        Principal {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            permissions: claims.permissions,
        }
    }
}

/// Create a signed session token for a principal
pub fn create_token(
    principal: &Principal,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = SessionClaims {
        sub: principal.id,
        name: principal.name.clone(),
        email: principal.email.clone(),
        role: principal.role.clone(),
        permissions: principal.permissions.clone(),
        exp: (now + chrono::Duration::hours(SESSION_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode and verify a session token
pub fn decode_token(
    token: &str,
    secret: &str,
) -> Result<Principal, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims.into())
}

/// `Set-Cookie` value carrying the session token
pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_EXPIRY_HOURS * 3600
    )
}

/// `Set-Cookie` value that clears the session cookie
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pull a cookie value out of a `Cookie` header line
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// Middleware that extracts and verifies the session token.
///
/// Looks for the session cookie first, then falls back to
/// `Authorization: Bearer`. On success the [`Principal`] is inserted as a
/// request extension.
pub async fn session_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let headers = request.headers();

    let cookie_token = headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| cookie_value(h, SESSION_COOKIE));
    let bearer_token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let token = cookie_token
        .or(bearer_token)
        .ok_or_else(|| error_response(401, "Unauthorized"))?;

    let principal = decode_token(token, &state.session_secret).map_err(|e| {
        tracing::debug!("session token validation failed: {e}");
        error_response(401, "Unauthorized")
    })?;

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

fn error_response(status: u16, message: &str) -> Response {
    let body = serde_json::json!({ "error": message });
    let status =
        http::StatusCode::from_u16(status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
    (status, axum::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal {
            id: Uuid::new_v4(),
            name: "Regular Admin".into(),
            email: "admin@example.com".into(),
            role: "Admin".into(),
            permissions: vec!["manage_users".into(), "view_limited_logs".into()],
        }
    }

    #[test]
    fn token_round_trip_preserves_snapshot() {
        let p = principal();
        let token = create_token(&p, "test-secret").unwrap();
        let decoded = decode_token(&token, "test-secret").unwrap();
        assert_eq!(decoded.id, p.id);
        assert_eq!(decoded.email, p.email);
        assert_eq!(decoded.role, "Admin");
        assert_eq!(decoded.permissions, p.permissions);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = create_token(&principal(), "test-secret").unwrap();
        assert!(decode_token(&token, "other-secret").is_err());
    }

    #[test]
    fn cookie_value_parses_multi_cookie_header() {
        let header = "theme=dark; panel_session=abc.def.ghi; lang=en";
        assert_eq!(cookie_value(header, SESSION_COOKIE), Some("abc.def.ghi"));
        assert_eq!(cookie_value(header, "missing"), None);
        // prefix of another cookie name must not match
        assert_eq!(cookie_value("panel_session2=x", SESSION_COOKIE), None);
    }
}
