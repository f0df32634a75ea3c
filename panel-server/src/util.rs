//! Shared utility functions for the panel server

use rand::Rng;
use rand::distributions::Alphanumeric;

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Opaque client identifier: fixed prefix + random alphanumeric suffix.
pub fn generate_client_id() -> String {
    format!("client_{}", random_alphanumeric(10))
}

/// Opaque client secret: fixed prefix + random alphanumeric suffix.
pub fn generate_client_secret() -> String {
    format!("secret_{}", random_alphanumeric(22))
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = hash_password("admin123").unwrap();
        assert!(verify_password("admin123", &hash));
        assert!(!verify_password("admin124", &hash));
        assert!(!verify_password("admin123", "not-a-phc-string"));
    }

    #[test]
    fn generated_credentials_have_fixed_prefixes() {
        let id = generate_client_id();
        let secret = generate_client_secret();
        assert!(id.starts_with("client_"));
        assert_eq!(id.len(), "client_".len() + 10);
        assert!(secret.starts_with("secret_"));
        assert_eq!(secret.len(), "secret_".len() + 22);
        assert!(
            id.trim_start_matches("client_")
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[test]
    fn generated_credentials_differ_between_calls() {
        assert_ne!(generate_client_id(), generate_client_id());
        assert_ne!(generate_client_secret(), generate_client_secret());
    }
}
