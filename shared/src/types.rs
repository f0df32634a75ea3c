//! Fixed enumerations for client registrations.
//!
//! Scopes and grant types are stored as their canonical strings; payload
//! validation only accepts members of these sets.

/// OAuth-style scope a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    OpenId,
    Email,
    ProfileWithDoc,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::OpenId, Scope::Email, Scope::ProfileWithDoc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::OpenId => "open_id",
            Scope::Email => "email",
            Scope::ProfileWithDoc => "profile_with_doc",
        }
    }

    pub fn parse(s: &str) -> Option<Scope> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Check that every entry is a known scope, returning the first offender.
    pub fn validate_all(values: &[String]) -> Result<(), &str> {
        match values.iter().find(|v| Scope::parse(v).is_none()) {
            Some(bad) => Err(bad),
            None => Ok(()),
        }
    }
}

/// OAuth-style grant type a client may be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    AuthorizationCode,
    Implicit,
    ClientCredentials,
    Password,
    RefreshToken,
    DeviceCode,
    UmaTicket,
}

impl GrantType {
    pub const ALL: [GrantType; 7] = [
        GrantType::AuthorizationCode,
        GrantType::Implicit,
        GrantType::ClientCredentials,
        GrantType::Password,
        GrantType::RefreshToken,
        GrantType::DeviceCode,
        GrantType::UmaTicket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::Implicit => "implicit",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::Password => "password",
            GrantType::RefreshToken => "refresh_token",
            GrantType::DeviceCode => "device_code",
            GrantType::UmaTicket => "urn:ietf:params:oauth:grant-type:uma-ticket",
        }
    }

    pub fn parse(s: &str) -> Option<GrantType> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Check that every entry is a known grant type, returning the first offender.
    pub fn validate_all(values: &[String]) -> Result<(), &str> {
        match values.iter().find(|v| GrantType::parse(v).is_none()) {
            Some(bad) => Err(bad),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_round_trip() {
        for scope in Scope::ALL {
            assert_eq!(Scope::parse(scope.as_str()), Some(scope));
        }
        assert_eq!(Scope::parse("profile"), None);
    }

    #[test]
    fn grant_type_round_trip() {
        for grant in GrantType::ALL {
            assert_eq!(GrantType::parse(grant.as_str()), Some(grant));
        }
        assert_eq!(GrantType::parse("authorization"), None);
    }

    #[test]
    fn validate_all_reports_first_invalid_entry() {
        let values = vec!["open_id".to_string(), "invalid_scope".to_string()];
        assert_eq!(Scope::validate_all(&values), Err("invalid_scope"));
        assert!(Scope::validate_all(&values[..1]).is_ok());
        assert!(Scope::validate_all(&[]).is_ok());
    }

    #[test]
    fn uma_ticket_uses_full_urn() {
        let values = vec!["urn:ietf:params:oauth:grant-type:uma-ticket".to_string()];
        assert!(GrantType::validate_all(&values).is_ok());
        assert_eq!(
            GrantType::validate_all(&["uma-ticket".to_string()]),
            Err("uma-ticket")
        );
    }
}
