//! Role tiering and ownership rules
//!
//! Fixed precedence SuperAdmin > Admin > user. All checks work on the role
//! name carried by the session principal; ownership checks compare against
//! the resource's recorded owner id.

use uuid::Uuid;

use crate::auth::Principal;
use crate::error::AppError;

pub const SUPER_ADMIN: &str = "SuperAdmin";
pub const ADMIN: &str = "Admin";
pub const USER: &str = "user";

/// Roles an Admin is allowed to see in role listings (SuperAdmin hidden)
pub const ADMIN_VISIBLE_ROLES: [&str; 2] = [ADMIN, USER];

/// Gate for administrative endpoints: only SuperAdmin and Admin pass.
pub fn require_admin(principal: &Principal) -> Result<(), AppError> {
    if principal.role == SUPER_ADMIN || principal.role == ADMIN {
        Ok(())
    } else {
        Err(AppError::forbidden("Forbidden"))
    }
}

/// Ownership gate: a SuperAdmin, or the resource's recorded owner.
pub fn can_manage(role: &str, owner_id: Uuid, actor_id: Uuid) -> bool {
    role == SUPER_ADMIN || owner_id == actor_id
}

/// Role names visible in the role listing. `None` means unrestricted.
pub fn visible_role_names(role: &str) -> Option<&'static [&'static str]> {
    if role == SUPER_ADMIN {
        None
    } else {
        Some(&ADMIN_VISIBLE_ROLES)
    }
}

/// Rules for changing a user's role:
/// - only a SuperAdmin may assign the SuperAdmin role;
/// - only a SuperAdmin may modify a user who currently holds SuperAdmin.
pub fn check_role_assignment(
    actor_role: &str,
    target_current_role: &str,
    new_role: &str,
) -> Result<(), AppError> {
    if actor_role != SUPER_ADMIN && new_role == SUPER_ADMIN {
        return Err(AppError::forbidden("Admins cannot assign SuperAdmin role"));
    }
    if target_current_role == SUPER_ADMIN && actor_role != SUPER_ADMIN {
        return Err(AppError::forbidden(
            "Only SuperAdmins can modify other SuperAdmins",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: &str) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            name: "Test".into(),
            email: "test@example.com".into(),
            role: role.into(),
            permissions: vec![],
        }
    }

    #[test]
    fn admin_tier_passes_guard() {
        assert!(require_admin(&principal(SUPER_ADMIN)).is_ok());
        assert!(require_admin(&principal(ADMIN)).is_ok());
    }

    #[test]
    fn user_role_is_always_forbidden() {
        let err = require_admin(&principal(USER)).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn unknown_role_is_forbidden() {
        assert!(require_admin(&principal("superadmin")).is_err());
        assert!(require_admin(&principal("")).is_err());
    }

    #[test]
    fn super_admin_manages_any_resource() {
        let owner = Uuid::new_v4();
        let actor = Uuid::new_v4();
        assert!(can_manage(SUPER_ADMIN, owner, actor));
    }

    #[test]
    fn admin_manages_only_owned_resources() {
        let actor = Uuid::new_v4();
        assert!(can_manage(ADMIN, actor, actor));
        assert!(!can_manage(ADMIN, Uuid::new_v4(), actor));
    }

    #[test]
    fn role_listing_hides_super_admin_from_admins() {
        assert!(visible_role_names(SUPER_ADMIN).is_none());
        let visible = visible_role_names(ADMIN).unwrap();
        assert!(visible.contains(&ADMIN));
        assert!(visible.contains(&USER));
        assert!(!visible.contains(&SUPER_ADMIN));
    }

    #[test]
    fn admin_cannot_assign_super_admin() {
        let err = check_role_assignment(ADMIN, USER, SUPER_ADMIN).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn admin_cannot_touch_a_super_admin() {
        let err = check_role_assignment(ADMIN, SUPER_ADMIN, USER).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn super_admin_may_assign_and_demote_super_admins() {
        assert!(check_role_assignment(SUPER_ADMIN, USER, SUPER_ADMIN).is_ok());
        assert!(check_role_assignment(SUPER_ADMIN, SUPER_ADMIN, ADMIN).is_ok());
    }

    #[test]
    fn admin_may_move_users_between_lower_tiers() {
        assert!(check_role_assignment(ADMIN, USER, ADMIN).is_ok());
        assert!(check_role_assignment(ADMIN, ADMIN, USER).is_ok());
    }
}
