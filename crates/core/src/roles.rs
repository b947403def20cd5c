//! Well-known role name constants.
//!
//! Role names arrive in the `role` claim of access tokens and are compared
//! verbatim (case-sensitive).

pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_ORGANIZER: &str = "organizer";

/// Roles allowed to create, update, and delete FAQ records.
pub const FAQ_EDITOR_ROLES: &[&str] = &[ROLE_DIRECTOR, ROLE_ORGANIZER];

/// Whether a caller with `role` may mutate FAQ records.
pub fn can_manage_faqs(role: &str) -> bool {
    FAQ_EDITOR_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_roles_can_manage() {
        assert!(can_manage_faqs(ROLE_DIRECTOR));
        assert!(can_manage_faqs(ROLE_ORGANIZER));
    }

    #[test]
    fn other_roles_cannot_manage() {
        assert!(!can_manage_faqs("member"));
        assert!(!can_manage_faqs(""));
        assert!(!can_manage_faqs("Director"));
    }
}
