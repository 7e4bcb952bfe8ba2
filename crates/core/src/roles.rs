//! Well-known role name constants.
//!
//! Users holding one of these roles are staff accounts and are hidden from
//! the public team listing.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERADMIN: &str = "superadmin";

/// Roles excluded from `GET /api/users`.
pub const STAFF_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_SUPERADMIN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_roles_cover_both_admin_tiers() {
        assert_eq!(STAFF_ROLES, &["admin", "superadmin"]);
    }
}
