//! Session
//!
//! Transient authenticated identity, held only for the page lifetime.

/// User role, controls whether the user-management menu entry shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Authenticated user for the current page lifetime. Not persisted across
/// reloads.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub email: String,
    pub role: Role,
}

impl Session {
    /// Simulated authentication: any credentials are accepted. The demo
    /// admin account gets the admin role, everything else signs in as a
    /// regular user.
    pub fn login(email: &str, password: &str) -> Self {
        let role = if email == "admin@remindme.com" && password == "admin123" {
            Role::Admin
        } else {
            Role::User
        };
        Self {
            email: email.to_string(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_credentials_sign_in_as_user() {
        let session = Session::login("x@y.com", "anything");
        assert_eq!(session.email, "x@y.com");
        assert_eq!(session.role, Role::User);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_demo_admin_credentials() {
        let session = Session::login("admin@remindme.com", "admin123");
        assert_eq!(session.role, Role::Admin);

        // Wrong password still signs in, but without the admin role
        let session = Session::login("admin@remindme.com", "wrong");
        assert_eq!(session.role, Role::User);
    }
}
