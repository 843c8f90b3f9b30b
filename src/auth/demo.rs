use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Role of a signed-in recruiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Recruiter,
    TeamLead,
    Admin,
}

/// The signed-in user as held by the session context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub display_name: String,
    pub role: UserRole,
}

/// Built-in demo user definition.
#[derive(Debug, Clone)]
struct DemoUser {
    username: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: UserRole,
}

/// The hard-coded demo users. All data in the app is mocked, so there is
/// no server-side session; the credential check runs client-side.
const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        username: "demo",
        password: "demo",
        display_name: "Demo Recruiter",
        role: UserRole::Recruiter,
    },
    DemoUser {
        username: "lead",
        password: "lead",
        display_name: "Team Lead",
        role: UserRole::TeamLead,
    },
    DemoUser {
        username: "admin",
        password: "admin",
        display_name: "Administrator",
        role: UserRole::Admin,
    },
];

/// Validate demo credentials and return the corresponding user.
pub fn authenticate_demo_user(username: &str, password: &str) -> Result<SessionUser, AppError> {
    DEMO_USERS
        .iter()
        .find(|u| u.username == username && u.password == password)
        .map(|u| SessionUser {
            user_id: format!("demo-{}", u.username),
            display_name: u.display_name.to_string(),
            role: u.role,
        })
        .ok_or_else(|| AppError::Auth("Invalid username or password".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_demo_user_success() {
        let user = authenticate_demo_user("demo", "demo").unwrap();
        assert_eq!(user.user_id, "demo-demo");
        assert_eq!(user.role, UserRole::Recruiter);
    }

    #[test]
    fn test_authenticate_admin() {
        let user = authenticate_demo_user("admin", "admin").unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_wrong_password() {
        assert!(authenticate_demo_user("demo", "wrong").is_err());
    }

    #[test]
    fn test_unknown_user() {
        assert!(authenticate_demo_user("nobody", "nothing").is_err());
    }
}
