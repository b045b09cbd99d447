//! # User and authentication payloads
//!
//! Defines the client-side view of a portal user and the bodies exchanged with
//! the `/api/auth/*` endpoints.
//!
//! ## [`UserInfo`]
//!
//! The profile returned by `GET /api/auth/me` and embedded in every
//! [`AuthResponse`]. The server may omit fields it does not know (older login
//! responses only carry `id`, `email`, `name` and `role`), so everything except
//! the role defaults to empty. The password is never part of this type: it is
//! write-only and only appears in [`Registration`] and [`Credentials`].
//!
//! ## [`Role`]
//!
//! `client` for regular accounts, `admin` for staff who may use the case review
//! console. Unknown or missing roles deserialize as [`Role::Client`].

use serde::{Deserialize, Serialize};

/// Account role as reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    Client,
}

/// User information held in memory for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

/// Successful login or registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_user_deserializes() {
        let user: UserInfo = serde_json::from_str(r#"{"name":"A","role":"client"}"#).unwrap();
        assert_eq!(user.name, "A");
        assert_eq!(user.role, Role::Client);
        assert!(user.email.is_empty());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_unknown_role_is_client() {
        let user: UserInfo = serde_json::from_str(r#"{"email":"x@y.z","role":"partner"}"#).unwrap();
        assert_eq!(user.role, Role::Client);
        assert_eq!(user.display_name(), "x@y.z");
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(Role::Client).unwrap(), "client");
        let role: Role = serde_json::from_str(r#""staff""#).unwrap();
        assert_eq!(role, Role::Client);
        assert_eq!(Role::default(), Role::Client);
    }

    #[test]
    fn test_auth_response_with_admin() {
        let body = r#"{
            "access_token": "t1",
            "token_type": "bearer",
            "user": {"id": "u1", "email": "boss@firm.lb", "name": "Boss", "role": "admin"}
        }"#;
        let auth: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(auth.access_token, "t1");
        assert!(auth.user.is_admin());
    }

    #[test]
    fn test_registration_serializes_missing_phone_as_null() {
        let registration = Registration {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            phone: None,
        };
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["phone"], serde_json::Value::Null);
        assert_eq!(value["name"], "A");
    }
}
