use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login/`. The role travels inside the JWT
/// payload; a custom serializer may additionally echo email/name.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Manager,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "student" => Some(Role::Student),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Manager => "manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims we read out of the access token payload. No signature check
/// client-side; the backend re-validates every request anyway.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// The logged-in user as the UI sees it. Created at login, destroyed on
/// logout or the first 401.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub role: Role,
    pub email: String,
    pub name: Option<String>,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
