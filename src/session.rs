//! Who is signed in on this client.
//!
//! The session is a plain value owned by whoever drives the UI and lent to the
//! API client when a request is made. It is written once per login, read on
//! every outgoing request and reset on logout.

use serde::{Deserialize, Serialize};

/// Role of an account in the library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Member,
    Issuer,
    Admin,
}

/// Public part of the signed-in user's account, as the API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token and account obtained from a successful login
    pub fn set(&mut self, token: impl Into<String>, user: SessionUser) {
        self.token = Some(token.into());
        self.user = Some(user);
    }

    /// Stores a fresh token; any cached account belonged to the previous one
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        self.user = None;
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// Forgets the token and the account
    pub fn reset(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// The bearer token, if any. An empty token counts as none.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
