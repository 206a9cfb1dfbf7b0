//! Request and response bodies for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::account::PartnerRole;

/// Body of `POST /api/auth/{role}/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    /// Account email.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Payload of a successful login or renewal response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The freshly issued access credential.
    #[serde(rename = "accessToken")]
    pub access_credential: String,
}

/// Body of `POST /api/auth/seller/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SellerSignup {
    /// Account email.
    pub email: String,
    /// Business or representative name.
    pub name: String,
    /// Account password.
    pub password: String,
}

/// Body of `POST /api/auth/creator/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorSignup {
    /// Account email.
    pub email: String,
    /// Public nickname shown on issued links.
    pub nickname: String,
    /// Account password.
    pub password: String,
}

/// Payload of a successful signup response.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    /// Numeric ID of the created account.
    pub id: i64,
    /// Registered email.
    pub email: String,
    /// Role the account was created under.
    #[serde(rename = "userType")]
    pub role: PartnerRole,
}
