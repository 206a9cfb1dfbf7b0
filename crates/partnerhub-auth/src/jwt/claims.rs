//! Claims payload embedded in every access credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use partnerhub_core::AppError;

use crate::account::{AccountStatus, PartnerRole};

/// Claims carried by the access credential.
///
/// These are read for client-side state only. The server re-verifies the
/// credential on every protected call; nothing here is a security check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject — the account ID as a decimal string.
    pub sub: String,
    /// Partner role the credential was issued for.
    #[serde(rename = "type")]
    pub role: PartnerRole,
    /// Account status at the time of issuance.
    pub status: AccountStatus,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration timestamp (seconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl AccessClaims {
    /// Parse the subject claim into the numeric account ID.
    pub fn subject_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| {
            AppError::authentication(format!("Subject claim is not a numeric ID: '{}'", self.sub))
        })
    }

    /// Return the expiration as a `DateTime<Utc>`, if the claim is present.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Check whether this credential has expired.
    ///
    /// A credential without an `exp` claim never expires client-side.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}
