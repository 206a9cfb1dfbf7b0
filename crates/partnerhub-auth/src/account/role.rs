//! Partner role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use partnerhub_core::AppError;

/// The two partner audiences of the dashboard.
///
/// The role selects which auth endpoint family handles the account:
/// `/api/auth/seller/...` or `/api/auth/creator/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerRole {
    /// Merchant listing products in the catalog.
    Seller,
    /// Affiliate issuing links and earning settlements.
    Creator,
}

impl PartnerRole {
    /// Return the role as the URL path segment used by the auth endpoints.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Creator => "creator",
        }
    }
}

impl fmt::Display for PartnerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

impl FromStr for PartnerRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seller" => Ok(Self::Seller),
            "creator" => Ok(Self::Creator),
            _ => Err(AppError::validation(format!(
                "Invalid partner role: '{s}'. Expected one of: seller, creator"
            ))),
        }
    }
}
