//! Partner account enumerations and snapshots.

pub mod role;
pub mod status;

pub use role::PartnerRole;
pub use status::AccountStatus;

/// Snapshot of the authenticated account, decoded from credential claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AuthAccount {
    /// Numeric account identifier.
    pub subject_id: i64,
    /// Partner role the account was issued for.
    pub role: PartnerRole,
    /// Review status of the account.
    pub status: AccountStatus,
}
