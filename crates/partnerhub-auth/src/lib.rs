//! # partnerhub-auth
//!
//! Session management for the PartnerHub dashboard client: access
//! credential claims, the in-memory session store, and the renewal-aware
//! HTTP request pipeline.
//!
//! ## Modules
//!
//! - `account` — partner role and account status enumerations
//! - `jwt` — unverified claim decoding from access credentials
//! - `session` — process-wide session store
//! - `client` — the request pipeline, renewal coordination, and auth calls

pub mod account;
pub mod client;
pub mod jwt;
pub mod session;

pub use account::{AccountStatus, AuthAccount, PartnerRole};
pub use client::{ApiRequest, LoggingNavigator, Navigator, SessionClient};
pub use jwt::{AccessClaims, ClaimsDecoder};
pub use session::{Session, SessionStore};
