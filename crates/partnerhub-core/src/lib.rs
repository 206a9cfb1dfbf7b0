//! # partnerhub-core
//!
//! Core crate for the PartnerHub client SDK. Contains configuration
//! schemas, the shared API response envelope, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other PartnerHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
