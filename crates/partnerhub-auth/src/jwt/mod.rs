//! Access credential claims and unverified decoding.

pub mod claims;
pub mod decoder;

pub use claims::AccessClaims;
pub use decoder::ClaimsDecoder;
