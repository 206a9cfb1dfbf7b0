//! Session-aware HTTP pipeline and auth endpoint calls.

pub mod navigator;
pub mod pipeline;
pub mod request;
pub mod wire;

mod renewal;

pub use navigator::{LoggingNavigator, Navigator};
pub use pipeline::SessionClient;
pub use request::ApiRequest;
pub use wire::{CreatorSignup, SellerSignup, SignupResponse};
