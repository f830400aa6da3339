//! MarketPress Authorize.net AIM gateway library
//!
//! Builds delimited AIM transaction requests, posts them to the gateway,
//! classifies the delimited response and drives order creation for the
//! store checkout.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::checkout;
pub use modules::gateways;
