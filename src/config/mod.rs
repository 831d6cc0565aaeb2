//! Portal configuration and constants.
//!
//! This module provides:
//! - The fixed portal endpoints and URL prefixes
//! - The outgoing HTTP header set
//! - The client configuration type

pub mod constants;
pub(crate) mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::ClientConfig;
