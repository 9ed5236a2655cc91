//! Result type alias for configuration composition operations

use crate::error::KasaneError;

/// Standard Result type for configuration composition operations
pub type Result<T> = std::result::Result<T, KasaneError>;
