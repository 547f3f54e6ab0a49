//! # Error Types
//!
//! Failures in the service layer's own concerns. Offer rejections are NOT
//! here - those are `offers_core::RegistrationError` values passed straight
//! through to the shell.

use std::path::PathBuf;
use thiserror::Error;

/// Service-layer errors (configuration handling).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The directory config file could not be read.
    #[error("failed to read directory config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory config file is not valid TOML for [`crate::DirectoryConfig`].
    #[error("failed to parse directory config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Convenience type alias for Results with ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
