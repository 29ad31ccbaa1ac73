//! Error types for the workfile build core.

use thiserror::Error;

use crate::config::ConfigurationError;
use crate::store::StoreError;

/// Crate level error type. Per-attempt load failures never surface here,
/// they stay inside the fallback chain of the load loop.
#[derive(Debug, Error)]
pub enum WorkfileError {
    /// Two discovered loaders declared the same identifier. Profile loader
    /// lists cannot be resolved against an ambiguous table, so discovery
    /// aborts the build instead of degrading.
    #[error("Duplicated loader name {name}!")]
    DuplicateLoader { name: String },

    /// A query against the representation store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The settings document could not be read or parsed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, WorkfileError>;
