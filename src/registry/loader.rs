//! Loader capability trait and the per-attempt error taxonomy.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Container;

/// Why one load attempt failed.
///
/// The load loop branches on the variant: [`LoadError::Incompatible`] is an
/// expected outcome logged at info level, everything else is logged with the
/// full error chain. All variants fall through to the next loader in the
/// chain.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The loader does not support this representation.
    #[error("Loader `{loader}` is not compatible with representation `{representation}`")]
    Incompatible {
        loader: String,
        representation: String,
    },

    /// The loader accepted the representation but failed to load it.
    #[error("Loader `{loader}` failed: {reason}")]
    Failed { loader: String, reason: String },

    /// Failure bubbled up from host or I/O layers.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Request handed to a loader for one load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub representation_uuid: Uuid,
    /// Name the loaded content should carry, usually the product name.
    pub name: String,
}

impl LoadRequest {
    pub fn new(representation_uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            representation_uuid,
            name: name.into(),
        }
    }
}

/// Capability interface implemented by host loader plugins.
///
/// A loader declares what it can handle and performs the actual host scene
/// work inside [`Loader::load`]. Loaders are registered as trait objects;
/// the registry never probes beyond this interface.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Unique identifier referenced from build profiles.
    fn name(&self) -> &str;

    /// Disabled loaders are invisible to discovery.
    fn enabled(&self) -> bool {
        true
    }

    /// Product types this loader can handle.
    fn product_types(&self) -> Vec<String>;

    /// Representation names this loader can handle.
    fn representation_names(&self) -> Vec<String>;

    /// Load one representation into the host scene.
    async fn load(&self, request: &LoadRequest) -> LoadResult<Container>;
}
