//! # Representation Store
//!
//! Read-only query surface of the asset database.
//!
//! ## Overview
//!
//! The store is an external collaborator: a project database holding
//! folders, products, versions and representations with parent links plus a
//! linked-folders graph. The build consumes it through the
//! [`RepresentationStore`] trait and performs exactly one batched call per
//! entity level, keyed by id lists.
//!
//! [`InMemoryStore`] is a complete implementation backed by plain maps, used
//! by tests and by embedded deployments that materialize entities up front.

pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Folder, Product, Representation, Version};

pub use memory::InMemoryStore;

/// Store failure. The build treats any store error as fatal for the running
/// build; "entity not found" is expressed through empty results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store query failed: {operation} - {reason}")]
    Query { operation: String, reason: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Query surface of the asset database.
///
/// Implementations are expected to resolve each call in a single round trip;
/// empty id lists must return empty results without touching the backend.
#[async_trait]
pub trait RepresentationStore: Send + Sync {
    /// Look up one folder by its hierarchy path within a project.
    async fn folder_by_path(
        &self,
        project_name: &str,
        folder_path: &str,
    ) -> StoreResult<Option<Folder>>;

    /// Folders linked from the given folder.
    async fn linked_folders(
        &self,
        project_name: &str,
        folder_uuid: Uuid,
    ) -> StoreResult<Vec<Folder>>;

    /// All products under the given folders.
    async fn products_by_folder_uuids(
        &self,
        project_name: &str,
        folder_uuids: &[Uuid],
    ) -> StoreResult<Vec<Product>>;

    /// Latest version per product, keyed by product id. Products without a
    /// version are absent from the result.
    async fn last_versions_by_product_uuids(
        &self,
        project_name: &str,
        product_uuids: &[Uuid],
    ) -> StoreResult<HashMap<Uuid, Version>>;

    /// All representations under the given versions.
    async fn representations_by_version_uuids(
        &self,
        project_name: &str,
        version_uuids: &[Uuid],
    ) -> StoreResult<Vec<Representation>>;
}
