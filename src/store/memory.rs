//! In-memory representation store.
//!
//! Backed by plain maps, filled up front through the `add_*` methods. Query
//! methods mirror the batched semantics real backends provide: one logical
//! lookup per call, empty inputs short-circuit to empty outputs.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Folder, Product, Representation, Version};

use super::{RepresentationStore, StoreResult};

/// Map-backed store for tests and embedded deployments.
///
/// Entities are scoped to a single project; the `project_name` arguments are
/// accepted for interface parity and ignored.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    folders: Vec<Folder>,
    products: Vec<Product>,
    versions: Vec<Version>,
    representations: Vec<Representation>,
    /// Linked-folder adjacency, source folder to target folders.
    links: HashMap<Uuid, Vec<Uuid>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_folder(&mut self, folder: Folder) -> &mut Self {
        self.folders.push(folder);
        self
    }

    pub fn add_product(&mut self, product: Product) -> &mut Self {
        self.products.push(product);
        self
    }

    pub fn add_version(&mut self, version: Version) -> &mut Self {
        self.versions.push(version);
        self
    }

    pub fn add_representation(&mut self, representation: Representation) -> &mut Self {
        self.representations.push(representation);
        self
    }

    /// Record a directed link between two folders.
    pub fn add_link(&mut self, from_folder: Uuid, to_folder: Uuid) -> &mut Self {
        self.links.entry(from_folder).or_default().push(to_folder);
        self
    }

    fn folder_by_uuid(&self, folder_uuid: Uuid) -> Option<&Folder> {
        self.folders
            .iter()
            .find(|folder| folder.folder_uuid == folder_uuid)
    }
}

#[async_trait]
impl RepresentationStore for InMemoryStore {
    async fn folder_by_path(
        &self,
        _project_name: &str,
        folder_path: &str,
    ) -> StoreResult<Option<Folder>> {
        Ok(self
            .folders
            .iter()
            .find(|folder| folder.path == folder_path)
            .cloned())
    }

    async fn linked_folders(
        &self,
        _project_name: &str,
        folder_uuid: Uuid,
    ) -> StoreResult<Vec<Folder>> {
        let Some(targets) = self.links.get(&folder_uuid) else {
            return Ok(vec![]);
        };

        Ok(targets
            .iter()
            .filter_map(|target| self.folder_by_uuid(*target))
            .cloned()
            .collect())
    }

    async fn products_by_folder_uuids(
        &self,
        _project_name: &str,
        folder_uuids: &[Uuid],
    ) -> StoreResult<Vec<Product>> {
        if folder_uuids.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .products
            .iter()
            .filter(|product| folder_uuids.contains(&product.folder_uuid))
            .cloned()
            .collect())
    }

    async fn last_versions_by_product_uuids(
        &self,
        _project_name: &str,
        product_uuids: &[Uuid],
    ) -> StoreResult<HashMap<Uuid, Version>> {
        if product_uuids.is_empty() {
            return Ok(HashMap::new());
        }

        let mut last_versions: HashMap<Uuid, Version> = HashMap::new();
        for version in &self.versions {
            if !product_uuids.contains(&version.product_uuid) {
                continue;
            }

            match last_versions.get(&version.product_uuid) {
                Some(current) if current.version >= version.version => {}
                _ => {
                    last_versions.insert(version.product_uuid, version.clone());
                }
            }
        }

        Ok(last_versions)
    }

    async fn representations_by_version_uuids(
        &self,
        _project_name: &str,
        version_uuids: &[Uuid],
    ) -> StoreResult<Vec<Representation>> {
        if version_uuids.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .representations
            .iter()
            .filter(|representation| version_uuids.contains(&representation.version_uuid))
            .cloned()
            .collect())
    }
}
