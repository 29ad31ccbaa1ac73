//! # Entity Collector
//!
//! Batched collection of products, latest versions and representations for
//! a set of folders.
//!
//! ## Query Strategy
//!
//! Exactly one store call per entity level, keyed by id lists:
//!
//! ```text
//! folders -> products_by_folder_uuids
//!         -> last_versions_by_product_uuids
//!         -> representations_by_version_uuids
//! ```
//!
//! The result is assembled bottom-up: a product appears only when its latest
//! version has at least one representation, a folder only when it has at
//! least one such product.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Folder, Representation};
use crate::store::RepresentationStore;

use super::types::{CollectedFolder, ProductEntry};

/// Collects the entity tree a build works from.
pub struct EntityCollector {
    store: Arc<dyn RepresentationStore>,
}

impl EntityCollector {
    pub fn new(store: Arc<dyn RepresentationStore>) -> Self {
        Self { store }
    }

    /// Collect products, their latest versions and those versions'
    /// representations for the given folders.
    ///
    /// An empty folder list yields an empty mapping without touching the
    /// store.
    pub async fn collect_last_version_repres(
        &self,
        project_name: &str,
        folders: &[Folder],
    ) -> Result<HashMap<Uuid, CollectedFolder>> {
        let mut output: HashMap<Uuid, CollectedFolder> = HashMap::new();
        if folders.is_empty() {
            return Ok(output);
        }

        let folders_by_uuid: HashMap<Uuid, &Folder> = folders
            .iter()
            .map(|folder| (folder.folder_uuid, folder))
            .collect();
        let folder_uuids: Vec<Uuid> = folders_by_uuid.keys().copied().collect();

        let products = self
            .store
            .products_by_folder_uuids(project_name, &folder_uuids)
            .await?;
        let product_uuids: Vec<Uuid> = products.iter().map(|product| product.product_uuid).collect();

        let last_versions = self
            .store
            .last_versions_by_product_uuids(project_name, &product_uuids)
            .await?;
        let version_uuids: Vec<Uuid> = last_versions
            .values()
            .map(|version| version.version_uuid)
            .collect();

        let representations = self
            .store
            .representations_by_version_uuids(project_name, &version_uuids)
            .await?;

        let mut repres_by_version_uuid: HashMap<Uuid, Vec<Representation>> = HashMap::new();
        for representation in representations {
            repres_by_version_uuid
                .entry(representation.version_uuid)
                .or_default()
                .push(representation);
        }

        // Assemble in store product order so downstream ordering stays
        // deterministic.
        for product in products {
            let Some(version) = last_versions.get(&product.product_uuid) else {
                continue;
            };
            let Some(repres) = repres_by_version_uuid.remove(&version.version_uuid) else {
                continue;
            };
            let Some(folder) = folders_by_uuid.get(&product.folder_uuid) else {
                continue;
            };

            let collected = output
                .entry(folder.folder_uuid)
                .or_insert_with(|| CollectedFolder {
                    folder: (*folder).clone(),
                    products: Vec::new(),
                });

            collected.products.push(ProductEntry {
                product,
                version: version.clone(),
                representations: repres,
            });
        }

        debug!(
            folders = output.len(),
            "Collected latest-version representations"
        );
        Ok(output)
    }
}
