//! Shared types produced and consumed across the build stages.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Container, Folder, Product, Representation, Version};

/// Product with its latest version and that version's representations.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEntry {
    pub product: Product,
    pub version: Version,
    pub representations: Vec<Representation>,
}

/// One folder's worth of collected entities.
///
/// Products keep the store's return order; products whose latest version has
/// no representations are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedFolder {
    pub folder: Folder,
    pub products: Vec<ProductEntry>,
}

impl CollectedFolder {
    /// Product entries indexed by product id.
    pub fn entries_by_product_uuid(&self) -> HashMap<Uuid, &ProductEntry> {
        self.products
            .iter()
            .map(|entry| (entry.product.product_uuid, entry))
            .collect()
    }
}

/// Containers loaded for one folder, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderBuildResult {
    pub folder: Folder,
    pub containers: Vec<Container>,
}
