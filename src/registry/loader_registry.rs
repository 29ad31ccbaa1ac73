//! # Loader Registry
//!
//! Registered-variant table of discovered loader plugins.
//!
//! ## Overview
//!
//! Discovery walks the loaders a hosting application exposes, drops disabled
//! ones and indexes the rest by their declared name. A duplicated name is
//! the one hard data error in the subsystem: the table would be ambiguous,
//! so discovery fails instead of degrading.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, WorkfileError};

use super::Loader;

/// Available loader plugins indexed by declared name.
pub struct LoaderRegistry {
    loaders_by_name: HashMap<String, Arc<dyn Loader>>,
}

impl LoaderRegistry {
    /// Build the registry from discovered loader plugins.
    ///
    /// Disabled loaders are skipped. Returns
    /// [`WorkfileError::DuplicateLoader`] when two enabled loaders declare
    /// the same name.
    pub fn discover<I>(loaders: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn Loader>>,
    {
        let mut loaders_by_name: HashMap<String, Arc<dyn Loader>> = HashMap::new();

        for loader in loaders {
            if !loader.enabled() {
                debug!(loader = loader.name(), "Skipping disabled loader");
                continue;
            }

            let name = loader.name().to_string();
            if loaders_by_name.contains_key(&name) {
                return Err(WorkfileError::DuplicateLoader { name });
            }

            loaders_by_name.insert(name, loader);
        }

        info!(count = loaders_by_name.len(), "Discovered loader plugins");
        Ok(Self { loaders_by_name })
    }

    /// Loader for a declared name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Loader>> {
        self.loaders_by_name.get(name)
    }

    /// Whether a loader with this name is available.
    pub fn contains(&self, name: &str) -> bool {
        self.loaders_by_name.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.loaders_by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.loaders_by_name.len()
    }

    /// Declared names of all available loaders.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loaders_by_name.keys().map(String::as_str)
    }
}
