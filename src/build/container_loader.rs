//! # Container Loader
//!
//! The ordered load loop.
//!
//! ## Attempt Order
//!
//! Products are attempted in the order the profile pool declares them:
//! profiles first, then each profile's product types, then the collected
//! products of that type. Per product, the profile's representation names
//! are walked in priority order against the available representations
//! (case-insensitive), and per matching representation the profile's
//! loaders in priority order. The first successful attempt produces the
//! product's container and ends its chain; exhausting all names skips the
//! product.

use std::collections::HashMap;

use tracing::{error, info};
use uuid::Uuid;

use crate::config::ValidatedProfile;
use crate::models::Container;
use crate::registry::{LoadError, LoadRequest, LoaderRegistry};

use super::types::CollectedFolder;

/// Executes load attempts against the loader registry.
pub struct ContainerLoader<'a> {
    registry: &'a LoaderRegistry,
}

impl<'a> ContainerLoader<'a> {
    pub fn new(registry: &'a LoaderRegistry) -> Self {
        Self { registry }
    }

    /// Load containers for one folder's worth of matched products.
    ///
    /// Per-attempt failures are logged and fall through to the next loader
    /// or representation; they never fail the build.
    pub async fn load_containers(
        &self,
        collected: &CollectedFolder,
        pool: &[ValidatedProfile],
        assigned: &HashMap<Uuid, &ValidatedProfile>,
    ) -> Vec<Container> {
        let mut loaded_containers = Vec::new();

        let entries_by_uuid = collected.entries_by_product_uuid();
        let ordered = order_product_uuids(pool, collected);

        for product_uuid in ordered {
            let Some(profile) = assigned.get(&product_uuid) else {
                continue;
            };
            let Some(entry) = entries_by_uuid.get(&product_uuid) else {
                continue;
            };

            let product_name = entry.product.name.as_str();
            let repre_by_lowered: HashMap<String, _> = entry
                .representations
                .iter()
                .map(|repre| (repre.name_lowered(), repre))
                .collect();

            let loaders_last_idx = profile.profile.loaders.len().saturating_sub(1);
            let repre_names_last_idx = profile.repre_names_lowered.len().saturating_sub(1);

            let mut is_loaded = false;
            for (repre_name_idx, repre_name) in profile.repre_names_lowered.iter().enumerate() {
                if is_loaded {
                    break;
                }
                let Some(repre) = repre_by_lowered.get(repre_name) else {
                    continue;
                };

                for (loader_idx, loader_name) in profile.profile.loaders.iter().enumerate() {
                    if is_loaded {
                        break;
                    }
                    let Some(loader) = self.registry.get(loader_name) else {
                        continue;
                    };

                    let request = LoadRequest::new(repre.representation_uuid, product_name);
                    match loader.load(&request).await {
                        Ok(container) => {
                            loaded_containers.push(container);
                            is_loaded = true;
                        }
                        Err(err) => {
                            match &err {
                                LoadError::Incompatible { .. } => {
                                    info!(
                                        loader = %loader_name,
                                        representation = %repre.name,
                                        "Loader is not compatible with representation"
                                    );
                                }
                                other => {
                                    error!(
                                        loader = %loader_name,
                                        representation = %repre.name,
                                        error = %other,
                                        "Unexpected error happened during loading"
                                    );
                                }
                            }

                            if loader_idx < loaders_last_idx {
                                info!("Loading failed. Trying next loader.");
                            } else if repre_name_idx < repre_names_last_idx {
                                info!("Loading failed. Trying next representation.");
                            } else {
                                info!(
                                    product = %product_name,
                                    "Loading failed. Product could not be loaded."
                                );
                            }
                        }
                    }
                }
            }
        }

        loaded_containers
    }
}

/// Product attempt order, derived from the profile pool as configured.
///
/// Iterates profiles, their declared product types and the collected
/// products of each type, keeping the first occurrence of every product.
fn order_product_uuids(pool: &[ValidatedProfile], collected: &CollectedFolder) -> Vec<Uuid> {
    let mut ordered = Vec::new();

    for profile in pool {
        for product_type in &profile.product_types_lowered {
            for entry in &collected.products {
                let Some(effective) = entry.product.effective_type() else {
                    continue;
                };
                if effective.to_lowercase() != *product_type {
                    continue;
                }

                let product_uuid = entry.product.product_uuid;
                if !ordered.contains(&product_uuid) {
                    ordered.push(product_uuid);
                }
            }
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use crate::build::types::ProductEntry;
    use crate::config::{filter_build_profiles, BuildProfile};
    use crate::models::{Folder, Product, Representation, Version};
    use crate::registry::{LoadResult, Loader};

    use super::*;

    /// What a scripted loader does with every request.
    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed,
        Fail,
        Incompatible,
    }

    struct ScriptedLoader {
        name: String,
        behavior: Behavior,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Loader for ScriptedLoader {
        fn name(&self) -> &str {
            &self.name
        }

        fn product_types(&self) -> Vec<String> {
            vec![]
        }

        fn representation_names(&self) -> Vec<String> {
            vec![]
        }

        async fn load(&self, request: &LoadRequest) -> LoadResult<Container> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, request.name));

            match self.behavior {
                Behavior::Succeed => Ok(Container {
                    representation_uuid: request.representation_uuid,
                    loader: self.name.clone(),
                    name: request.name.clone(),
                    namespace: None,
                    object_name: format!("{}_CON", request.name),
                }),
                Behavior::Fail => Err(LoadError::Failed {
                    loader: self.name.clone(),
                    reason: "scripted failure".to_string(),
                }),
                Behavior::Incompatible => Err(LoadError::Incompatible {
                    loader: self.name.clone(),
                    representation: request.name.clone(),
                }),
            }
        }
    }

    struct Fixture {
        registry: LoaderRegistry,
        log: Arc<Mutex<Vec<String>>>,
    }

    fn fixture(loaders: &[(&str, Behavior)]) -> Fixture {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = LoaderRegistry::discover(loaders.iter().map(|(name, behavior)| {
            Arc::new(ScriptedLoader {
                name: name.to_string(),
                behavior: *behavior,
                log: Arc::clone(&log),
            }) as Arc<dyn Loader>
        }))
        .unwrap();
        Fixture { registry, log }
    }

    fn entry(name: &str, product_type: &str, repre_names: &[&str]) -> ProductEntry {
        let product = Product {
            product_uuid: Uuid::new_v4(),
            folder_uuid: Uuid::new_v4(),
            name: name.to_string(),
            product_type: Some(product_type.to_string()),
            families: vec![],
        };
        let version = Version {
            version_uuid: Uuid::new_v4(),
            product_uuid: product.product_uuid,
            version: 1,
            created_at: Utc::now().naive_utc(),
        };
        let representations = repre_names
            .iter()
            .map(|repre_name| Representation {
                representation_uuid: Uuid::new_v4(),
                version_uuid: version.version_uuid,
                name: repre_name.to_string(),
            })
            .collect();

        ProductEntry {
            product,
            version,
            representations,
        }
    }

    fn collected(entries: Vec<ProductEntry>) -> CollectedFolder {
        CollectedFolder {
            folder: Folder {
                folder_uuid: Uuid::new_v4(),
                path: "/assets/charA".to_string(),
                name: "charA".to_string(),
                tasks: HashMap::new(),
            },
            products: entries,
        }
    }

    fn pool(registry: &LoaderRegistry, profiles: &[BuildProfile]) -> Vec<ValidatedProfile> {
        let (valid, diagnostics) = filter_build_profiles(profiles, registry);
        assert!(diagnostics.is_empty());
        valid
    }

    fn profile(loaders: &[&str], product_types: &[&str], repre_names: &[&str]) -> BuildProfile {
        BuildProfile {
            loaders: loaders.iter().map(|v| v.to_string()).collect(),
            product_types: product_types.iter().map(|v| v.to_string()).collect(),
            repre_names: repre_names.iter().map(|v| v.to_string()).collect(),
            product_name_filters: vec![],
        }
    }

    #[tokio::test]
    async fn test_profile_order_drives_product_order() {
        let fix = fixture(&[("AnyLoader", Behavior::Succeed)]);
        let folder_data = collected(vec![
            entry("modelMain", "model", &["abc"]),
            entry("rigMain", "rig", &["ma"]),
        ]);
        let pool = pool(
            &fix.registry,
            &[
                profile(&["AnyLoader"], &["rig"], &["ma"]),
                profile(&["AnyLoader"], &["model"], &["abc"]),
            ],
        );
        let assigned =
            crate::build::profile_resolver::prepare_profiles_for_products(
                folder_data.products.iter().map(|entry| &entry.product),
                &pool,
            );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;

        assert_eq!(containers.len(), 2);
        let log = fix.log.lock().unwrap();
        assert_eq!(*log, ["AnyLoader:rigMain", "AnyLoader:modelMain"]);
    }

    #[tokio::test]
    async fn test_fallback_stops_at_first_success() {
        let fix = fixture(&[
            ("LoaderX", Behavior::Fail),
            ("LoaderY", Behavior::Succeed),
        ]);
        let folder_data = collected(vec![entry("modelMain", "model", &["abc"])]);
        let pool = pool(
            &fix.registry,
            &[profile(&["LoaderX", "LoaderY"], &["model"], &["abc", "usd"])],
        );
        let assigned = crate::build::profile_resolver::prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &pool,
        );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;

        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].loader, "LoaderY");
        // "usd" does not exist, so only the two "abc" attempts happened.
        let log = fix.log.lock().unwrap();
        assert_eq!(*log, ["LoaderX:modelMain", "LoaderY:modelMain"]);
    }

    #[tokio::test]
    async fn test_incompatible_falls_through_like_any_failure() {
        let fix = fixture(&[
            ("LoaderX", Behavior::Incompatible),
            ("LoaderY", Behavior::Succeed),
        ]);
        let folder_data = collected(vec![entry("modelMain", "model", &["abc"])]);
        let pool = pool(
            &fix.registry,
            &[profile(&["LoaderX", "LoaderY"], &["model"], &["abc"])],
        );
        let assigned = crate::build::profile_resolver::prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &pool,
        );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;

        assert_eq!(containers.len(), 1);
        assert_eq!(containers[0].loader, "LoaderY");
    }

    #[tokio::test]
    async fn test_next_representation_after_loader_exhaustion() {
        let fix = fixture(&[("LoaderX", Behavior::Fail)]);
        let folder_data = collected(vec![entry("modelMain", "model", &["abc", "usd"])]);
        let pool = pool(
            &fix.registry,
            &[profile(&["LoaderX"], &["model"], &["abc", "usd"])],
        );
        let assigned = crate::build::profile_resolver::prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &pool,
        );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;

        assert!(containers.is_empty());
        let log = fix.log.lock().unwrap();
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn test_representation_match_is_case_insensitive() {
        let fix = fixture(&[("AnyLoader", Behavior::Succeed)]);
        let folder_data = collected(vec![entry("modelMain", "model", &["ABC"])]);
        let pool = pool(
            &fix.registry,
            &[profile(&["AnyLoader"], &["model"], &["abc"])],
        );
        let assigned = crate::build::profile_resolver::prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &pool,
        );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;
        assert_eq!(containers.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_loader_names_are_skipped() {
        let fix = fixture(&[("AnyLoader", Behavior::Succeed)]);
        let folder_data = collected(vec![entry("modelMain", "model", &["abc"])]);
        let pool = pool(
            &fix.registry,
            &[profile(&["GhostLoader", "AnyLoader"], &["model"], &["abc"])],
        );
        let assigned = crate::build::profile_resolver::prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &pool,
        );

        let loader = ContainerLoader::new(&fix.registry);
        let containers = loader.load_containers(&folder_data, &pool, &assigned).await;

        assert_eq!(containers.len(), 1);
        let log = fix.log.lock().unwrap();
        assert_eq!(*log, ["AnyLoader:modelMain"]);
    }
}
