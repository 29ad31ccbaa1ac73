//! # Workfile Builder
//!
//! Linear orchestration of a workfile build.
//!
//! ## Stages
//!
//! ```text
//! resolve current folder -> discover loaders -> match task profile
//!   -> split profile pools -> gather candidate folders
//!   -> collect representations -> resolve profiles per product
//!   -> ordered load loop -> containers grouped by folder
//! ```
//!
//! Any stage that comes up empty logs a warning and returns whatever was
//! already loaded. The one fatal condition raised here is a duplicated
//! loader name during discovery; store failures propagate as well.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::{
    filter_build_profiles, select_task_profile, BuildProfile, ProjectSettings, TaskBuildProfile,
};
use crate::context::BuildContext;
use crate::error::Result;
use crate::models::Folder;
use crate::registry::{Loader, LoaderRegistry};
use crate::store::RepresentationStore;

use super::container_loader::ContainerLoader;
use super::entity_collector::EntityCollector;
use super::profile_resolver::prepare_profiles_for_products;
use super::types::{CollectedFolder, FolderBuildResult};

/// Orchestrates the workfile build process.
///
/// Loads the latest versions of the current and linked folders into the
/// work scene, driven by the build profiles configured for the host.
pub struct WorkfileBuilder {
    store: Arc<dyn RepresentationStore>,
    /// Loader plugins exposed by the hosting application.
    loaders: Vec<Arc<dyn Loader>>,
    settings: ProjectSettings,
}

impl WorkfileBuilder {
    pub fn new(
        store: Arc<dyn RepresentationStore>,
        loaders: Vec<Arc<dyn Loader>>,
        settings: ProjectSettings,
    ) -> Self {
        Self {
            store,
            loaders,
            settings,
        }
    }

    /// Prepare and load containers into the workfile.
    ///
    /// Returns the loaded containers grouped per folder, the current folder
    /// first. A folder appears in the output once its load pass ran, even
    /// when every attempt failed.
    #[instrument(
        skip(self),
        fields(
            project = %context.project_name,
            folder = %context.folder_path,
            task = %context.task_name
        )
    )]
    pub async fn build_workfile(&self, context: &BuildContext) -> Result<Vec<FolderBuildResult>> {
        let mut loaded_containers = Vec::new();

        let Some(current_folder) = self
            .store
            .folder_by_path(&context.project_name, &context.folder_path)
            .await?
        else {
            warn!(folder = %context.folder_path, "Folder entity was not found");
            return Ok(loaded_containers);
        };

        let registry = LoaderRegistry::discover(self.loaders.iter().cloned())?;
        if registry.is_empty() {
            warn!("There are no registered loaders.");
            return Ok(loaded_containers);
        }

        let Some(task_profile) = self.task_build_profile(context, &current_folder) else {
            warn!(
                task = %context.task_name,
                "Current task does not have any loading profile"
            );
            return Ok(loaded_containers);
        };

        let current_profiles = &task_profile.current_context;
        let linked_profiles = &task_profile.linked_assets;
        if current_profiles.is_empty() && linked_profiles.is_empty() {
            warn!(task = %context.task_name, "Current task has an empty loading profile");
            return Ok(loaded_containers);
        }
        if current_profiles.is_empty() {
            warn!(
                task = %context.task_name,
                "Current task does not have any loading profile for its own context"
            );
        } else if linked_profiles.is_empty() {
            warn!(
                task = %context.task_name,
                "Current task does not have any loading profile for its linked folders"
            );
        }

        // Candidate folders: the current folder only when its pool is
        // configured, linked folders only when theirs is.
        let mut folders: Vec<Folder> = Vec::new();
        let mut current_folder_uuid = None;
        if !current_profiles.is_empty() {
            current_folder_uuid = Some(current_folder.folder_uuid);
            folders.push(current_folder.clone());
        }
        if !linked_profiles.is_empty() {
            let linked = self
                .store
                .linked_folders(&context.project_name, current_folder.folder_uuid)
                .await?;
            folders.extend(linked);
        }
        if folders.is_empty() {
            warn!("Folder does not have linked folders. Nothing to process.");
            return Ok(loaded_containers);
        }

        let collector = EntityCollector::new(Arc::clone(&self.store));
        let mut collected = collector
            .collect_last_version_repres(&context.project_name, &folders)
            .await?;

        // Current folder first.
        if let Some(folder_uuid) = current_folder_uuid {
            if let Some(folder_data) = collected.remove(&folder_uuid) {
                if let Some(result) = self
                    .load_containers_for_folder(&registry, &folder_data, current_profiles)
                    .await
                {
                    loaded_containers.push(result);
                }
            }
        }

        // Linked folders in candidate order.
        for folder in &folders {
            let Some(folder_data) = collected.remove(&folder.folder_uuid) else {
                continue;
            };
            if let Some(result) = self
                .load_containers_for_folder(&registry, &folder_data, linked_profiles)
                .await
            {
                loaded_containers.push(result);
            }
        }

        Ok(loaded_containers)
    }

    /// Task-level build profile for the current task, host scoped.
    fn task_build_profile(
        &self,
        context: &BuildContext,
        folder: &Folder,
    ) -> Option<&TaskBuildProfile> {
        let builder_settings = self.settings.workfile_builder(&context.host_name)?;
        if builder_settings.profiles.is_empty() {
            return None;
        }

        let task_type = folder.task_type(&context.task_name);
        select_task_profile(&builder_settings.profiles, &context.task_name, task_type)
    }

    /// Run profile validation, resolution and the load loop for one folder.
    ///
    /// Returns `None` when any required input is empty; a result with an
    /// empty container list means the load pass ran and nothing loaded.
    async fn load_containers_for_folder(
        &self,
        registry: &LoaderRegistry,
        folder_data: &CollectedFolder,
        pool: &[BuildProfile],
    ) -> Option<FolderBuildResult> {
        if folder_data.products.is_empty() || pool.is_empty() {
            return None;
        }

        let (valid_profiles, diagnostics) = filter_build_profiles(pool, registry);
        for diagnostic in &diagnostics {
            warn!(
                folder = %folder_data.folder.name,
                "Skipped build profile: {diagnostic}"
            );
        }
        if valid_profiles.is_empty() {
            warn!(
                folder = %folder_data.folder.name,
                "There are no valid workfile profiles. Skipping."
            );
            return None;
        }
        debug!(
            folder = %folder_data.folder.name,
            profiles = valid_profiles.len(),
            "Valid workfile profiles"
        );

        let assigned = prepare_profiles_for_products(
            folder_data.products.iter().map(|entry| &entry.product),
            &valid_profiles,
        );
        if assigned.is_empty() {
            warn!(
                folder = %folder_data.folder.name,
                "There are no products with a matching profile."
            );
            return None;
        }

        log_valid_representations(folder_data, &assigned);

        let loader = ContainerLoader::new(registry);
        let containers = loader
            .load_containers(folder_data, &valid_profiles, &assigned)
            .await;

        Some(FolderBuildResult {
            folder: folder_data.folder.clone(),
            containers,
        })
    }
}

/// Debug dump of the representations each matched product can load from.
fn log_valid_representations(
    folder_data: &CollectedFolder,
    assigned: &HashMap<Uuid, &crate::config::ValidatedProfile>,
) {
    for entry in &folder_data.products {
        let Some(profile) = assigned.get(&entry.product.product_uuid) else {
            continue;
        };

        let matching: Vec<&str> = entry
            .representations
            .iter()
            .filter(|repre| profile.repre_names_lowered.contains(&repre.name_lowered()))
            .map(|repre| repre.name.as_str())
            .collect();

        debug!(
            folder = %folder_data.folder.name,
            product = %entry.product.name,
            representations = ?matching,
            "Valid representations"
        );
    }
}
