//! Shared fixtures for workfile build integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use workfile_core::config::{
    BuildProfile, HostSettings, ProjectSettings, TaskBuildProfile, WorkfileBuilderSettings,
};
use workfile_core::models::{Container, Folder, Product, Representation, TaskInfo, Version};
use workfile_core::registry::{LoadError, LoadRequest, LoadResult, Loader};
use workfile_core::store::InMemoryStore;

/// What a recording loader does with every request.
#[derive(Clone, Copy)]
pub enum LoadBehavior {
    Succeed,
    Fail,
    Incompatible,
}

/// Loader that records every attempt into a shared log as
/// `"<loader>:<product>"`.
pub struct RecordingLoader {
    pub name: String,
    pub behavior: LoadBehavior,
    pub enabled: bool,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl RecordingLoader {
    pub fn arc(
        name: &str,
        behavior: LoadBehavior,
        log: &Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn Loader> {
        Arc::new(Self {
            name: name.to_string(),
            behavior,
            enabled: true,
            log: Arc::clone(log),
        })
    }

    pub fn disabled(name: &str, log: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Loader> {
        Arc::new(Self {
            name: name.to_string(),
            behavior: LoadBehavior::Succeed,
            enabled: false,
            log: Arc::clone(log),
        })
    }
}

#[async_trait]
impl Loader for RecordingLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn product_types(&self) -> Vec<String> {
        vec!["model".to_string(), "rig".to_string()]
    }

    fn representation_names(&self) -> Vec<String> {
        vec!["abc".to_string(), "ma".to_string(), "usd".to_string()]
    }

    async fn load(&self, request: &LoadRequest) -> LoadResult<Container> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, request.name));

        match self.behavior {
            LoadBehavior::Succeed => Ok(Container {
                representation_uuid: request.representation_uuid,
                loader: self.name.clone(),
                name: request.name.clone(),
                namespace: None,
                object_name: format!("{}_CON", request.name),
            }),
            LoadBehavior::Fail => Err(LoadError::Failed {
                loader: self.name.clone(),
                reason: "host import failed".to_string(),
            }),
            LoadBehavior::Incompatible => Err(LoadError::Incompatible {
                loader: self.name.clone(),
                representation: request.name.clone(),
            }),
        }
    }
}

pub fn folder(path: &str, tasks: &[(&str, &str)]) -> Folder {
    let tasks = tasks
        .iter()
        .map(|(name, task_type)| (name.to_string(), TaskInfo::new(*task_type)))
        .collect::<HashMap<_, _>>();

    Folder {
        folder_uuid: Uuid::new_v4(),
        path: path.to_string(),
        name: path.rsplit('/').next().unwrap().to_string(),
        tasks,
    }
}

/// Seed a product with one version and its representations into the store.
pub fn seed_product(
    store: &mut InMemoryStore,
    folder: &Folder,
    name: &str,
    product_type: &str,
    repre_names: &[&str],
) -> Product {
    let product = Product {
        product_uuid: Uuid::new_v4(),
        folder_uuid: folder.folder_uuid,
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

    for repre_name in repre_names {
        store.add_representation(Representation {
            representation_uuid: Uuid::new_v4(),
            version_uuid: version.version_uuid,
            name: repre_name.to_string(),
        });
    }
    store.add_product(product.clone());
    store.add_version(version);
    product
}

pub fn build_profile(loaders: &[&str], product_types: &[&str], repre_names: &[&str]) -> BuildProfile {
    BuildProfile {
        loaders: loaders.iter().map(|v| v.to_string()).collect(),
        product_types: product_types.iter().map(|v| v.to_string()).collect(),
        repre_names: repre_names.iter().map(|v| v.to_string()).collect(),
        product_name_filters: vec![],
    }
}

pub fn task_profile(
    task_types: &[&str],
    current_context: Vec<BuildProfile>,
    linked_assets: Vec<BuildProfile>,
) -> TaskBuildProfile {
    TaskBuildProfile {
        task_types: task_types.iter().map(|v| v.to_string()).collect(),
        task_names: vec![],
        current_context,
        linked_assets,
    }
}

/// Settings tree with one host carrying the given profiles.
pub fn settings(host_name: &str, profiles: Vec<TaskBuildProfile>) -> ProjectSettings {
    let mut hosts = HashMap::new();
    hosts.insert(
        host_name.to_string(),
        HostSettings {
            workfile_builder: Some(WorkfileBuilderSettings { profiles }),
        },
    );
    ProjectSettings { hosts }
}
