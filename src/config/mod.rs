//! # Workfile Build Configuration
//!
//! Project-scoped settings tree and the build profiles inside it.
//!
//! ## Architecture
//!
//! - **Host scoped**: the settings document is keyed by host name; each host
//!   carries its own `workfile_builder` section, since each host has its own
//!   loaders.
//! - **Validated once**: build profiles are checked against the loader
//!   registry at the start of a build and carry their normalized matching
//!   data from then on. Malformed entries are collected as diagnostics, not
//!   scattered warnings.
//! - **Explicit records**: profiles are typed structs deserialized with
//!   serde, with legacy key aliases where older settings documents differ.

pub mod error;
pub mod loader;
pub mod profiles;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::SettingsManager;
pub use profiles::{
    filter_build_profiles, select_task_profile, BuildProfile, ProfileDiagnostic, TaskBuildProfile,
    ValidatedProfile,
};

/// Project settings tree: host name to host settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(flatten)]
    pub hosts: HashMap<String, HostSettings>,
}

impl ProjectSettings {
    /// Workfile builder settings for a host, when configured.
    pub fn workfile_builder(&self, host_name: &str) -> Option<&WorkfileBuilderSettings> {
        self.hosts
            .get(host_name)
            .and_then(|host| host.workfile_builder.as_ref())
    }
}

/// Settings of one host application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSettings {
    /// `workfile_build` is accepted for pre-rename settings documents.
    #[serde(default, alias = "workfile_build")]
    pub workfile_builder: Option<WorkfileBuilderSettings>,
}

/// The `workfile_builder` section of one host's settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkfileBuilderSettings {
    #[serde(default)]
    pub profiles: Vec<TaskBuildProfile>,
}
