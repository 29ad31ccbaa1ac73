#![allow(clippy::doc_markdown)] // Allow technical terms like YAML, AYON in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Workfile Core
//!
//! Rust core for settings-driven workfile building.
//!
//! ## Overview
//!
//! A workfile build loads the latest published representations of the current
//! folder and its linked folders into a freshly opened work scene. Which
//! products get loaded, through which loaders, and in which order is driven
//! entirely by project settings: host-scoped build profiles select loader and
//! representation priorities per product type and task.
//!
//! The asset database and the loader plugins are external collaborators. The
//! database is consumed through the [`store::RepresentationStore`] trait, the
//! plugins through the [`registry::Loader`] trait. Everything a hosting
//! application must supply is an implementation of one of those two seams
//! plus a [`context::BuildContext`] value.
//!
//! ## Module Organization
//!
//! - [`models`] - Entity records: folders, products, versions, representations, containers
//! - [`store`] - Read-only query surface of the asset database
//! - [`registry`] - Loader plugin trait and registry with duplicate detection
//! - [`config`] - Project settings tree, build profiles, profile matching and validation
//! - [`build`] - The build itself: collection, profile resolution, ordered loading
//! - [`context`] - Explicit build context (project, folder, task, host)
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workfile_core::build::WorkfileBuilder;
//! use workfile_core::config::ProjectSettings;
//! use workfile_core::context::BuildContext;
//! use workfile_core::store::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(InMemoryStore::new());
//! let settings = ProjectSettings::default();
//! let loaders = vec![];
//!
//! let builder = WorkfileBuilder::new(store, loaders, settings);
//! let context = BuildContext::new("demo_project", "/assets/charA", "modeling", "maya");
//! let results = builder.build_workfile(&context).await?;
//!
//! for result in results {
//!     println!("{}: {} containers", result.folder.path, result.containers.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Policy
//!
//! Configuration gaps (no loaders, no profiles, no matching folders) degrade
//! to a no-op: the build logs a warning and returns whatever was already
//! loaded. Individual load attempts fall back through the configured loader
//! and representation chains. The only fatal condition originating here is a
//! duplicated loader name discovered during registry discovery.

pub mod build;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod store;

pub use build::{FolderBuildResult, WorkfileBuilder};
pub use config::{
    BuildProfile, ProjectSettings, SettingsManager, TaskBuildProfile, WorkfileBuilderSettings,
};
pub use context::BuildContext;
pub use error::{Result, WorkfileError};
pub use models::{Container, Folder, Product, Representation, Version};
pub use registry::{LoadError, LoadRequest, Loader, LoaderRegistry};
pub use store::{InMemoryStore, RepresentationStore, StoreError};
