//! # Workfile Build
//!
//! The build itself: entity collection, profile resolution and the ordered
//! load loop, coordinated by [`WorkfileBuilder`].
//!
//! ## Core Components
//!
//! - **WorkfileBuilder**: top-level orchestration, one linear pass per call
//! - **EntityCollector**: batched collection of products, latest versions and representations
//! - **profile_resolver**: first-match-wins profile assignment per product type
//! - **ContainerLoader**: the ordered load loop with loader/representation fallback

pub mod container_loader;
pub mod entity_collector;
pub mod profile_resolver;
pub mod types;
pub mod workfile_builder;

pub use container_loader::ContainerLoader;
pub use entity_collector::EntityCollector;
pub use profile_resolver::{map_products_by_type, prepare_profiles_for_products};
pub use types::{CollectedFolder, FolderBuildResult, ProductEntry};
pub use workfile_builder::WorkfileBuilder;
