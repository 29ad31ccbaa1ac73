//! # Loader Plugin Registry
//!
//! Polymorphic loader plugins and their discovery.
//!
//! Hosting applications expose their loaders as [`Loader`] trait objects;
//! [`LoaderRegistry::discover`] indexes the enabled ones by name so build
//! profiles can reference them. A load attempt returns
//! `Result<Container, LoadError>`, letting the load loop branch on the
//! failure kind instead of inspecting exception identity.

pub mod loader;
pub mod loader_registry;

pub use loader::{LoadError, LoadRequest, LoadResult, Loader};
pub use loader_registry::LoaderRegistry;
