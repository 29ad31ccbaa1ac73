//! # Data Model
//!
//! Entity records the workfile build consumes. All of them are read-only
//! snapshots sourced from the representation store; the build never writes
//! entities back. [`Container`] is the one record produced here, created by
//! loader plugins and handed back to the hosting application.

pub mod container;
pub mod folder;
pub mod product;
pub mod representation;
pub mod version;

pub use container::Container;
pub use folder::{Folder, TaskInfo};
pub use product::Product;
pub use representation::Representation;
pub use version::Version;
