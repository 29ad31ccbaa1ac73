use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Container records one successfully loaded representation.
///
/// Created by a loader plugin, tracked only transiently by the build and
/// returned to the caller. Persisting it into host scene metadata for later
/// update or removal is the hosting application's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub representation_uuid: Uuid,
    /// Identifier of the loader that produced the container.
    pub loader: String,
    /// Display name, usually the product name the load was requested under.
    pub name: String,
    /// Host namespace the content was placed in, when the host uses one.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Host-defined handle addressing the loaded content in the scene.
    pub object_name: String,
}
