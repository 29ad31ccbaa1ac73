use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Representation is a specific file/format instance of a version.
///
/// The name (e.g. "abc", "exr") is matched case-insensitively against
/// profile configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    pub representation_uuid: Uuid,
    pub version_uuid: Uuid,
    pub name: String,
}

impl Representation {
    /// Name normalized for case-insensitive matching.
    pub fn name_lowered(&self) -> String {
        self.name.to_lowercase()
    }
}
