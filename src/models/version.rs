use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version is an immutable snapshot of a product's output.
///
/// Only the latest version per product is consumed by the build; history
/// traversal is the store's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub version_uuid: Uuid,
    pub product_uuid: Uuid,
    pub version: i32,
    pub created_at: NaiveDateTime,
}
