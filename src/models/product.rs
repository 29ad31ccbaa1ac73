use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product (formerly "subset") is a named deliverable category under a
/// folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_uuid: Uuid,
    pub folder_uuid: Uuid,
    pub name: String,
    /// Singular product type classification.
    pub product_type: Option<String>,
    /// Legacy multi-value classification. The first entry stands in when
    /// `product_type` is not set.
    #[serde(default)]
    pub families: Vec<String>,
}

impl Product {
    /// Effective classification used for profile matching.
    ///
    /// Returns `None` for unclassifiable products, which are excluded from
    /// the build.
    pub fn effective_type(&self) -> Option<&str> {
        if let Some(product_type) = self.product_type.as_deref() {
            if !product_type.is_empty() {
                return Some(product_type);
            }
        }
        self.families.first().map(|family| family.as_str())
    }
}
