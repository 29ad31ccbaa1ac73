//! # Profile Resolver
//!
//! Assigns a validated build profile to each candidate product.
//!
//! Resolution is first-match-wins per product type: validated profiles are
//! scanned in configured order and the first one covering a type claims
//! every product of that type. Optional name filters then exclude
//! individual products. A product with no matching profile is silently
//! dropped from the build.

use std::collections::HashMap;

use uuid::Uuid;

use crate::config::ValidatedProfile;
use crate::models::Product;

/// Group products by their effective type.
///
/// Unclassifiable products (no type and no families) are dropped.
pub fn map_products_by_type<'a, I>(products: I) -> HashMap<String, Vec<&'a Product>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut products_by_type: HashMap<String, Vec<&Product>> = HashMap::new();
    for product in products {
        let Some(product_type) = product.effective_type() else {
            continue;
        };
        products_by_type
            .entry(product_type.to_string())
            .or_default()
            .push(product);
    }
    products_by_type
}

/// Pick the build profile for every candidate product.
///
/// The first profile whose type set contains a product type wins for the
/// whole type; later profiles are never consulted for it, even when a
/// name filter excludes some of the type's products.
pub fn prepare_profiles_for_products<'a, 'p, I>(
    products: I,
    profiles: &'p [ValidatedProfile],
) -> HashMap<Uuid, &'p ValidatedProfile>
where
    I: IntoIterator<Item = &'a Product>,
{
    let products_by_type = map_products_by_type(products);

    let mut profiles_by_product_uuid = HashMap::new();
    for (product_type, type_products) in products_by_type {
        let product_type_lowered = product_type.to_lowercase();

        for profile in profiles {
            if !profile.matches_product_type(&product_type_lowered) {
                continue;
            }

            for product in &type_products {
                if !profile.matches_product_name(&product.name) {
                    continue;
                }
                profiles_by_product_uuid.insert(product.product_uuid, profile);
            }

            // First matching profile claims the whole product type.
            break;
        }
    }

    profiles_by_product_uuid
}
