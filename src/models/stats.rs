use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate counts over the whole catalog; every category appears in the
/// map, zero or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: i64,
    pub active_products: i64,
    pub inactive_products: i64,
    pub category_stats: BTreeMap<String, i64>,
}
