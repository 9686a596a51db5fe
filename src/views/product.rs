use crate::models;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::convert::From;

/// Wire representation of a product; field names follow the REST contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: models::Category,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Product> for ProductView {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category: product.category,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Product};
    use chrono::TimeZone;

    #[test]
    fn projects_every_field_with_camel_case_timestamps() {
        let created = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let product = Product {
            id: 1,
            name: "Pen".to_string(),
            description: None,
            price: Decimal::new(150, 2),
            stock: 100,
            category: Category::Other,
            active: true,
            created_at: created,
            updated_at: created,
        };

        let json = serde_json::to_value(ProductView::from(product)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Pen");
        assert!(json["description"].is_null());
        assert_eq!(json["category"], "OTHER");
        assert_eq!(json["active"], true);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
