use crate::models::{Category, Product};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

fn default_active() -> bool {
    true
}

fn positive_price(price: &Decimal) -> Result<(), serde_valid::validation::Error> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        Err(serde_valid::validation::Error::Custom(
            "Price must be positive".to_string(),
        ))
    }
}

fn not_blank(name: &str) -> Result<(), serde_valid::validation::Error> {
    if name.trim().is_empty() {
        Err(serde_valid::validation::Error::Custom(
            "Name must not be blank".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn positive_price_if_present(
    price: &Option<Decimal>,
) -> Result<(), serde_valid::validation::Error> {
    match price {
        Some(price) => positive_price(price),
        None => Ok(()),
    }
}

fn not_blank_if_present(name: &Option<String>) -> Result<(), serde_valid::validation::Error> {
    match name {
        Some(name) => not_blank(name),
        None => Ok(()),
    }
}

/// Creation payload. Unknown category names are already rejected at
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(custom(not_blank))]
    #[validate(max_length = 100)]
    pub name: String,
    #[validate(max_length = 500)]
    pub description: Option<String>,
    #[validate(custom(positive_price))]
    pub price: Decimal,
    #[validate(minimum = 1)]
    pub stock: i32,
    pub category: Category,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl ProductForm {
    /// Builds the entity to insert; both timestamps are set to `now` and
    /// the id stays unassigned until storage hands one back.
    pub fn to_product(&self, now: DateTime<Utc>) -> Product {
        Product {
            id: 0,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            stock: self.stock,
            category: self.category,
            active: self.active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update payload; absent fields keep their current value.
#[derive(Default, Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductUpdateForm {
    #[validate(custom(not_blank_if_present))]
    #[validate(max_length = 100)]
    pub name: Option<String>,
    #[validate(max_length = 500)]
    pub description: Option<String>,
    #[validate(custom(positive_price_if_present))]
    pub price: Option<Decimal>,
    #[validate(minimum = 1)]
    pub stock: Option<i32>,
    pub category: Option<Category>,
    pub active: Option<bool>,
}

impl ProductUpdateForm {
    /// Constructs the replacement row from the current one: present fields
    /// overlay, absent fields carry over, `updated_at` is always refreshed.
    /// `id` and `created_at` never change.
    pub fn merge(&self, current: &Product, now: DateTime<Utc>) -> Product {
        Product {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            description: self
                .description
                .clone()
                .or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            stock: self.stock.unwrap_or(current.stock),
            category: self.category.unwrap_or(current.category),
            active: self.active.unwrap_or(current.active),
            created_at: current.created_at,
            updated_at: now,
        }
    }
}
