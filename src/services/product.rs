use crate::db;
use crate::errors::ApiError;
use crate::forms::{Pagination, ProductForm, ProductUpdateForm};
use crate::models::{Category, Page, Product, ProductStats};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::BTreeMap;

/// ProductService - every catalog operation goes through here; the only
/// component allowed to read-then-write.
pub struct ProductService<'a> {
    pg: &'a PgPool,
}

impl<'a> ProductService<'a> {
    pub fn new(pg: &'a PgPool) -> Self {
        Self { pg }
    }

    pub async fn create(&self, form: &ProductForm) -> Result<Product, ApiError> {
        let product = db::product::insert(self.pg, form.to_product(Utc::now())).await?;
        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    pub async fn get(&self, id: i32) -> Result<Product, ApiError> {
        db::product::fetch(self.pg, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_all(&self, pagination: Pagination) -> Result<Page<Product>, ApiError> {
        let (page, size) = validate_pagination(&pagination)?;
        let (products, total) = db::product::fetch_all(self.pg, size, page * size).await?;
        Ok(Page::new(products, page, size, total))
    }

    pub async fn list_active(&self, pagination: Pagination) -> Result<Page<Product>, ApiError> {
        let (page, size) = validate_pagination(&pagination)?;
        let (products, total) = db::product::fetch_active(self.pg, size, page * size).await?;
        Ok(Page::new(products, page, size, total))
    }

    pub async fn list_by_category(
        &self,
        category: Category,
        pagination: Pagination,
        active_only: bool,
    ) -> Result<Page<Product>, ApiError> {
        let (page, size) = validate_pagination(&pagination)?;
        let (products, total) =
            db::product::fetch_by_category(self.pg, category, active_only, size, page * size)
                .await?;
        Ok(Page::new(products, page, size, total))
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        pagination: Pagination,
    ) -> Result<Page<Product>, ApiError> {
        let (page, size) = validate_pagination(&pagination)?;
        let (products, total) =
            db::product::search_by_name(self.pg, name, size, page * size).await?;
        Ok(Page::new(products, page, size, total))
    }

    pub async fn list_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        pagination: Pagination,
    ) -> Result<Page<Product>, ApiError> {
        validate_price_bounds(min_price, max_price)?;
        let (page, size) = validate_pagination(&pagination)?;
        let (products, total) =
            db::product::fetch_by_price_range(self.pg, min_price, max_price, size, page * size)
                .await?;
        Ok(Page::new(products, page, size, total))
    }

    pub async fn update(&self, id: i32, form: &ProductUpdateForm) -> Result<Product, ApiError> {
        let current = self.get(id).await?;
        let product = db::product::update(self.pg, form.merge(&current, Utc::now())).await?;
        Ok(product)
    }

    // Same overlay path as update, pinned to a single field. Idempotent.
    pub async fn deactivate(&self, id: i32) -> Result<Product, ApiError> {
        let form = ProductUpdateForm {
            active: Some(false),
            ..ProductUpdateForm::default()
        };
        self.update(id, &form).await
    }

    // Existence is checked first so a missing id reports NotFound instead
    // of silently deleting nothing.
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        if !db::product::exists(self.pg, id).await? {
            return Err(not_found(id));
        }
        db::product::delete(self.pg, id).await?;
        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    pub async fn stats(&self) -> Result<ProductStats, ApiError> {
        let total_products = db::product::count_all(self.pg).await?;
        let active_products = db::product::count_by_active(self.pg, true).await?;

        let mut category_stats = BTreeMap::new();
        for category in Category::ALL {
            let count = db::product::count_by_category(self.pg, category).await?;
            category_stats.insert(category.to_string(), count);
        }

        Ok(ProductStats {
            total_products,
            active_products,
            inactive_products: total_products - active_products,
            category_stats,
        })
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Product with id {} not found", id))
}

fn validate_pagination(pagination: &Pagination) -> Result<(i64, i64), ApiError> {
    let page = pagination.page();
    let size = pagination.size();
    if page < 0 {
        return Err(ApiError::InvalidArgument(
            "Page index must not be negative".to_string(),
        ));
    }
    if size < 1 {
        return Err(ApiError::InvalidArgument(
            "Page size must be at least 1".to_string(),
        ));
    }
    Ok((page, size))
}

fn validate_price_bounds(min_price: Decimal, max_price: Decimal) -> Result<(), ApiError> {
    if min_price > max_price {
        return Err(ApiError::InvalidArgument(format!(
            "minPrice {} must not exceed maxPrice {}",
            min_price, max_price
        )));
    }
    Ok(())
}
