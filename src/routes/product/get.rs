use crate::errors::ApiError;
use crate::forms::Pagination;
use crate::models::Category;
use crate::services::ProductService;
use crate::views::ProductView;
use actix_web::{get, web, HttpResponse};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::str::FromStr;

#[tracing::instrument(name = "Get product.")]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    let product = ProductService::new(pg_pool.get_ref()).get(id).await?;
    Ok(HttpResponse::Ok().json(ProductView::from(product)))
}

#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    #[serde(rename = "activeOnly")]
    pub active_only: Option<bool>,
}

#[tracing::instrument(name = "List products.")]
#[get("")]
pub async fn list(
    query: web::Query<ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let service = ProductService::new(pg_pool.get_ref());
    let pagination = Pagination::new(query.page, query.size);

    let page = if query.active_only == Some(true) {
        service.list_active(pagination).await?
    } else {
        service.list_all(pagination).await?
    };

    Ok(HttpResponse::Ok().json(page.map(ProductView::from)))
}

#[tracing::instrument(name = "List products by category.")]
#[get("/category/{category}")]
pub async fn by_category(
    path: web::Path<(String,)>,
    query: web::Query<Pagination>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (category,) = path.into_inner();
    let category = Category::from_str(&category).map_err(ApiError::InvalidArgument)?;

    let page = ProductService::new(pg_pool.get_ref())
        .list_by_category(category, *query, true)
        .await?;

    Ok(HttpResponse::Ok().json(page.map(ProductView::from)))
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchQuery {
    pub name: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[tracing::instrument(name = "Search products by name.")]
#[get("/search")]
pub async fn search(
    query: web::Query<SearchQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let pagination = Pagination::new(query.page, query.size);
    let page = ProductService::new(pg_pool.get_ref())
        .search_by_name(&query.name, pagination)
        .await?;

    Ok(HttpResponse::Ok().json(page.map(ProductView::from)))
}

#[derive(Debug, serde::Deserialize)]
pub struct PriceRangeQuery {
    #[serde(rename = "minPrice")]
    pub min_price: Decimal,
    #[serde(rename = "maxPrice")]
    pub max_price: Decimal,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[tracing::instrument(name = "List products by price range.")]
#[get("/price-range")]
pub async fn by_price_range(
    query: web::Query<PriceRangeQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let pagination = Pagination::new(query.page, query.size);
    let page = ProductService::new(pg_pool.get_ref())
        .list_by_price_range(query.min_price, query.max_price, pagination)
        .await?;

    Ok(HttpResponse::Ok().json(page.map(ProductView::from)))
}
