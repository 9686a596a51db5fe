use crate::errors::ApiError;
use crate::services::ProductService;
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

#[tracing::instrument(name = "Get catalog stats.")]
#[get("/stats")]
pub async fn summary(pg_pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let stats = ProductService::new(pg_pool.get_ref()).stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
