use crate::errors::ApiError;
use crate::services::ProductService;
use actix_web::{delete, web, HttpResponse};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete product.")]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    ProductService::new(pg_pool.get_ref()).delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
