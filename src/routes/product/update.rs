use crate::errors::{validation_errors, ApiError};
use crate::forms;
use crate::services::ProductService;
use crate::views::ProductView;
use actix_web::{patch, put, web, HttpResponse};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Update product.")]
#[put("/{id}")]
pub async fn item(
    path: web::Path<(i32,)>,
    form: web::Json<forms::ProductUpdateForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();

    if let Err(errors) = form.validate() {
        tracing::debug!("Invalid data received: {:?}", errors);
        return Err(ApiError::Validation(validation_errors(&errors)));
    }

    let product = ProductService::new(pg_pool.get_ref())
        .update(id, &form)
        .await?;
    Ok(HttpResponse::Ok().json(ProductView::from(product)))
}

#[tracing::instrument(name = "Deactivate product.")]
#[patch("/{id}/deactivate")]
pub async fn deactivate(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    let product = ProductService::new(pg_pool.get_ref()).deactivate(id).await?;
    Ok(HttpResponse::Ok().json(ProductView::from(product)))
}
