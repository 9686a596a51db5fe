use crate::errors::{validation_errors, ApiError};
use crate::forms;
use crate::services::ProductService;
use crate::views::ProductView;
use actix_web::{post, web, HttpResponse};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.")]
#[post("")]
pub async fn item(
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = form.validate() {
        tracing::debug!("Invalid data received: {:?}", errors);
        return Err(ApiError::Validation(validation_errors(&errors)));
    }

    let product = ProductService::new(pg_pool.get_ref()).create(&form).await?;
    Ok(HttpResponse::Created().json(ProductView::from(product)))
}
