use crate::configuration::Settings;
use crate::errors::ApiError;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Malformed JSON body at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            other => format!("Malformed JSON body: {}", other),
        };
        ApiError::InvalidArgument(msg).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::InvalidArgument(format!("Invalid query string: {}", err)).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                // Fixed paths go first so `/{id}` does not swallow them.
                web::scope("/api/v1/products")
                    .service(routes::product::stats::summary)
                    .service(routes::product::get::search)
                    .service(routes::product::get::by_price_range)
                    .service(routes::product::get::by_category)
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::add::item)
                    .service(routes::product::update::item)
                    .service(routes::product::update::deactivate)
                    .service(routes::product::delete::item),
            )
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
