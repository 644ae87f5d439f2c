use crate::configuration::Settings;
use crate::db::ProductStore;
use crate::helpers::JsonResponse;
use crate::middleware;
use crate::routes;
use crate::services::ProductService;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ProductStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let product_service = ProductService::new(store)
        .with_name_length_check(settings.validation.enforce_name_length);
    let product_service = web::Data::new(product_service);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected JSON body: {}", err);
        JsonResponse::<()>::build().bad_request(format!("Invalid request body: {}", err))
    });

    let server = HttpServer::new(move || {
        // FormConfig is not Send, so it is built per worker
        let form_config = web::FormConfig::default().error_handler(|err, _req| {
            tracing::debug!("Rejected form body: {}", err);
            JsonResponse::<()>::build().bad_request(format!("Invalid request body: {}", err))
        });

        App::new()
            .wrap(middleware::error_handlers())
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/products")
                    .service(routes::product::add::item)
                    .service(routes::product::get::list)
                    .service(routes::product::get::item)
                    .service(routes::product::update::item)
                    .service(routes::product::delete::item),
            )
            .app_data(json_config.clone())
            .app_data(form_config)
            .app_data(product_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
