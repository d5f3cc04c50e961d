use actix_web::middleware::TrailingSlash;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use catalog_api::config::AppConfig;
use catalog_api::endpoints;
use catalog_api::services::catalog_service::CatalogService;
use catalog_api::services::create_mediator_service;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()?;
    let catalog = CatalogService::shared();
    let mediator = create_mediator_service(&catalog);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Always))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .configure(endpoints::products::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    // On server start
    let (result, _) = tokio::join!(server, on_server_start(&config));
    result?;

    Ok(())
}

async fn on_server_start(config: &AppConfig) {
    log::info!("Server is running on {}:{}", config.host, config.port);
}
