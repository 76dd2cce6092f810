mod config;
mod context;
mod error;
mod inference;
mod routes;
mod tables;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use config::Config;
use context::AppContext;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let config = Config::from_env();
    log::info!("Loading model artifacts:");
    log::info!("  crop:    {}", config.crop_model_path.display());
    log::info!("  disease: {}", config.disease_model_path.display());
    log::info!("  soil:    {}", config.soil_model_path.display());
    log::info!("  table:   {}", config.fertilizer_table_path.display());

    let context = match AppContext::load(&config) {
        Ok(context) => web::Data::new(context),
        Err(e) => {
            log::error!("Failed to load models at startup: {e}");
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Model loading failed: {e}"),
            ));
        }
    };

    log::info!("Starting server on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(context.clone())
            .configure(configure_routes)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
