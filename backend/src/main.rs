mod config;
mod model;
mod routes;
mod state;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::DashboardConfig;
use model::artifacts::ModelArtifacts;
use routes::configure_routes;
use state::AppState;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = DashboardConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration failed: {}", e))
    })?;

    let artifact_paths = config.artifact_paths();
    let artifacts = match ModelArtifacts::load(&artifact_paths) {
        Ok(Some(artifacts)) => Some(artifacts),
        Ok(None) => {
            log::warn!("Model artifacts missing; serving the dashboard with prediction disabled");
            None
        }
        Err(e) => {
            log::error!("Failed to load model artifacts: {}", e);
            return Err(std::io::Error::other(format!("Model loading failed: {}", e)));
        }
    };

    let state = web::Data::new(AppState::new(artifacts, &artifact_paths));
    let frontend_dir = config.frontend_dir();
    let bind_address = config.bind_address();

    log::info!("Serving frontend from {}", frontend_dir.display());
    log::info!("Starting server on {}", bind_address);

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
            .app_data(state.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
