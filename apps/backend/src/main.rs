use actix_web::{web, App, HttpServer};
use aboutme::config::badges::load_catalog;
use aboutme::config::db::DbProfile;
use aboutme::infra::state::build_state;
use aboutme::middleware::request_trace::RequestTrace;
use aboutme::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - ABOUTME_DB: postgres (default), memory, or sqlite:<path>
    // - ABOUTME_BADGES_FILE: optional JSON badge catalog
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let profile = match DbProfile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            eprintln!("Invalid database configuration: {e}");
            std::process::exit(1);
        }
    };

    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Invalid badge catalog: {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(profile)
        .with_catalog(catalog)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %host, port, "starting aboutme backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
