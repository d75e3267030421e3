use actix_web::web;

pub mod health;
pub mod progress;

/// Register every route. `main.rs` and the route tests share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Progression: /api/games/**
    cfg.service(web::scope("/api/games").configure(progress::configure_routes));
}
