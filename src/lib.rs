//! ping-pong: a minimal HTTP service for validating deployment pipelines.
//!
//! Exposes `/`, `/ping`, `/hello`, `/health` and optionally `/iseven`. The
//! binary in `main.rs` wires configuration, logging and the server together;
//! everything a test needs to drive the router lives here.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod payload;
pub mod routes;
pub mod state;
pub mod templates;
pub mod timestamp;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;

/// Build the application router from a resolved configuration.
pub fn build_app(config: AppConfig) -> Result<axum::Router, AppError> {
    let tera = templates::init_templates(&config.service.template_dir)?;
    Ok(create_router(AppState::new(config, tera)))
}
