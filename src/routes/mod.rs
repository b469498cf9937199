//! HTTP route handlers and router construction.
//!
//! Routes are declared in an explicit `(method, path, handler)` table built once
//! at startup and folded into the axum router. Unmatched paths and methods get
//! JSON error bodies instead of axum's empty defaults.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod hello;
pub mod home;
pub mod iseven;
pub mod ping;

use axum::{
    http::Method,
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use serde::{Deserialize, Serialize};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{AppConfig, CACHE_CONTROL_NO_STORE};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// `{"message": "..."}` body shared by ping and hello
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One row of the routing table.
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

impl RouteEntry {
    fn new(method: Method, path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self {
            method,
            path,
            handler,
        }
    }
}

/// Build the routing table for the given configuration.
pub fn route_table(config: &AppConfig) -> Vec<RouteEntry> {
    let mut table = vec![
        RouteEntry::new(Method::GET, "/", get(home::index)),
        RouteEntry::new(Method::GET, "/ping", get(ping::ping)),
        RouteEntry::new(Method::POST, "/hello", post(hello::hello)),
        RouteEntry::new(Method::GET, "/health", get(health::health)),
    ];

    if config.service.enable_iseven {
        table.push(RouteEntry::new(Method::POST, "/iseven", post(iseven::iseven)));
    }

    table
}

/// Creates the Axum router with all routes, fallbacks and response headers.
pub fn create_router(state: AppState) -> Router {
    let router = route_table(&state.config)
        .into_iter()
        .fold(Router::new(), |router, entry| {
            tracing::debug!(method = %entry.method, path = entry.path, "Registering route");
            router.route(entry.path, entry.handler)
        });

    router
        .fallback(not_found)
        // Must follow route registration: only applies to routes already present
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        // Timestamps change on every call and probes must always hit the service
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
