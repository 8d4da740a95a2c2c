use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::change_password::change_password;
use super::handlers::create_employee::create_employee;
use super::handlers::delete_employee::delete_employee;
use super::handlers::get_employee::get_employee;
use super::handlers::health::health;
use super::handlers::health::welcome;
use super::handlers::list_employees::list_employees;
use super::handlers::login::login;
use super::handlers::update_employee::update_employee;
use super::middleware::authenticate as auth_middleware;
use crate::domain::admin::ports::AdminServicePort;
use crate::domain::employee::ports::EmployeeServicePort;

#[derive(Clone)]
pub struct AppState {
    pub admin_service: Arc<dyn AdminServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub authenticator: Arc<Authenticator>,
}

/// Build the HTTP application.
///
/// Reads and login are public; employee mutations and password change go
/// through the auth gate.
pub fn create_router(
    admin_service: Arc<dyn AdminServicePort>,
    employee_service: Arc<dyn EmployeeServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        admin_service,
        employee_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/employees", get(list_employees))
        .route("/api/employees/:employee_id", get(get_employee));

    let protected_routes = Router::new()
        .route("/api/auth/password", put(change_password))
        .route("/api/employees", post(create_employee))
        .route("/api/employees/:employee_id", put(update_employee))
        .route("/api/employees/:employee_id", delete(delete_employee))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
