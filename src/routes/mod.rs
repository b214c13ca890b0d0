//! HTTP handlers and the helpers they share.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use tera::{Context, Tera};

use crate::dto::explorer::category_options;
use crate::models::config::ServerConfig;
use crate::models::session::Session;
use crate::services::ServiceError;

pub mod account;
pub mod api;
pub mod explorer;
pub mod listing;
pub mod main;

/// Renders `template` with a `200 OK` status.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, StatusCode::OK, template, context)
}

pub fn render_with_status(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    context: &Context,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: navigation and the search debounce delay.
pub fn base_context(server_config: &ServerConfig, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context.insert("nav_categories", &category_options(None)[1..]);
    context.insert("debounce_ms", &server_config.debounce_ms);
    context
}

/// Page shown for unknown paths and missing listings.
pub fn render_not_found(tera: &Tera, server_config: &ServerConfig, message: &str) -> HttpResponse {
    let mut context = base_context(server_config, "not_found");
    context.insert("message", message);
    render_with_status(tera, StatusCode::NOT_FOUND, "errors/not_found.html", &context)
}

/// Error page for a failed service call.
pub fn render_service_error(
    tera: &Tera,
    server_config: &ServerConfig,
    err: &ServiceError,
) -> HttpResponse {
    let status = match err {
        ServiceError::NotFound(message) => {
            return render_not_found(tera, server_config, message);
        }
        ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
        ServiceError::Api(_) => StatusCode::BAD_GATEWAY,
    };
    let message = match err {
        ServiceError::Unauthorized => "Please login to continue".to_string(),
        other => other.to_string(),
    };

    let mut context = base_context(server_config, "error");
    context.insert("status", &status.as_u16());
    context.insert("message", &message);
    render_with_status(tera, status, "errors/error.html", &context)
}

pub async fn not_found(
    tera: web::Data<Tera>,
    server_config: web::Data<ServerConfig>,
) -> HttpResponse {
    render_not_found(&tera, &server_config, "Page not found")
}

/// Reads the bearer token from the `Authorization` header.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = bearer_token(req).and_then(|token| Session::start(token).ok());
        ready(session.ok_or_else(|| ErrorUnauthorized("Please login to continue")))
    }
}
