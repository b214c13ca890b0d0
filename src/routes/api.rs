use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::explorer::ExplorerForm;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::services::ServiceError;
use crate::services::api::list_listings;

/// Explorer results as JSON, accepting the same query string as `/supplies`.
#[get("/v1/listings")]
pub async fn api_v1_listings(
    req: HttpRequest,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = ExplorerForm::from_query(req.query_string());

    match list_listings(repo.get_ref(), form, server_config.per_page).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to serve listings: {err}");
            HttpResponse::BadGateway().json(json!({ "error": err.to_string() }))
        }
    }
}
