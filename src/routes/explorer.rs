use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::dto::explorer::SuppliesPageData;
use crate::forms::explorer::ExplorerForm;
use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_service_error, render_with_status};
use crate::services::ServiceError;
use crate::services::supplies::load_supplies_page;

#[get("/supplies")]
pub async fn show_supplies(
    req: HttpRequest,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_explorer(&req, None, &repo, &server_config, &tera).await
}

#[get("/category-filtered-product/{category}")]
pub async fn show_category(
    req: HttpRequest,
    category: web::Path<String>,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_explorer(&req, Some(category.as_str()), &repo, &server_config, &tera).await
}

async fn render_explorer(
    req: &HttpRequest,
    route_category: Option<&str>,
    repo: &HttpRepository,
    server_config: &ServerConfig,
    tera: &Tera,
) -> HttpResponse {
    let form = ExplorerForm::from_query(req.query_string());
    let base_path = req.path();
    let per_page = server_config.per_page;

    let (status, page) =
        match load_supplies_page(repo, form, route_category, base_path, per_page).await {
            Ok(page) => (StatusCode::OK, page),
            // Invalid filters: show the unfiltered explorer with the reason.
            Err(ServiceError::Form(message)) => {
                match load_supplies_page(
                    repo,
                    ExplorerForm::default(),
                    route_category,
                    base_path,
                    per_page,
                )
                .await
                {
                    Ok(mut page) => {
                        page.error = Some(message);
                        (StatusCode::BAD_REQUEST, page)
                    }
                    Err(err) => return render_service_error(tera, server_config, &err),
                }
            }
            Err(err) => return render_service_error(tera, server_config, &err),
        };

    render_page(tera, server_config, status, &page)
}

fn render_page(
    tera: &Tera,
    server_config: &ServerConfig,
    status: StatusCode,
    page: &SuppliesPageData,
) -> HttpResponse {
    let mut context = base_context(server_config, "supplies");
    context.insert("page", page);
    render_with_status(tera, status, "supplies/index.html", &context)
}
