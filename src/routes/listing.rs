use actix_web::{Responder, get, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_service_error, render_template};
use crate::services::listing::load_listing;

#[get("/supplies/{listing_id}")]
pub async fn show_listing(
    listing_id: web::Path<String>,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let listing = match load_listing(repo.get_ref(), &listing_id).await {
        Ok(listing) => listing,
        Err(err) => return render_service_error(&tera, &server_config, &err),
    };

    let mut context = base_context(&server_config, "supplies");
    context.insert("listing", &listing);

    render_template(&tera, "listing/show.html", &context)
}
