use actix_web::{Responder, get, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_template};
use crate::services::listing::load_home_page;

#[get("/")]
pub async fn show_index(
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = load_home_page(repo.get_ref()).await;

    let mut context = base_context(&server_config, "index");
    context.insert("recent", &data.recent);
    context.insert("error", &data.error);

    render_template(&tera, "main/index.html", &context)
}
