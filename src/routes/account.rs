use actix_web::{Responder, get, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::models::session::Session;
use crate::repository::HttpRepository;
use crate::routes::{base_context, render_service_error, render_template};
use crate::services::account::{load_my_listings, load_my_orders};

#[get("/my-listings")]
pub async fn show_my_listings(
    session: Option<Session>,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match load_my_listings(repo.get_ref(), session.as_ref()).await {
        Ok(data) => data,
        Err(err) => return render_service_error(&tera, &server_config, &err),
    };

    let mut context = base_context(&server_config, "my_listings");
    context.insert("listings", &data.listings);

    render_template(&tera, "account/listings.html", &context)
}

#[get("/my-orders")]
pub async fn show_my_orders(
    session: Option<Session>,
    repo: web::Data<HttpRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match load_my_orders(repo.get_ref(), session.as_ref()).await {
        Ok(data) => data,
        Err(err) => return render_service_error(&tera, &server_config, &err),
    };

    let mut context = base_context(&server_config, "my_orders");
    context.insert("orders", &data.orders);
    context.insert("summary", &data.summary);
    context.insert("total_spent", &data.total_spent);

    render_template(&tera, "account/orders.html", &context)
}
