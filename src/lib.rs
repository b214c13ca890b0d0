#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::HttpRepository;
#[cfg(feature = "server")]
use crate::routes::{
    account::{show_my_listings, show_my_orders},
    api::api_v1_listings,
    explorer::{show_category, show_supplies},
    listing::show_listing,
    main::show_index,
};

pub mod debounce;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod explorer;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

#[cfg(feature = "server")]
/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = HttpRepository::new(
        &server_config.api_base_url,
        Duration::from_millis(server_config.request_timeout_ms),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build Listings API client: {e}")))?;

    log::info!("Using Listings API at {}", repo.base_url());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_listings))
            .service(show_index)
            .service(show_supplies)
            .service(show_listing)
            .service(show_category)
            .service(show_my_listings)
            .service(show_my_orders)
            .default_service(web::to(routes::not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
