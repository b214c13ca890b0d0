use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, HttpResponse, test, web};

use pawmart_explorer::models::session::Session;
use pawmart_explorer::repository::HttpRepository;
use pawmart_explorer::routes::account::{show_my_listings, show_my_orders};
use pawmart_explorer::routes::api::api_v1_listings;
use pawmart_explorer::routes::listing::show_listing;
use pawmart_explorer::routes::not_found;

mod common;

async fn whoami(session: Option<Session>) -> HttpResponse {
    match session {
        Some(session) => HttpResponse::Ok().body(session.token().to_string()),
        None => HttpResponse::Unauthorized().finish(),
    }
}

#[actix_web::test]
async fn bearer_header_starts_a_session() {
    let app = test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, "Bearer abc123"))
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"abc123"));

    for header in ["Bearer    ", "Basic abc123"] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, header))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{header}");
    }

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

macro_rules! init_app {
    () => {{
        let config = common::server_config();
        let repo = HttpRepository::new(&config.api_base_url, Duration::from_millis(100))
            .expect("client builds");
        test::init_service(
            App::new()
                .service(web::scope("/api").service(api_v1_listings))
                .service(show_listing)
                .service(show_my_listings)
                .service(show_my_orders)
                .default_service(web::to(not_found))
                .app_data(web::Data::new(common::tera()))
                .app_data(web::Data::new(repo))
                .app_data(web::Data::new(config)),
        )
        .await
    }};
}

#[actix_web::test]
async fn account_pages_require_a_session() {
    let app = init_app!();

    for uri in ["/my-orders", "/my-listings"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");

        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Please login to continue"));
    }
}

#[actix_web::test]
async fn invalid_listing_id_renders_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/supplies/bad%20id")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Listing not found"));
}

#[actix_web::test]
async fn unknown_path_renders_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn api_rejects_invalid_price_without_calling_upstream() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/listings?minPrice=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid price: abc");
}
