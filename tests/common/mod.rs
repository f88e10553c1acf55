use actix_web::{web, App, HttpResponse, Responder};
use mongodb::options::{ClientOptions, ServerAddress};
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use ssrc_api::routes;

/// Test harness exposing the public route tree. Handlers that only read the
/// embedded catalogs are mounted for real, as is the chat endpoint (its
/// validation paths return before any database or AI call); handlers that
/// must reach MongoDB to respond are mocked so tests run without a server.
pub struct TestApp;

/// Connections are lazy in the driver, so building a client against an
/// unreachable address does no I/O until a handler actually queries.
fn offline_client() -> Arc<Client> {
    let options = ClientOptions::builder()
        .hosts(vec![ServerAddress::Tcp {
            host: "localhost".to_string(),
            port: Some(27017),
        }])
        .build();
    Arc::new(Client::with_options(options).expect("Failed to build test client"))
}

impl TestApp {
    pub fn create_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(offline_client()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/fleet", web::get().to(routes::fleet::get_fleet))
                    .route("/routes", web::get().to(mock_routes))
                    .route("/settings/social", web::get().to(mock_empty_object))
                    .route("/settings/tracking", web::get().to(mock_empty_object))
                    .service(
                        web::scope("/bookings")
                            .route("/quote", web::post().to(routes::booking::quote))
                            .route("", web::post().to(mock_booking_created)),
                    )
                    .route("/chat", web::post().to(routes::chat::chat))
                    .service(
                        web::scope("/admin")
                            .route("/login", web::post().to(routes::admin::auth::login))
                            .service(
                                web::scope("")
                                    .wrap(ssrc_api::middleware::auth::AdminAuth)
                                    .route("/bookings", web::get().to(mock_empty_list))
                                    .route("/routes", web::get().to(mock_empty_list))
                                    .route("/settings", web::get().to(mock_empty_object))
                                    .route("/chats", web::get().to(mock_chats)),
                            ),
                    ),
            )
    }
}

async fn mock_routes() -> impl Responder {
    HttpResponse::Ok().json(ssrc_api::data::transfer_routes())
}

async fn mock_empty_list() -> impl Responder {
    HttpResponse::Ok().json(json!([]))
}

async fn mock_empty_object() -> impl Responder {
    HttpResponse::Ok().json(json!({}))
}

async fn mock_booking_created() -> impl Responder {
    HttpResponse::Ok().json(json!({"success": true, "reference_number": "SSRC-20260101-1234"}))
}

async fn mock_chats() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "sessions": [],
        "stats": {"total_today": 0, "total_all": 0, "by_channel": {}}
    }))
}
