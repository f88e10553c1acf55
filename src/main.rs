use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use ssrc_api::{db, middleware, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .service(
                web::scope("/api")
                    // Public routes
                    .route("/fleet", web::get().to(routes::fleet::get_fleet))
                    .route("/routes", web::get().to(routes::fleet::get_routes))
                    .route(
                        "/settings/social",
                        web::get().to(routes::settings::get_social_links),
                    )
                    .route(
                        "/settings/tracking",
                        web::get().to(routes::settings::get_tracking_settings),
                    )
                    .service(
                        web::scope("/bookings")
                            .route("/quote", web::post().to(routes::booking::quote))
                            .route("", web::post().to(routes::booking::submit_booking)),
                    )
                    .route("/chat", web::post().to(routes::chat::chat))
                    // Admin back office
                    .service(
                        web::scope("/admin")
                            .route("/login", web::post().to(routes::admin::auth::login))
                            .service(
                                web::scope("")
                                    .wrap(middleware::auth::AdminAuth)
                                    .route(
                                        "/bookings",
                                        web::get().to(routes::admin::bookings::list_bookings),
                                    )
                                    .route(
                                        "/bookings",
                                        web::put().to(routes::admin::bookings::update_booking),
                                    )
                                    .route(
                                        "/bookings",
                                        web::delete().to(routes::admin::bookings::delete_booking),
                                    )
                                    .route(
                                        "/routes",
                                        web::get().to(routes::admin::routes::list_routes),
                                    )
                                    .route(
                                        "/routes",
                                        web::post().to(routes::admin::routes::add_route),
                                    )
                                    .route(
                                        "/routes",
                                        web::put().to(routes::admin::routes::update_route),
                                    )
                                    .route(
                                        "/routes",
                                        web::delete().to(routes::admin::routes::delete_route),
                                    )
                                    .route(
                                        "/settings",
                                        web::get().to(routes::admin::settings::get_settings),
                                    )
                                    .route(
                                        "/settings",
                                        web::put().to(routes::admin::settings::update_settings),
                                    )
                                    .route(
                                        "/chats",
                                        web::get().to(routes::admin::chats::list_chat_sessions),
                                    ),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
