use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Deserialize;
use serde_json::json;

use crate::middleware::auth::{Claims, ADMIN_TOKEN_COOKIE};

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub password: String,
}

fn generate_token() -> Result<String, jsonwebtoken::errors::Error> {
    let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    let now = Utc::now();

    let claims = Claims {
        sub: "admin".to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_ref()))
}

/// Single-operator login: one shared password from the environment, a signed
/// 24h token in an http-only cookie on success.
pub async fn login(input: web::Json<LoginInput>) -> impl Responder {
    let expected = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => password,
        _ => {
            eprintln!("ADMIN_PASSWORD is not configured; admin login disabled");
            return HttpResponse::InternalServerError().body("Admin login not configured");
        }
    };

    if input.password != expected {
        return HttpResponse::Unauthorized().json(json!({ "success": false }));
    }

    match generate_token() {
        Ok(token) => {
            let cookie = Cookie::build(ADMIN_TOKEN_COOKIE, token.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(CookieDuration::hours(TOKEN_TTL_HOURS))
                .finish();

            HttpResponse::Ok()
                .cookie(cookie)
                .json(json!({ "success": true, "token": token }))
        }
        Err(err) => {
            eprintln!("Failed to sign admin token: {:?}", err);
            HttpResponse::InternalServerError().body("Token generation failed")
        }
    }
}
