use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // always "admin"; single-operator back office
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string())
}

/// Guards the admin back office. The login route issues a short-lived signed
/// token; every admin request revalidates it from the `admin_token` cookie
/// (or a Bearer header for non-browser clients). There is no session store.
pub struct AdminAuth;

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AdminAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthService { service }))
    }
}

pub struct AdminAuthService<S> {
    service: S,
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ADMIN_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    let auth_header = req.headers().get("Authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ").map(|t| t.to_string())
}

impl<S, B> Service<ServiceRequest> for AdminAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match extract_token(&req) {
            Some(token) => token,
            None => return Box::pin(ready(Err(ErrorUnauthorized("No admin token")))),
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        match decode::<Claims>(
            &token,
            &DecodingKey::from_secret(jwt_secret().as_bytes()),
            &validation,
        ) {
            Ok(token_data) => {
                req.extensions_mut().insert(token_data.claims);
                Box::pin(self.service.call(req))
            }
            Err(err) => {
                println!("Error decoding admin token: {:?}", err);
                Box::pin(ready(Err(ErrorUnauthorized("Invalid token"))))
            }
        }
    }
}
