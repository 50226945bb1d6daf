use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::config::AppConfig;
use crate::services::auth_service::{bearer_token, verify_token};
use crate::utils::AppError;

pub use crate::services::auth_service::Claims;

/// Requires a valid `Authorization: Bearer <jwt>` header and stores the
/// decoded [`Claims`] in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let secret = req
            .app_data::<web::Data<AppConfig>>()
            .map(|config| config.access_token_secret.clone());
        let secret = match secret {
            Some(secret) => secret,
            None => {
                log::error!("AuthMiddleware mounted without AppConfig app data");
                let res = AppError::ConfigError("auth is not configured".to_string()).error_response();
                return Box::pin(ready(Ok(req.into_response(res).map_into_right_body())));
            }
        };

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_string);

        let claims = match token {
            Some(token) => verify_token(&token, &secret),
            None => Err(AppError::Unauthorized),
        };

        match claims {
            Ok(claims) => {
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(e) => {
                log::warn!("{} {} rejected: {}", req.method(), req.path(), e);
                let res = req.into_response(e.error_response()).map_into_right_body();
                Box::pin(ready(Ok(res)))
            }
        }
    }
}
