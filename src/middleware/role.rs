use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::middleware::auth::Claims;
use crate::models::Role;
use crate::services::RoleDirectory;
use crate::utils::{AppError, FORBIDDEN_ROLE_MESSAGE};

/// Lets the request through only when the stored user behind the token
/// holds `role`. Must be wrapped inside [`AuthMiddleware`](super::AuthMiddleware)
/// so the claims are already present.
pub struct RoleGuard {
    role: Role,
}

impl RoleGuard {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn admin() -> Self {
        Self::new(Role::Admin)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RoleGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardService {
            service: Rc::new(service),
            role: self.role,
        }))
    }
}

pub struct RoleGuardService<S> {
    service: Rc<S>,
    role: Role,
}

impl<S, B> Service<ServiceRequest> for RoleGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let role = self.role;

        Box::pin(async move {
            let email = req.extensions().get::<Claims>().map(|c| c.email.clone());
            let directory = req.app_data::<web::Data<dyn RoleDirectory>>().cloned();

            let verdict = match (email, directory) {
                (None, _) => Err(AppError::Unauthorized),
                (_, None) => Err(AppError::ConfigError("role directory is not configured".to_string())),
                (Some(email), Some(directory)) => match directory.has_role(&email, role).await {
                    Ok(true) => Ok(()),
                    Ok(false) => {
                        log::warn!("{} lacks role {} for {}", email, role.as_str(), req.path());
                        Err(AppError::Forbidden(FORBIDDEN_ROLE_MESSAGE))
                    }
                    Err(e) => {
                        log::error!("Role lookup failed for {}: {}", email, e);
                        Err(e)
                    }
                },
            };

            match verdict {
                Ok(()) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => Ok(req.into_response(e.error_response()).map_into_right_body()),
            }
        })
    }
}
