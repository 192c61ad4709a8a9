use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use domain_account::repository::SessionStore;
use futures::future::LocalBoxFuture;
use uuid::Uuid;

/// The authenticated caller, present in request extensions when the session resolved.
#[derive(Clone, Debug)]
pub struct UserInfo {
    pub user_id: Uuid,
    pub token: String,
}

/// Resolves the session cookie or bearer token of every request into a [`UserInfo`].
///
/// Requests without a valid session pass through untouched; handlers that need a user
/// reject them.
pub struct Authentication {
    session_store: Arc<dyn SessionStore>,
    cookie_name: String,
}

impl Authentication {
    pub fn new(session_store: Arc<dyn SessionStore>, cookie_name: String) -> Self {
        Self {
            session_store,
            cookie_name,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
            session_store: self.session_store.clone(),
            cookie_name: self.cookie_name.clone(),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
    session_store: Arc<dyn SessionStore>,
    cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let session_store = self.session_store.clone();
        let token = extract_token(&req, &self.cookie_name);
        Box::pin(async move {
            let Some(token) = token else {
                tracing::trace!("No session token.");
                return service.call(req).await;
            };
            match session_store.resolve(&token).await {
                Ok(Some(user_id)) => {
                    req.extensions_mut().insert(UserInfo { user_id, token });
                }
                Ok(None) => tracing::debug!("Unknown or expired session token."),
                Err(e) => tracing::warn!("Cannot resolve session: {e}"),
            }
            service.call(req).await
        })
    }
}

/// The session cookie wins over an `Authorization: Bearer` header.
fn extract_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = req.cookie(cookie_name) {
        return Some(cookie.value().to_string());
    }
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.split_once(' ')?;
    (scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty())
        .then(|| token.trim().to_string())
}
