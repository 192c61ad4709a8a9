use std::sync::Arc;

use actix_web::{
    cookie::{time::Duration, Cookie, SameSite},
    get, post, web, HttpResponse,
};
use domain_account::{
    model::vo::{Credentials, Registration, Session},
    service::AccountService,
};

use super::{
    dtos::{AuthResponse, MessageResponse},
    error::ApiResult,
};
use crate::infrastructure::{
    config::SessionConfig, service_provider::IServiceProvider, ServiceProviderScoped,
};

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(config.ttl_secs))
        .finish()
}

fn expired_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

fn logged_in(
    mut response: actix_web::HttpResponseBuilder,
    config: &SessionConfig,
    session: Session,
    message: &'static str,
) -> HttpResponse {
    response.cookie(session_cookie(config, session.token)).json(AuthResponse {
        user: session.user,
        message,
    })
}

#[post("auth/register")]
pub async fn register(
    sp: ServiceProviderScoped,
    registration: web::Json<Registration>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AccountService> = sp.provide();
    let session = service.register(registration.into_inner()).await?;
    tracing::info!("User {} registered.", session.user.id);
    Ok(logged_in(
        HttpResponse::Created(),
        &sp.config().session,
        session,
        "User registered successfully",
    ))
}

#[post("auth/login")]
pub async fn login(
    sp: ServiceProviderScoped,
    credentials: web::Json<Credentials>,
) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AccountService> = sp.provide();
    let session = service.login(credentials.into_inner()).await?;
    Ok(logged_in(HttpResponse::Ok(), &sp.config().session, session, "Login successful"))
}

#[post("auth/logout")]
pub async fn logout(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    if let Some(user) = sp.user() {
        let service: Arc<dyn AccountService> = sp.provide();
        service.logout(&user.token).await?;
    }
    Ok(HttpResponse::Ok()
        .cookie(expired_cookie(&sp.config().session))
        .json(MessageResponse {
            message: "Logout successful",
        }))
}

#[get("auth/user")]
pub async fn current_user(sp: ServiceProviderScoped) -> ApiResult<HttpResponse> {
    let service: Arc<dyn AccountService> = sp.provide();
    Ok(HttpResponse::Ok().json(service.current_user().await?))
}
