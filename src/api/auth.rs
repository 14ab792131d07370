//! Authentication endpoints
//!
//! Login validates the form before touching the auth backend and answers
//! with per-field errors on a 400. OAuth2 initiation stashes the PKCE
//! state in cookies and hands the browser to the provider.

use axum::{
    Form, Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::LoginForm;

/// Lifetime of the PKCE state cookies
const OAUTH_COOKIE_MAX_AGE_SECS: i64 = 3600;

/// Lifetime of the post-login return path cookie
const PATH_COOKIE_MAX_AGE_SECS: i64 = 60;

/// POST /auth/login
///
/// A valid login answers 301 to the site root. Validation failures answer
/// 400 with the submitted email echoed back so the form can re-render.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    if let Some(errors) = form.field_errors() {
        let body = json!({
            "data": { "email": form.email },
            "errors": errors,
        });
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    let session = state
        .auth
        .auth_with_password(&form.email, &form.password)
        .await?;

    info!(user = ?session.record.get("id"), "Login succeeded");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")]).into_response())
}

/// OAuth2 initiation form
#[derive(Debug, Deserialize)]
pub struct OAuthForm {
    pub provider: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// POST /auth/oauth2
///
/// Looks the provider up in the backend's auth methods, stores its PKCE
/// state in cookies and redirects (302) to the provider's consent page.
pub async fn oauth2(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<OAuthForm>,
) -> Result<Response, ApiError> {
    let methods = state.auth.list_auth_methods().await?;

    let provider = methods.find_provider(&form.provider).ok_or_else(|| {
        ApiError::bad_request(format!("Unknown OAuth2 provider: {}", form.provider))
    })?;

    let redirect_uri = format!("{}/oauth", state.origin);
    let auth_url = format!("{}{}", provider.auth_url, redirect_uri);

    info!(provider = %provider.name, "Starting OAuth2 flow");

    let jar = jar
        .add(oauth_cookie(
            "state",
            provider.state.clone(),
            OAUTH_COOKIE_MAX_AGE_SECS,
        ))
        .add(oauth_cookie(
            "verifier",
            provider.code_verifier.clone(),
            OAUTH_COOKIE_MAX_AGE_SECS,
        ))
        .add(oauth_cookie(
            "provider",
            provider.name.clone(),
            OAUTH_COOKIE_MAX_AGE_SECS,
        ))
        .add(oauth_cookie(
            "path",
            form.path.unwrap_or_else(|| "/".to_string()),
            PATH_COOKIE_MAX_AGE_SECS,
        ));

    Ok((StatusCode::FOUND, jar, [(header::LOCATION, auth_url)]).into_response())
}

fn oauth_cookie(name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}
