//! Registration, login, and logout handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use quill_core::{cleared_cookies, session_cookies, LoginRequest, RegisterRequest, UserResponse};

use super::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login
///
/// Tokens travel only in the cookies, never in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Message>), ApiError> {
    let pair = state.auth.login(request).await?;
    let (access, refresh) = session_cookies(&pair, &state.cookies);
    let jar = jar.add(access).add(refresh);
    Ok((jar, Json(Message { message: "logged in" })))
}

/// POST /auth/logout
///
/// Clears cookies unconditionally; tokens already held by the client remain
/// valid until their embedded expiry, there is no server-side revocation.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Message>) {
    let (access, refresh) = cleared_cookies(&state.cookies);
    let jar = jar.add(access).add(refresh);
    (
        jar,
        Json(Message {
            message: "logged out",
        }),
    )
}
