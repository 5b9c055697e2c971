//! HTTP handlers for the credential endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;

use super::dto::{
    EmailRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest, RegisteredResponse,
    ResetPasswordRequest, SessionUserResponse, SignedInResponse, TokenRequest,
    UpdateCompanyRequest, VerifyOtpRequest,
};
use crate::adapters::http::error::{ApiError, ApiJson, ApiSuccess};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::{AppState, HttpSettings};
use crate::application::handlers::{
    ForgotPasswordCommand, LoginCommand, RegisterCommand, ResendOtpCommand, ResetPasswordCommand,
    SignedIn, UpdateCompanyCommand, ValidateResetTokenQuery, VerifyOtpCommand,
};
use crate::domain::foundation::UserId;

fn session_cookie(settings: &HttpSettings, token: String) -> Cookie<'static> {
    Cookie::build((settings.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(settings.secure_cookies)
        .same_site(SameSite::Lax)
        .build()
}

fn signed_in_response(
    state: &AppState,
    jar: CookieJar,
    message: &str,
    signed_in: SignedIn,
) -> (CookieJar, ApiSuccess<SignedInResponse>) {
    let jar = jar.add(session_cookie(&state.settings, signed_in.session.token.clone()));
    (jar, ApiSuccess::ok(message, SignedInResponse::from(signed_in)))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .register_handler()
        .handle(RegisterCommand {
            fullname: req.fullname,
            email: req.email,
            phone: req.phone,
            password: req.password,
        })
        .await?;

    Ok(ApiSuccess::created(
        "Registration successful, please check your email for the OTP",
        RegisteredResponse {
            user_id: result.user_id,
            email: result.email,
        },
    ))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<VerifyOtpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let signed_in = state
        .verify_otp_handler()
        .handle(VerifyOtpCommand {
            email: req.email,
            otp: req.otp,
        })
        .await?;
    Ok(signed_in_response(&state, jar, "Email verified", signed_in))
}

/// POST /api/auth/resend-otp
pub async fn resend_otp(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<EmailRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .resend_otp_handler()
        .handle(ResendOtpCommand { email: req.email })
        .await?;
    Ok(ApiSuccess::message("OTP sent"))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let signed_in = state
        .login_handler()
        .handle(LoginCommand {
            email: req.email,
            password: req.password,
        })
        .await?;
    Ok(signed_in_response(&state, jar, "Login successful", signed_in))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let removal = Cookie::build((state.settings.cookie_name.clone(), "")).path("/");
    (jar.remove(removal), ApiSuccess::message("Logged out"))
}

/// GET /api/auth/session
pub async fn session(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    ApiSuccess::ok("Active session", SessionUserResponse::from(user))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .forgot_password_handler()
        .handle(ForgotPasswordCommand {
            email_or_name: req.email_or_name,
        })
        .await?;
    Ok(ApiSuccess::message("Password reset link sent"))
}

/// POST /api/auth/validate-reset-token
pub async fn validate_reset_token(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .validate_reset_token_handler()
        .handle(ValidateResetTokenQuery { token: req.token })
        .await?;
    Ok(ApiSuccess::message("Token is valid"))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reset_password_handler()
        .handle(ResetPasswordCommand {
            token: req.token,
            password: req.password,
        })
        .await?;
    Ok(ApiSuccess::message("Password has been reset"))
}

/// POST /api/user/update-company
///
/// `userId` defaults to the caller.
pub async fn update_company(
    State(state): State<AppState>,
    RequireAuth(caller): RequireAuth,
    jar: CookieJar,
    ApiJson(req): ApiJson<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = match req.user_id.as_deref().map(str::trim) {
        None | Some("") => caller.id,
        Some(raw) => UserId::parse(raw)?,
    };

    let signed_in = state
        .update_company_handler()
        .handle(
            &caller,
            UpdateCompanyCommand {
                user_id,
                company: req.company_data,
            },
        )
        .await?;

    let (jar, body) = signed_in_response(&state, jar, "Company data updated", signed_in);
    Ok((StatusCode::OK, jar, body))
}
