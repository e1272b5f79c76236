//! Auth Commands
//!
//! Frontend bindings for sign-in, registration and sign-out.

use serde::{Deserialize, Serialize};

use super::{call, call_unit};
use crate::auth::{LoginInput, RegisterInput};
use crate::error::{AppError, AppResult};
use crate::models::User;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CredentialsArgs<'a> {
    provider: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    input: &'a RegisterInput,
}

#[derive(Serialize)]
struct SignOutArgs<'a> {
    #[serde(rename = "redirectTo")]
    redirect_to: &'a str,
}

/// Reply of `sign_in`: either a user or an error code
#[derive(Debug, Deserialize)]
struct SignInReply {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    error: Option<String>,
}

/// Backend message for an email that is already registered
const USER_EXISTS: &str = "User already exists";

// ========================
// Commands
// ========================

/// Sign in with email and password.
///
/// A rejected credential check is `InvalidCredentials`; any other failure
/// of the call reads as "Invalid credentials".
pub async fn login(input: &LoginInput) -> AppResult<User> {
    let args = CredentialsArgs {
        provider: "credentials",
        email: &input.email,
        password: &input.password,
    };
    let reply: SignInReply = call("sign_in", &args)
        .await
        .map_err(|_| AppError::Bridge("Invalid credentials".to_string()))?;

    match reply {
        SignInReply { error: Some(code), .. } => {
            tracing::info!(%code, "sign in refused");
            Err(AppError::InvalidCredentials)
        }
        SignInReply { user: Some(user), .. } => {
            tracing::info!(user = %user.id, "signed in");
            Ok(user)
        }
        SignInReply { user: None, error: None } => Err(AppError::InvalidCredentials),
    }
}

/// Validate and register a new account
pub async fn register(input: &RegisterInput) -> AppResult<()> {
    let input = input.validate()?;
    call_unit("register", &RegisterArgs { input: &input })
        .await
        .map_err(|err| match err {
            AppError::Bridge(message) if message == USER_EXISTS => AppError::UserExists,
            other => other,
        })?;
    tracing::info!(email = %input.email, "user created");
    Ok(())
}

pub async fn sign_out() -> AppResult<()> {
    call_unit("sign_out", &SignOutArgs { redirect_to: "/login" }).await
}
