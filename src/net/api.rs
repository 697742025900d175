//! REST helpers for communicating with the Reckon backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade to the signed-out state without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the currently authenticated user from `/api/v1/users/me`.
/// Returns `None` when no token is stored, the token is rejected, or on
/// the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::util::token::read()?;
        let resp = gloo_net::http::Request::get("/api/v1/users/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            // Stale token; drop it so the next load skips the round trip.
            crate::util::token::clear();
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/v1/auth/login`, persist the bearer token, and
/// fetch the signed-in user record.
///
/// # Errors
///
/// Returns an error string if the login request is rejected or the
/// follow-up profile fetch fails.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::Token;

        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let resp = gloo_net::http::Request::post("/api/v1/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("login failed: {}", resp.status()));
        }
        let token: Token = resp.json().await.map_err(|e| e.to_string())?;
        crate::util::token::store(&token.access_token);

        fetch_current_user()
            .await
            .ok_or_else(|| "signed in but profile fetch failed".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/v1/auth/register`.
///
/// The backend returns the new user record; the caller still signs in
/// through [`login`] afterwards.
///
/// # Errors
///
/// Returns an error string if the registration request is rejected.
pub async fn register(
    email: &str,
    password: &str,
    full_name: Option<&str>,
) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            password: &'a str,
            full_name: Option<&'a str>,
        }

        let resp = gloo_net::http::Request::post("/api/v1/auth/register")
            .json(&RegisterRequest {
                email,
                password,
                full_name,
            })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("registration failed: {}", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err("not available on server".to_owned())
    }
}

/// Sign out by discarding the stored bearer token.
///
/// Tokens are stateless, so there is no revocation call; the caller clears
/// the session state itself.
pub fn logout() {
    #[cfg(feature = "hydrate")]
    {
        crate::util::token::clear();
    }
}
