use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use tracing::warn;
use uuid::Uuid;

use crate::{config::SessionConfig, error::ApiError, state::AppState, users::repo::User};

pub const SESSION_COOKIE_NAME: &str = "sessionId";

/// Builds the `sessionId` cookie carrying an opaque session token.
pub fn session_cookie(token: Uuid, session: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(session.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(session.ttl_days))
        .build()
}

/// Reads the session token from a request's cookies, if present and well-formed.
pub fn session_token(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE_NAME)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Extracts the user owning the request's session cookie.
///
/// Rejects with 401 before any handler logic runs when the cookie is absent,
/// malformed, or does not resolve to a stored user.
pub struct SessionUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(ApiError::Unauthorized)?;

        let user = User::find_by_session(&state.db, token)
            .await
            .map_err(|e| {
                warn!(error = %e, "session lookup failed");
                ApiError::Unauthorized
            })?
            .ok_or(ApiError::Unauthorized)?;

        Ok(SessionUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            ttl_days: 7,
            cookie_secure: false,
        }
    }

    #[test]
    fn session_cookie_shape() {
        let token = Uuid::new_v4();
        let cookie = session_cookie(token, &test_config());

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn secure_flag_follows_config() {
        let config = SessionConfig {
            ttl_days: 7,
            cookie_secure: true,
        };
        let cookie = session_cookie(Uuid::new_v4(), &config);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn session_token_parses_valid_uuid() {
        let token = Uuid::new_v4();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, token.to_string()));
        assert_eq!(session_token(&jar), Some(token));
    }

    #[test]
    fn session_token_rejects_garbage() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE_NAME, "not-a-uuid"));
        assert_eq!(session_token(&jar), None);
    }

    #[test]
    fn session_token_absent_cookie() {
        assert_eq!(session_token(&CookieJar::new()), None);
    }
}
