use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        password::{hash_password, verify_password},
        session::{session_cookie, session_token},
    },
    error::ApiError,
    state::AppState,
    users::{
        dto::{CreateUserRequest, LoginRequest, PublicUser},
        repo::User,
    },
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = User::list_all(&state.db).await.map_err(|e| {
        error!(error = %e, "list users failed");
        ApiError::Persistence("Usuários não encontrados".into())
    })?;

    let users = users
        .into_iter()
        .map(|u| PublicUser {
            id: u.id,
            name: u.name,
            email: u.email,
        })
        .collect();
    Ok(Json(users))
}

#[instrument(skip(state, jar, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(CookieJar, StatusCode), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Email inválido".into()));
    }
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Nome inválido".into()));
    }
    if payload.password.is_empty() {
        return Err(ApiError::Validation("Senha inválida".into()));
    }

    // Reuse the browser's existing session token so a user created from an
    // already-cookied client keeps that session.
    let (session_id, issued) = match session_token(&jar) {
        Some(token) => (token, false),
        None => (Uuid::new_v4(), true),
    };

    let hash = hash_password(&payload.password)?;

    let user = User::create(
        &state.db,
        Uuid::new_v4(),
        payload.name.trim(),
        &payload.email,
        &hash,
        session_id,
    )
    .await
    .map_err(|e| {
        error!(error = %e, "create user failed");
        ApiError::Persistence("Erro ao criar usuário".into())
    })?;

    info!(user_id = %user.id, email = %user.email, "user created");

    let jar = if issued {
        jar.add(session_cookie(session_id, &state.config.session))
    } else {
        jar
    };
    Ok((jar, StatusCode::CREATED))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = User::delete(&state.db, id).await.map_err(|e| {
        error!(error = %e, %id, "delete user failed");
        ApiError::Persistence("Erro ao deletar usuário".into())
    })?;

    if removed == 0 {
        warn!(%id, "delete user matched no rows");
        return Err(ApiError::Persistence("Erro ao deletar usuário".into()));
    }

    info!(%id, "user deleted");
    Ok(StatusCode::OK)
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mut payload): Json<LoginRequest>,
) -> Result<(CookieJar, &'static str), ApiError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation("Email e/ou senha inválidos".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::NotFound("Usuário não encontrado".into())
        })?;

    let ok = verify_password(&payload.password, &user.password_hash)?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::NotFound("Usuário não encontrado".into()));
    }

    // Re-issue the stored session token; rows predating a session get one now.
    let session_id = match user.session_id {
        Some(token) => token,
        None => {
            let token = Uuid::new_v4();
            User::set_session(&state.db, user.id, token).await?;
            token
        }
    };

    info!(user_id = %user.id, "user logged in");
    Ok((
        jar.add(session_cookie(session_id, &state.config.session)),
        "login realizado com sucesso",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("maria@example.com"));
        assert!(is_valid_email("a.b-c@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }
}
