//! Access control: resolves credentials and bearer tokens to users.

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::password::verify_password;
use crate::utils::token::TokenIssuer;
use entity::user::Model as UserModel;

/// Missing account and wrong password are indistinguishable to the
/// caller; the route maps `None` to one uniform 400.
pub async fn authenticate(
    db: &PostgresService,
    username: &str,
    password: &str,
) -> Result<Option<UserModel>, AppError> {
    let Some(user) = db.find_user_by_username(username).await? else {
        return Ok(None);
    };
    if !verify_password(password, &user.password_hash) {
        return Ok(None);
    }
    Ok(Some(user))
}

/// Verifies the token, then looks the subject up again: a valid token
/// for a user that no longer exists is still unauthorized.
pub async fn resolve_current_user(
    db: &PostgresService,
    issuer: &TokenIssuer,
    token: &str,
) -> Result<UserModel, AppError> {
    let claims = issuer.verify(token)?;
    db.find_user_by_username(&claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)
}
