use actix_web::{post, web};
use std::sync::Arc;

use crate::auth;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RLogin, TokenOut};
use crate::utils::token::TokenIssuer;

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    form: web::Form<RLogin>,
) -> ApiResult<TokenOut> {
    let user = auth::authenticate(&db, &form.username, &form.password)
        .await?
        .ok_or(AppError::BadCredentials)?;

    let access_token = issuer.issue(&user.username)?;

    Ok(ApiResponse::Ok(TokenOut {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
