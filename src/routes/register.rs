use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserRegister, UserOut};
use crate::utils::password::hash_password;

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserOut> {
    let hash = hash_password(&body.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db.create_user(&body.username, &hash).await?;

    Ok(ApiResponse::Ok(UserOut {
        id: user.id,
        username: user.username,
    }))
}
