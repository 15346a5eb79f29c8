use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[delete("/{id}")]
async fn delete(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    path: web::Path<i32>,
) -> ApiResult<Response> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    if !db.delete_document(user.id, path.into_inner()).await? {
        return Err(AppError::NotFound("Document not found".into()));
    }

    Ok(ApiResponse::Ok(Response {
        message: "Document deleted".to_string(),
    }))
}
