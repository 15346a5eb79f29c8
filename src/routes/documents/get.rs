use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::document::DocumentOut;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[get("/{id}")]
async fn get(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    path: web::Path<i32>,
) -> ApiResult<DocumentOut> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let doc = db
        .get_document(user.id, path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".into()))?;

    Ok(ApiResponse::Ok(DocumentOut::from(doc)))
}
