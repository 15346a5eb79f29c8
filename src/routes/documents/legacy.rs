//! Single-document endpoints kept for older clients. Both operate on the
//! caller's most-recently-updated document.

use actix_web::{get, post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::document::{DocumentOut, RDocumentUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[get("")]
async fn fetch_latest(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
) -> ApiResult<DocumentOut> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let doc = db
        .latest_document(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".into()))?;

    Ok(ApiResponse::Ok(DocumentOut::from(doc)))
}

#[post("")]
async fn save_latest(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    body: web::Json<RDocumentUpdate>,
) -> ApiResult<DocumentOut> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let body = body.into_inner();
    let doc = db
        .update_latest_document(user.id, body.title, body.content)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".into()))?;

    Ok(ApiResponse::Ok(DocumentOut::from(doc)))
}
