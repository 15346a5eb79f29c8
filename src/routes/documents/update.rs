use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::document::{DocumentOut, RDocumentUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[put("/{id}")]
async fn update(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    path: web::Path<i32>,
    body: web::Json<RDocumentUpdate>,
) -> ApiResult<DocumentOut> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let body = body.into_inner();
    let doc = db
        .update_document(user.id, path.into_inner(), body.title, body.content)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".into()))?;

    Ok(ApiResponse::Ok(DocumentOut::from(doc)))
}
