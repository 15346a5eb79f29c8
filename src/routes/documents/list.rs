use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::document::DocumentSummary;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[get("")]
async fn list(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
) -> ApiResult<Vec<DocumentSummary>> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let docs = db.list_documents(user.id).await?;

    Ok(ApiResponse::Ok(
        docs.into_iter().map(DocumentSummary::from).collect(),
    ))
}
