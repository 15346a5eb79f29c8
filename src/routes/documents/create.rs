use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::auth::resolve_current_user;
use crate::db::postgres_service::PostgresService;
use crate::types::document::{DocumentOut, RDocumentCreate};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenIssuer;

#[post("")]
async fn create(
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
    issuer: web::Data<TokenIssuer>,
    body: web::Json<RDocumentCreate>,
) -> ApiResult<DocumentOut> {
    let user = resolve_current_user(&db, &issuer, auth.token()).await?;

    let doc = db
        .create_document(user.id, body.into_inner().title)
        .await?;

    Ok(ApiResponse::Ok(DocumentOut::from(doc)))
}
