use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[get("/")]
async fn root(_req: actix_web::HttpRequest) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        message: "Shared Doc Backend is running".to_string(),
    }))
}
