//! Administrative café removal.
//!
//! Mounted only when `CAFES_ENABLE_DELETE` is set; the public site never
//! links to it.

use actix_web::http::header;
use actix_web::{HttpResponse, post, web};
use tracing::info;

use crate::domain::CafeId;

use super::ApiResult;
use super::state::HttpState;

/// Remove a café and return to the list. Unknown ids are not an error.
#[post("/delete/{id}")]
pub async fn delete_cafe(
    state: web::Data<HttpState>,
    id: web::Path<CafeId>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let deleted = state.cafes.remove(id).await?;
    info!(id, deleted, "café delete requested");
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}
