//! Read-only pages: the café list, a café's detail page and the about page.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

use crate::domain::CafeId;
use crate::domain::ports::{Page, PageTemplate};

use super::ApiResult;
use super::state::HttpState;
use super::views::{CafeDetailView, CafeListView, render, render_page};

/// List every café in storage order.
#[get("/")]
pub async fn list_cafes(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let cafes = state.cafes.all();
    render(
        &state,
        StatusCode::OK,
        PageTemplate::CafeList,
        &CafeListView { cafes: &cafes },
    )
}

/// Show one café. Unknown ids still render the page, with `cafe` unset.
#[get("/cafe/{id}")]
pub async fn cafe_detail(
    state: web::Data<HttpState>,
    id: web::Path<CafeId>,
) -> ApiResult<HttpResponse> {
    let cafe = state.cafes.find_by_id(id.into_inner());
    render(
        &state,
        StatusCode::OK,
        PageTemplate::CafeDetail,
        &CafeDetailView {
            cafe: cafe.as_ref(),
        },
    )
}

/// Static about page.
#[get("/about")]
pub async fn about(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    render_page(&state, StatusCode::OK, &Page::bare(PageTemplate::About))
}
