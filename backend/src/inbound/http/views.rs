//! Template contexts and the shared render helper.
//!
//! Each view serialises to the variables its template reads. Form views carry
//! the raw submission back so a rejected form keeps what the visitor typed.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use serde::Serialize;

use crate::domain::ports::{Page, PageTemplate};
use crate::domain::{Availability, Cafe};

use super::ApiResult;
use super::forms::{ContactForm, SuggestionForm};
use super::session::Notice;
use super::state::HttpState;
use super::validation::FieldErrors;

/// Context of `index.html`.
#[derive(Debug, Serialize)]
pub struct CafeListView<'a> {
    pub cafes: &'a [Cafe],
}

/// Context of `cafe.html`; `cafe` is `null` for unknown ids.
#[derive(Debug, Serialize)]
pub struct CafeDetailView<'a> {
    pub cafe: Option<&'a Cafe>,
}

/// Context of `contact.html`.
#[derive(Debug, Serialize)]
pub struct ContactView<'a> {
    pub form: &'a ContactForm,
    pub errors: &'a FieldErrors,
    pub notice: Option<Notice>,
}

/// Context of `add-cafe.html`.
#[derive(Debug, Serialize)]
pub struct AddCafeView<'a> {
    pub form: &'a SuggestionForm,
    pub errors: &'a FieldErrors,
    pub suggested: bool,
    pub notice: Option<Notice>,
    pub choices: [&'static str; 2],
}

impl<'a> AddCafeView<'a> {
    /// View with no outcome yet.
    pub fn new(form: &'a SuggestionForm, errors: &'a FieldErrors) -> Self {
        Self {
            form,
            errors,
            suggested: false,
            notice: None,
            choices: Availability::CHOICES,
        }
    }
}

/// Render `view` through `template` and answer with `status`.
pub(crate) fn render<T: Serialize>(
    state: &HttpState,
    status: StatusCode,
    template: PageTemplate,
    view: &T,
) -> ApiResult<HttpResponse> {
    let page = Page::from_view(template, view)?;
    render_page(state, status, &page)
}

pub(crate) fn render_page(
    state: &HttpState,
    status: StatusCode,
    page: &Page,
) -> ApiResult<HttpResponse> {
    let html = state.renderer.render(page)?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(html))
}
