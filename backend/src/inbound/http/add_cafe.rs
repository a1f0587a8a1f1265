//! "Suggest a café" page.
//!
//! Suggestions are relayed to the site mailbox for a human to review; the
//! café table is never written from here.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use tracing::{info, warn};

use crate::domain::TraceId;
use crate::domain::ports::PageTemplate;

use super::ApiResult;
use super::forms::SuggestionForm;
use super::session::Notice;
use super::state::HttpState;
use super::validation::FieldErrors;
use super::views::{AddCafeView, render};

/// Unsubmitted suggestion form.
#[get("/add-cafe")]
pub async fn add_cafe_form(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let form = SuggestionForm::default();
    let errors = FieldErrors::default();
    render(
        &state,
        StatusCode::OK,
        PageTemplate::AddCafe,
        &AddCafeView::new(&form, &errors),
    )
}

/// Validate and relay a suggestion, then confirm with `suggested = true`.
#[post("/add-cafe")]
pub async fn submit_suggestion(
    state: web::Data<HttpState>,
    form: web::Form<SuggestionForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let suggestion = match form.validate() {
        Ok(suggestion) => suggestion,
        Err(errors) => {
            return render(
                &state,
                StatusCode::OK,
                PageTemplate::AddCafe,
                &AddCafeView::new(&form, &errors),
            );
        }
    };

    let no_errors = FieldErrors::default();
    if let Err(error) = state.mail.send(&suggestion.to_mail()).await {
        warn!(
            %error,
            trace_id = ?TraceId::current(),
            name = %suggestion.name,
            "café suggestion not relayed"
        );
        return render(
            &state,
            StatusCode::SERVICE_UNAVAILABLE,
            PageTemplate::AddCafe,
            &AddCafeView {
                notice: Some(Notice::DeliveryFailed),
                ..AddCafeView::new(&form, &no_errors)
            },
        );
    }

    info!(name = %suggestion.name, "café suggestion relayed");
    let cleared = SuggestionForm::default();
    render(
        &state,
        StatusCode::OK,
        PageTemplate::AddCafe,
        &AddCafeView {
            suggested: true,
            ..AddCafeView::new(&cleared, &no_errors)
        },
    )
}
