//! Contact page: render the form, validate a message and relay it by mail.
//!
//! A relayed message answers with a post-redirect-get so reloading the page
//! cannot send it twice; the confirmation travels as a session flash notice.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, get, post, web};
use tracing::{info, warn};

use crate::domain::TraceId;
use crate::domain::ports::PageTemplate;

use super::ApiResult;
use super::forms::ContactForm;
use super::session::{Notice, SessionContext};
use super::state::HttpState;
use super::validation::FieldErrors;
use super::views::{ContactView, render};

const CONTACT_PATH: &str = "/contact";

/// Empty contact form, plus the notice left by a previous submission.
#[get("/contact")]
pub async fn contact_form(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let form = ContactForm::default();
    let errors = FieldErrors::default();
    render(
        &state,
        StatusCode::OK,
        PageTemplate::Contact,
        &ContactView {
            form: &form,
            errors: &errors,
            notice: session.take_notice(),
        },
    )
}

/// Validate and relay a contact message.
///
/// - invalid input: the form comes back with field errors and nothing is sent;
/// - relay failure: the form comes back with a `delivery_failed` notice (503);
/// - success: `302 Found` back to the form with a `sent` notice.
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<ContactForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let message = match form.validate() {
        Ok(message) => message,
        Err(errors) => {
            return render(
                &state,
                StatusCode::OK,
                PageTemplate::Contact,
                &ContactView {
                    form: &form,
                    errors: &errors,
                    notice: None,
                },
            );
        }
    };

    if let Err(error) = state.mail.send(&message.to_mail()).await {
        warn!(%error, trace_id = ?TraceId::current(), "contact message not relayed");
        return render(
            &state,
            StatusCode::SERVICE_UNAVAILABLE,
            PageTemplate::Contact,
            &ContactView {
                form: &form,
                errors: &FieldErrors::default(),
                notice: Some(Notice::DeliveryFailed),
            },
        );
    }

    info!("contact message relayed");
    session.flash(Notice::Sent)?;
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, CONTACT_PATH))
        .finish())
}
