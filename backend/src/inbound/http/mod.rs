//! HTTP inbound adapter serving the site's pages and forms.

pub mod add_cafe;
pub mod admin;
pub mod contact;
pub mod error;
pub mod forms;
pub mod health;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod views;

use actix_web::web;

pub use error::ApiResult;

/// Register every site route.
///
/// `enable_delete` mounts the administrative `POST /delete/{id}` route;
/// without it that path answers `404`.
pub fn configure(cfg: &mut web::ServiceConfig, enable_delete: bool) {
    cfg.service(pages::list_cafes)
        .service(pages::cafe_detail)
        .service(pages::about)
        .service(contact::contact_form)
        .service(contact::submit_contact)
        .service(add_cafe::add_cafe_form)
        .service(add_cafe::submit_suggestion);
    if enable_delete {
        cfg.service(admin::delete_cafe);
    }
}
