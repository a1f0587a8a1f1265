//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use serde_json::Value;

use crate::domain::ports::{FixtureCafeRepository, FixturePageRenderer, MailRelay};
use crate::domain::{Cafe, CafeDirectory};
use crate::inbound::http::state::HttpState;

pub(crate) const SESSION_COOKIE: &str = "session";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Session cookie set by `res`, if any.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// State over fixture cafés, the given relay and the JSON-echo renderer.
pub async fn state_with(cafes: Vec<Cafe>, mail: Arc<dyn MailRelay>) -> HttpState {
    let directory = CafeDirectory::load(Arc::new(FixtureCafeRepository::with_cafes(cafes)))
        .await
        .expect("fixture directory loads");
    HttpState::new(Arc::new(directory), mail, Arc::new(FixturePageRenderer))
}

/// Parse a body produced by the JSON-echo renderer.
pub async fn rendered_page(res: ServiceResponse) -> Value {
    let bytes = actix_web::test::read_body(res).await;
    serde_json::from_slice(&bytes).expect("fixture renderer emits JSON")
}
