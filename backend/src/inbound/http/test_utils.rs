//! Helpers shared by handler tests.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{ArticleService, UserAccountService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryArticleRepository, InMemoryUserRepository};

pub(crate) const SESSION_COOKIE: &str = "session";

/// Cookie-backed session middleware with a throwaway key.
pub(crate) fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    session_middleware_with_key(Key::generate())
}

/// Cookie-backed session middleware signing with `key`, so cookies survive a
/// rebuilt app.
pub(crate) fn session_middleware_with_key(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// The session cookie set on `res`, if any.
pub(crate) fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
}

/// Clock pinned to 2024-05-17 09:41:27 UTC.
pub(crate) struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 41, 27)
            .single()
            .unwrap_or_default()
    }
}

/// Empty in-memory board behind real services.
pub(crate) fn in_memory_state() -> HttpState {
    HttpState::from_services(
        Arc::new(UserAccountService::new(Arc::new(
            InMemoryUserRepository::default(),
        ))),
        Arc::new(ArticleService::new(
            Arc::new(InMemoryArticleRepository::default()),
            Arc::new(FixedClock),
        )),
    )
}
