//! Cookie session access for handlers.
//!
//! Only the logged-in user id lives in the session. Handlers go through
//! [`SessionContext`] so they never touch `actix_session` keys directly.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Board-level view of the request session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind `user_id` to the session, rotating the session identifier.
    pub fn persist_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The logged-in user, if any. A stored id that no longer validates is
    /// treated as absent.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "ignoring invalid user id in session cookie");
                None
            }
        }))
    }

    /// The logged-in user, or `401 Unauthorized`.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop everything in the session; the cookie is cleared on response.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    async fn set_user(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = UserId::new("champ").map_err(Error::from)?;
        session.persist_user(&id)?;
        Ok(HttpResponse::Ok().finish())
    }

    async fn whoami(session: SessionContext) -> Result<HttpResponse, Error> {
        let id = session.require_user_id()?;
        Ok(HttpResponse::Ok().body(id.to_string()))
    }

    async fn forget(session: SessionContext) -> HttpResponse {
        session.purge();
        HttpResponse::NoContent().finish()
    }

    async fn tamper(session: Session) -> HttpResponse {
        match session.insert(USER_ID_KEY, "has space") {
            Ok(()) => HttpResponse::Ok().finish(),
            Err(_) => HttpResponse::InternalServerError().finish(),
        }
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/set", web::get().to(set_user))
            .route("/whoami", web::get().to(whoami))
            .route("/forget", web::get().to(forget))
            .route("/tamper", web::get().to(tamper));
    }

    #[actix_web::test]
    async fn persisted_user_is_read_back() {
        let app =
            test::init_service(App::new().wrap(test_session_middleware()).configure(routes)).await;

        let set = test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/whoami").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "champ");
    }

    #[actix_web::test]
    async fn anonymous_request_is_unauthorised() {
        let app =
            test::init_service(App::new().wrap(test_session_middleware()).configure(routes)).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn invalid_stored_id_is_treated_as_anonymous() {
        let app =
            test::init_service(App::new().wrap(test_session_middleware()).configure(routes)).await;
        let set =
            test::call_service(&app, test::TestRequest::get().uri("/tamper").to_request()).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/whoami").cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn purge_expires_the_cookie() {
        let app =
            test::init_service(App::new().wrap(test_session_middleware()).configure(routes)).await;
        let set = test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = session_cookie(&set).expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/forget").cookie(cookie).to_request(),
        )
        .await;
        let cleared = session_cookie(&res).expect("removal cookie");
        assert_eq!(cleared.value(), "");
    }
}
