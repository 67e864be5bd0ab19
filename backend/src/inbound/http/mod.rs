//! HTTP inbound adapter.
//!
//! [`configure_api`] registers every board endpoint; the server mounts it
//! under `/api/v1` behind the session middleware.

use actix_web::web;

pub mod articles;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod trace;
pub mod users;
mod validation;

pub use error::ApiResult;

/// Register the board endpoints and the JSON extractor config.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use cafe::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::register_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::login)
        .service(users::logout)
        .service(articles::list_articles)
        .service(articles::write_article)
        .service(articles::get_article)
        .service(articles::update_article)
        .service(articles::delete_article);
}
