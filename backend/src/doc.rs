//! OpenAPI document for the board API.
//!
//! Served by Swagger UI in debug builds and printed by `openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::articles::{ArticleBody, ArticleResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorReasonSchema, ErrorSchema};
use crate::inbound::http::users::{LoginBody, RegisterUserBody, UpdateUserBody, UserResponse};

/// Adds the `SessionCookie` security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cafe board API",
        description = "Member accounts and a shared article board."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::articles::list_articles,
        crate::inbound::http::articles::write_article,
        crate::inbound::http::articles::get_article,
        crate::inbound::http::articles::update_article,
        crate::inbound::http::articles::delete_article,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ErrorReasonSchema,
        RegisterUserBody,
        UpdateUserBody,
        LoginBody,
        UserResponse,
        ArticleBody,
        ArticleResponse,
    )),
    tags(
        (name = "users", description = "Member accounts and login"),
        (name = "articles", description = "The article board"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;
