//! Member endpoints.
//!
//! ```text
//! POST /api/v1/users          {"userId":"champ","password":"pw","name":"Champ","email":"c@x.io"}
//! GET  /api/v1/users
//! GET  /api/v1/users/champ
//! PUT  /api/v1/users/champ    {"name":"Champ","email":"c@x.io","oldPassword":"pw"}
//! POST /api/v1/login          {"userId":"champ","password":"pw"}
//! POST /api/v1/logout
//! ```
//!
//! Missing body fields deserialise as empty strings, so the core reports
//! them through the same blank-field rules as explicit empty values.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LoginRequest, RegisterUserRequest, UpdateUserRequest};
use crate::domain::UserInfo;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body of `POST /api/v1/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserBody {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl From<RegisterUserBody> for RegisterUserRequest {
    fn from(body: RegisterUserBody) -> Self {
        Self {
            user_id: body.user_id,
            password: body.password,
            name: body.name,
            email: body.email,
        }
    }
}

/// Body of `PUT /api/v1/users/{userId}`. Omit `newPassword` to keep the
/// current one.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserBody {
    pub name: String,
    pub email: String,
    pub new_password: Option<String>,
    pub old_password: String,
}

/// Body of `POST /api/v1/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginBody {
    pub user_id: String,
    pub password: String,
}

/// Public view of a member. Never includes the password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "champ")]
    pub user_id: String,
    #[schema(example = "Champ")]
    pub name: String,
    #[schema(example = "champ@example.com")]
    pub email: String,
}

impl From<&UserInfo> for UserResponse {
    fn from(info: &UserInfo) -> Self {
        Self {
            user_id: info.user_id().to_string(),
            name: info.name().to_string(),
            email: info.email().to_string(),
        }
    }
}

/// Register a member.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserBody,
    responses(
        (status = 201, description = "Registered", body = UserResponse),
        (status = 400, description = "A field breaks its rule", body = ErrorSchema),
        (status = 409, description = "User id already taken", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserBody>,
) -> ApiResult<HttpResponse> {
    let info = state
        .user_commands
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&info)))
}

/// List members in registration order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Members", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Fetch one member's profile.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "Member id")),
    responses(
        (status = 200, description = "Profile", body = UserResponse),
        (status = 404, description = "No such member", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let info = state.users.find_user(&path.into_inner()).await?;
    Ok(web::Json(UserResponse::from(&info)))
}

/// Replace a member's profile after checking their current password.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "Member id")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 400, description = "A field breaks its rule", body = ErrorSchema),
        (status = 403, description = "Wrong password", body = ErrorSchema),
        (status = 404, description = "No such member", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser",
    security([])
)]
#[put("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let UpdateUserBody {
        name,
        email,
        new_password,
        old_password,
    } = payload.into_inner();
    let info = state
        .user_commands
        .update_profile(UpdateUserRequest {
            user_id: path.into_inner(),
            name,
            email,
            new_password,
            old_password,
        })
        .await?;
    Ok(web::Json(UserResponse::from(&info)))
}

/// Check credentials and bind the member to the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Logged in", body = UserResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Wrong password", body = ErrorSchema),
        (status = 404, description = "No such member", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let LoginBody { user_id, password } = payload.into_inner();
    let info = state
        .user_commands
        .authenticate(LoginRequest { user_id, password })
        .await?;
    session.persist_user(info.user_id())?;
    Ok(web::Json(UserResponse::from(&info)))
}

/// Forget the logged-in member.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
