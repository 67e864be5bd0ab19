//! Member use cases: registration, profile reads, profile edits, login.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    LoginRequest, RegisterUserRequest, UpdateUserRequest, UserCommand, UserPersistenceError,
    UserRepository, UsersQuery,
};
use crate::domain::{
    Email, Error, ErrorReason, Password, User, UserId, UserInfo, UserName, WrongPasswordError,
};

/// Implements [`UserCommand`] and [`UsersQuery`] over a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<R> {
    users: Arc<R>,
}

impl<R> UserAccountService<R> {
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user store unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
        UserPersistenceError::DuplicateUserId { user_id } => {
            Error::conflict(format!("user id {user_id} is already registered"))
                .with_reason(ErrorReason::DuplicateUserId)
        }
        UserPersistenceError::Missing { user_id } => user_not_exist(&user_id),
    }
}

fn user_not_exist(user_id: &str) -> Error {
    Error::not_found(format!("user {user_id} does not exist"))
        .with_reason(ErrorReason::UserNotExist)
}

fn wrong_password(error: WrongPasswordError) -> Error {
    Error::forbidden(error.to_string()).with_reason(ErrorReason::WrongPassword)
}

impl<R> UserAccountService<R>
where
    R: UserRepository,
{
    /// An id that could never have been registered is reported as missing.
    async fn load(&self, raw_user_id: &str) -> Result<User, Error> {
        let user_id = UserId::new(raw_user_id).map_err(|_| user_not_exist(raw_user_id))?;
        self.users
            .find_by_user_id(&user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| user_not_exist(raw_user_id))
    }
}

#[async_trait]
impl<R> UserCommand for UserAccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, request: RegisterUserRequest) -> Result<UserInfo, Error> {
        let RegisterUserRequest {
            user_id,
            password,
            name,
            email,
        } = request;
        let user = User::try_from_strings(user_id, password, name, email)?;
        self.users
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %user.user_id(), "registered user");
        Ok(user.info())
    }

    async fn update_profile(&self, request: UpdateUserRequest) -> Result<UserInfo, Error> {
        let UpdateUserRequest {
            user_id,
            name,
            email,
            new_password,
            old_password,
        } = request;
        let current = self.load(&user_id).await?;
        current
            .verify_password(&old_password)
            .map_err(wrong_password)?;

        let name = UserName::new(name)?;
        let email = Email::new(email)?;
        let password = match new_password {
            Some(raw) => Password::new(raw)?,
            None => current.password().clone(),
        };

        let updated = current.with_profile(name, email, password);
        self.users
            .update(&updated)
            .await
            .map_err(map_user_persistence_error)?;
        info!(user_id = %updated.user_id(), "updated user profile");
        Ok(updated.info())
    }

    async fn authenticate(&self, request: LoginRequest) -> Result<UserInfo, Error> {
        let user = self.load(&request.user_id).await?;
        user.verify_password(&request.password).map_err(|err| {
            debug!(user_id = %user.user_id(), "login rejected");
            Error::unauthorized(err.to_string()).with_reason(ErrorReason::WrongPassword)
        })?;
        Ok(user.info())
    }
}

#[async_trait]
impl<R> UsersQuery for UserAccountService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<UserInfo>, Error> {
        let users = self
            .users
            .list_all()
            .await
            .map_err(map_user_persistence_error)?;
        Ok(users.iter().map(User::info).collect())
    }

    async fn find_user(&self, user_id: &str) -> Result<UserInfo, Error> {
        self.load(user_id).await.map(|user| user.info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::{fixture, rstest};

    fn stored_champ() -> User {
        User::try_from_strings("champ", "qwer1234", "champion", "champ@cafe.test")
            .expect("valid fixture user")
    }

    fn make_service(repo: MockUserRepository) -> UserAccountService<MockUserRepository> {
        UserAccountService::new(Arc::new(repo))
    }

    fn champ_update() -> UpdateUserRequest {
        UpdateUserRequest {
            user_id: "champ".into(),
            name: "champ2".into(),
            email: "champ2@cafe.test".into(),
            new_password: Some("asdf".into()),
            old_password: "qwer1234".into(),
        }
    }

    #[fixture]
    fn update_request() -> UpdateUserRequest {
        champ_update()
    }

    #[tokio::test]
    async fn register_stores_user_and_returns_projection() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|user| user.user_id().as_ref() == "champ" && user.password().matches("qwer1234"))
            .times(1)
            .return_once(|_| Ok(()));

        let info = make_service(repo)
            .register(RegisterUserRequest {
                user_id: "champ".into(),
                password: "qwer1234".into(),
                name: "champion".into(),
                email: "champ@cafe.test".into(),
            })
            .await
            .expect("registration succeeds");

        assert_eq!(info.user_id().as_ref(), "champ");
        assert_eq!(info.email().as_ref(), "champ@cafe.test");
    }

    #[rstest]
    #[case("", "pw", "name", "a@b", ErrorReason::IllegalUserId)]
    #[case("champ", " ", "name", "a@b", ErrorReason::IllegalPassword)]
    #[case("champ", "pw", "na me", "a@b", ErrorReason::IllegalUserName)]
    #[case("champ", "pw", "name", "nope", ErrorReason::IllegalEmail)]
    #[tokio::test]
    async fn register_rejects_invalid_fields_without_touching_store(
        #[case] user_id: &str,
        #[case] password: &str,
        #[case] name: &str,
        #[case] email: &str,
        #[case] reason: ErrorReason,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let err = make_service(repo)
            .register(RegisterUserRequest {
                user_id: user_id.into(),
                password: password.into(),
                name: name.into(),
                email: email.into(),
            })
            .await
            .expect_err("validation fails");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.reason(), Some(reason));
    }

    #[tokio::test]
    async fn register_maps_duplicate_to_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .return_once(|_| Err(UserPersistenceError::duplicate_user_id("champ")));

        let err = make_service(repo)
            .register(RegisterUserRequest {
                user_id: "champ".into(),
                password: "pw".into(),
                name: "champ".into(),
                email: "champ@cafe.test".into(),
            })
            .await
            .expect_err("duplicate");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.reason(), Some(ErrorReason::DuplicateUserId));
    }

    #[rstest]
    #[case("ghost")]
    #[case("no body")]
    #[case("")]
    #[tokio::test]
    async fn find_user_reports_missing_user(#[case] user_id: &str) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id().returning(|_| Ok(None));

        let err = make_service(repo)
            .find_user(user_id)
            .await
            .expect_err("missing user");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.reason(), Some(ErrorReason::UserNotExist));
    }

    #[tokio::test]
    async fn list_users_keeps_store_order() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_all().return_once(|| {
            Ok(vec![
                stored_champ(),
                User::try_from_strings("zed", "pw", "zed", "zed@cafe.test").expect("valid"),
            ])
        });

        let users = make_service(repo).list_users().await.expect("list");
        let ids: Vec<&str> = users.iter().map(|u| u.user_id().as_ref()).collect();
        assert_eq!(ids, ["champ", "zed"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_profile_replaces_fields(update_request: UpdateUserRequest) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .return_once(|_| Ok(Some(stored_champ())));
        repo.expect_update()
            .withf(|user| user.name().as_ref() == "champ2" && user.password().matches("asdf"))
            .times(1)
            .return_once(|_| Ok(()));

        let info = make_service(repo)
            .update_profile(update_request)
            .await
            .expect("update succeeds");

        assert_eq!(info.name().as_ref(), "champ2");
        assert_eq!(info.email().as_ref(), "champ2@cafe.test");
    }

    #[rstest]
    #[tokio::test]
    async fn update_profile_keeps_password_when_absent(update_request: UpdateUserRequest) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .return_once(|_| Ok(Some(stored_champ())));
        repo.expect_update()
            .withf(|user| user.password().matches("qwer1234"))
            .times(1)
            .return_once(|_| Ok(()));

        let request = UpdateUserRequest {
            new_password: None,
            ..update_request
        };
        make_service(repo)
            .update_profile(request)
            .await
            .expect("update succeeds");
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_password_wins_over_invalid_fields(update_request: UpdateUserRequest) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .return_once(|_| Ok(Some(stored_champ())));
        repo.expect_update().never();

        let request = UpdateUserRequest {
            name: String::new(),
            email: String::new(),
            old_password: "qwer12345".into(),
            ..update_request
        };
        let err = make_service(repo)
            .update_profile(request)
            .await
            .expect_err("wrong password");

        assert_eq!(err.code(), ErrorCode::Forbidden);
        assert_eq!(err.reason(), Some(ErrorReason::WrongPassword));
    }

    #[rstest]
    #[case(UpdateUserRequest { name: " ".into(), ..champ_update() }, ErrorReason::IllegalUserName)]
    #[case(UpdateUserRequest { email: "champ".into(), ..champ_update() }, ErrorReason::IllegalEmail)]
    #[case(UpdateUserRequest { new_password: Some(String::new()), ..champ_update() }, ErrorReason::IllegalPassword)]
    #[tokio::test]
    async fn update_profile_validates_after_password_check(
        #[case] request: UpdateUserRequest,
        #[case] reason: ErrorReason,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .return_once(|_| Ok(Some(stored_champ())));
        repo.expect_update().never();

        let err = make_service(repo)
            .update_profile(request)
            .await
            .expect_err("invalid field");
        assert_eq!(err.reason(), Some(reason));
    }

    #[rstest]
    #[case("ghost")]
    #[case("no body")]
    #[tokio::test]
    async fn update_profile_reports_missing_user(
        update_request: UpdateUserRequest,
        #[case] user_id: &str,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let request = UpdateUserRequest {
            user_id: user_id.into(),
            ..update_request
        };
        let err = make_service(repo)
            .update_profile(request)
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.reason(), Some(ErrorReason::UserNotExist));
    }

    #[tokio::test]
    async fn login_with_unstorable_id_reports_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id().never();

        let err = make_service(repo)
            .authenticate(LoginRequest {
                user_id: "no body".into(),
                password: "pw".into(),
            })
            .await
            .expect_err("missing");
        assert_eq!(err.reason(), Some(ErrorReason::UserNotExist));
    }

    #[rstest]
    #[case("qwer1234", None)]
    #[case("nope", Some(ErrorCode::Unauthorized))]
    #[tokio::test]
    async fn authenticate_checks_password(
        #[case] password: &str,
        #[case] expected: Option<ErrorCode>,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_user_id()
            .return_once(|_| Ok(Some(stored_champ())));

        let result = make_service(repo)
            .authenticate(LoginRequest {
                user_id: "champ".into(),
                password: password.into(),
            })
            .await;

        assert_eq!(result.err().map(|err| err.code()), expected);
    }

    #[tokio::test]
    async fn connection_failures_surface_as_unavailable() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_all()
            .return_once(|| Err(UserPersistenceError::connection("pool closed")));

        let err = make_service(repo).list_users().await.expect_err("offline");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
