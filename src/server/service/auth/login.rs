use sea_orm::DatabaseConnection;

use crate::{
    model::user::LoginDto,
    server::{
        data::user::UserRepository,
        error::{validation::ValidationError, Error},
        model::db::UserModel,
        util::{form, password},
    },
};

pub static INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials. Please try again.";
pub static INACTIVE_ACCOUNT_MESSAGE: &str =
    "Your account is not activated yet. Please wait for admin approval.";

/// Result of a login attempt
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials match an active account
    Authenticated(UserModel),
    /// Unknown username or wrong password
    InvalidCredentials,
    /// Credentials match but the account awaits activation
    Inactive,
    /// Username or password left empty
    Invalid(ValidationError),
}

/// Checks credentials and records the login time for active accounts
///
/// The caller is responsible for storing the user in the session on
/// [`LoginOutcome::Authenticated`].
pub async fn login_service(db: &DatabaseConnection, login: LoginDto) -> Result<LoginOutcome, Error> {
    let mut errors = ValidationError::new();

    let username = login.username.trim();

    if username.is_empty() {
        errors.add("username", form::REQUIRED);
    }
    if login.password.is_empty() {
        errors.add("password", form::REQUIRED);
    }
    if !errors.is_empty() {
        return Ok(LoginOutcome::Invalid(errors));
    }

    let user_repo = UserRepository::new(db);
    let Some(user) = user_repo.get_by_username(username).await? else {
        tracing::debug!("Login attempt for unknown username {:?}", username);

        return Ok(LoginOutcome::InvalidCredentials);
    };

    if !password::verify_password(&login.password, &user.password_hash)? {
        tracing::debug!("Login attempt with wrong password for user ID {}", user.id);

        return Ok(LoginOutcome::InvalidCredentials);
    }

    if !user.is_active {
        tracing::debug!("Login denied for pending user ID {}", user.id);

        return Ok(LoginOutcome::Inactive);
    }

    match user_repo.update_last_login(user.id).await? {
        Some(user) => Ok(LoginOutcome::Authenticated(user)),
        // Deleted between lookup and update
        None => Ok(LoginOutcome::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    mod login_service {
        use inventory_test_utils::{constant::TEST_PASSWORD, prelude::*};

        use crate::{
            model::user::LoginDto,
            server::service::auth::login::{login_service, LoginOutcome},
        };

        fn login(username: &str, password: &str) -> LoginDto {
            LoginDto {
                username: username.to_string(),
                password: password.to_string(),
            }
        }

        /// Expect an active account to authenticate and record its login time
        #[tokio::test]
        async fn authenticates_active_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            test.user().insert_owner("owner", true).await?;

            let outcome = login_service(&test.db, login("owner", TEST_PASSWORD))
                .await
                .unwrap();

            let user = match outcome {
                LoginOutcome::Authenticated(user) => user,
                other => panic!("expected authenticated user, got {:?}", other),
            };
            assert!(user.last_login.is_some());

            Ok(())
        }

        /// Expect a pending account to be told it awaits activation
        #[tokio::test]
        async fn denies_inactive_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            test.user().insert_owner("pending", false).await?;

            let outcome = login_service(&test.db, login("pending", TEST_PASSWORD))
                .await
                .unwrap();

            assert!(matches!(outcome, LoginOutcome::Inactive));

            Ok(())
        }

        /// Expect wrong passwords and unknown users to be indistinguishable
        #[tokio::test]
        async fn rejects_invalid_credentials() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            test.user().insert_owner("pending", false).await?;

            let wrong_password = login_service(&test.db, login("pending", "WrongPassword1!"))
                .await
                .unwrap();
            let unknown = login_service(&test.db, login("nobody", TEST_PASSWORD))
                .await
                .unwrap();

            assert!(matches!(wrong_password, LoginOutcome::InvalidCredentials));
            assert!(matches!(unknown, LoginOutcome::InvalidCredentials));

            Ok(())
        }

        /// Expect empty fields to be reported
        #[tokio::test]
        async fn reports_empty_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let outcome = login_service(&test.db, LoginDto::default()).await.unwrap();

            let errors = match outcome {
                LoginOutcome::Invalid(errors) => errors,
                other => panic!("expected validation errors, got {:?}", other),
            };
            assert!(errors.has("username"));
            assert!(errors.has("password"));

            Ok(())
        }
    }
}
