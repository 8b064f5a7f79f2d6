//! User account service layer.
//!
//! Resolves the session user into an [`Actor`] for the ownership policy and implements the
//! superuser-only activation of pending accounts.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::{group::GroupRepository, NewUser, UserRepository},
        error::{
            auth::AuthError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::{
            actor::{Actor, PROPERTY_OWNERS_GROUP},
            db::UserModel,
        },
        policy,
        util::{form, password},
    },
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's account information.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get(user_id).await?.map(to_dto))
    }

    /// Resolves an active user into the actor used by the ownership policy.
    ///
    /// # Returns
    /// - `Ok(Actor)` - Active user with owner group membership resolved
    /// - `Err(Error::AuthError(UserNotInDatabase))` - User was deleted since logging in
    /// - `Err(Error::AuthError(UserInactive))` - User was deactivated since logging in
    pub async fn get_actor(&self, user_id: i32) -> Result<Actor, Error> {
        let user_repo = UserRepository::new(self.db);
        let group_repo = GroupRepository::new(self.db);

        let user = match user_repo.get(user_id).await? {
            Some(user) => user,
            None => return Err(AuthError::UserNotInDatabase(user_id).into()),
        };

        if !user.is_active {
            return Err(AuthError::UserInactive(user_id).into());
        }

        let is_owner = group_repo.is_member(user.id, PROPERTY_OWNERS_GROUP).await?;

        Ok(Actor::from_user(&user, is_owner))
    }

    /// Lists accounts awaiting activation, oldest first. Superusers only.
    pub async fn get_pending_users(&self, actor: &Actor) -> Result<Vec<UserDto>, Error> {
        ensure_can_manage_users(actor)?;

        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_pending().await?;

        Ok(users.into_iter().map(to_dto).collect())
    }

    /// Moves a pending account to active. Superusers only.
    ///
    /// Activating an already active account is a no-op.
    pub async fn activate_user(&self, actor: &Actor, user_id: i32) -> Result<UserDto, Error> {
        ensure_can_manage_users(actor)?;

        let user_repo = UserRepository::new(self.db);
        match user_repo.activate(user_id).await? {
            Some(user) => {
                tracing::info!("User ID {} activated user ID {}", actor.user_id, user.id);

                Ok(to_dto(user))
            }
            None => Err(ResourceError::not_found("User", user_id).into()),
        }
    }

    /// Creates an active staff superuser, bypassing the signup approval flow.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created superuser
    /// - `Err(Error::ValidationError)` - Invalid or taken username/email, weak password
    pub async fn create_superuser(
        &self,
        username: &str,
        email: &str,
        raw_password: &str,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);
        let mut errors = ValidationError::new();

        let username = username.trim();
        let email = email.trim();

        if !form::is_valid_username(username) {
            errors.add("username", form::INVALID_USERNAME);
        } else if user_repo.username_exists(username).await? {
            errors.add("username", "A user with that username already exists.");
        }

        if !form::is_valid_email(email) {
            errors.add("email", form::INVALID_EMAIL);
        }

        for message in password::validate_password(raw_password, username, email) {
            errors.add("password", message);
        }

        errors.into_result()?;

        let password_hash = password::hash_password(raw_password)?;
        let user = user_repo
            .create(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                is_active: true,
                is_staff: true,
                is_superuser: true,
            })
            .await?;

        tracing::info!("Created superuser {:?} with ID {}", user.username, user.id);

        Ok(to_dto(user))
    }
}

fn ensure_can_manage_users(actor: &Actor) -> Result<(), AuthError> {
    if policy::can_manage_users(actor) {
        Ok(())
    } else {
        Err(AuthError::SuperuserRequired(actor.user_id))
    }
}

pub(crate) fn to_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        is_active: user.is_active,
        is_staff: user.is_staff,
        is_superuser: user.is_superuser,
        created_at: user.created_at,
        last_login: user.last_login,
    }
}

#[cfg(test)]
mod tests {
    use crate::server::model::actor::Actor;

    fn actor(user_id: i32, is_superuser: bool, is_owner: bool) -> Actor {
        Actor {
            user_id,
            is_staff: is_superuser,
            is_superuser,
            is_owner,
        }
    }

    mod get_actor {
        use inventory_test_utils::prelude::*;

        use crate::server::{
            error::{auth::AuthError, Error},
            service::user::UserService,
        };

        /// Expect owner group membership to be resolved
        #[tokio::test]
        async fn resolves_owner_membership() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let owner = test.user().insert_owner("owner", true).await?;
            let admin = test.user().insert_superuser("admin").await?;

            let user_service = UserService::new(&test.db);
            let owner_actor = user_service.get_actor(owner.id).await.unwrap();
            let admin_actor = user_service.get_actor(admin.id).await.unwrap();

            assert!(owner_actor.is_owner);
            assert!(!owner_actor.is_superuser);
            assert!(!admin_actor.is_owner);
            assert!(admin_actor.is_superuser);

            Ok(())
        }

        /// Expect inactive and missing users to be rejected
        #[tokio::test]
        async fn rejects_inactive_and_missing_users() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let pending = test.user().insert_owner("pending", false).await?;

            let user_service = UserService::new(&test.db);
            let inactive = user_service.get_actor(pending.id).await;
            let missing = user_service.get_actor(pending.id + 100).await;

            assert!(matches!(
                inactive,
                Err(Error::AuthError(AuthError::UserInactive(_)))
            ));
            assert!(matches!(
                missing,
                Err(Error::AuthError(AuthError::UserNotInDatabase(_)))
            ));

            Ok(())
        }
    }

    mod activate_user {
        use inventory_test_utils::prelude::*;

        use super::actor;
        use crate::server::{error::Error, service::user::UserService};

        /// Expect a superuser to activate a pending account
        #[tokio::test]
        async fn activates_pending_account() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let pending = test.user().insert_owner("pending", false).await?;
            let admin = test.user().insert_superuser("admin").await?;

            let user_service = UserService::new(&test.db);
            let before = user_service
                .get_pending_users(&actor(admin.id, true, false))
                .await
                .unwrap();
            let activated = user_service
                .activate_user(&actor(admin.id, true, false), pending.id)
                .await
                .unwrap();
            let after = user_service
                .get_pending_users(&actor(admin.id, true, false))
                .await
                .unwrap();

            assert_eq!(before.len(), 1);
            assert!(activated.is_active);
            assert!(after.is_empty());

            Ok(())
        }

        /// Expect owners to be refused
        #[tokio::test]
        async fn denies_non_superuser() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let pending = test.user().insert_owner("pending", false).await?;
            let owner = test.user().insert_owner("owner", true).await?;

            let user_service = UserService::new(&test.db);
            let result = user_service
                .activate_user(&actor(owner.id, false, true), pending.id)
                .await;

            assert!(matches!(result, Err(Error::AuthError(_))));

            Ok(())
        }

        /// Expect NotFound for a nonexistent user
        #[tokio::test]
        async fn fails_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_superuser("admin").await?;

            let user_service = UserService::new(&test.db);
            let result = user_service
                .activate_user(&actor(admin.id, true, false), admin.id + 1)
                .await;

            assert!(matches!(result, Err(Error::ResourceError(_))));

            Ok(())
        }
    }

    mod create_superuser {
        use inventory_test_utils::prelude::*;

        use crate::server::{
            error::Error, service::user::UserService, util::password::verify_password,
        };

        /// Expect an active superuser with a hashed password
        #[tokio::test]
        async fn creates_active_superuser() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let user_service = UserService::new(&test.db);
            let user = user_service
                .create_superuser("admin", "admin@example.com", "ComplexPassword123!")
                .await
                .unwrap();

            assert!(user.is_active);
            assert!(user.is_staff);
            assert!(user.is_superuser);

            let stored = crate::server::data::user::UserRepository::new(&test.db)
                .get(user.id)
                .await?
                .unwrap();
            assert_ne!(stored.password_hash, "ComplexPassword123!");
            assert!(verify_password("ComplexPassword123!", &stored.password_hash).unwrap());

            Ok(())
        }

        /// Expect a taken username and weak password to be rejected
        #[tokio::test]
        async fn rejects_invalid_input() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            test.user().insert_superuser("admin").await?;

            let user_service = UserService::new(&test.db);
            let result = user_service
                .create_superuser("admin", "not-an-email", "123")
                .await;

            let errors = match result {
                Err(Error::ValidationError(errors)) => errors,
                other => panic!("expected validation error, got {:?}", other),
            };
            assert!(errors.has("username"));
            assert!(errors.has("email"));
            assert!(errors.has("password"));

            Ok(())
        }
    }
}
