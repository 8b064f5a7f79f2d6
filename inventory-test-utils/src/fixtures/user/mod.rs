//! User account, group and membership fixture utilities.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_OWNER_GROUP, TEST_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password is [`TEST_PASSWORD`] and whose email is `{username}@example.com`
    pub async fn insert_user(
        &self,
        username: &str,
        is_active: bool,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<entity::inventory_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHashError(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::InventoryUser::insert(entity::inventory_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
                password_hash: ActiveValue::Set(password_hash),
                is_active: ActiveValue::Set(is_active),
                is_staff: ActiveValue::Set(is_staff),
                is_superuser: ActiveValue::Set(is_superuser),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                last_login: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert an active staff superuser
    pub async fn insert_superuser(
        &self,
        username: &str,
    ) -> Result<entity::inventory_user::Model, TestError> {
        self.insert_user(username, true, true, true).await
    }

    /// Insert a user belonging to the `Property Owners` group, creating the group if needed
    pub async fn insert_owner(
        &self,
        username: &str,
        is_active: bool,
    ) -> Result<entity::inventory_user::Model, TestError> {
        let group = match entity::prelude::InventoryGroup::find()
            .filter(entity::inventory_group::Column::Name.eq(TEST_OWNER_GROUP))
            .one(&self.context.db)
            .await?
        {
            Some(group) => group,
            None => self.insert_group(TEST_OWNER_GROUP).await?,
        };

        let user = self.insert_user(username, is_active, false, false).await?;
        self.add_to_group(user.id, group.id).await?;

        Ok(user)
    }

    pub async fn insert_group(
        &self,
        name: &str,
    ) -> Result<entity::inventory_group::Model, TestError> {
        Ok(
            entity::prelude::InventoryGroup::insert(entity::inventory_group::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn add_to_group(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<entity::inventory_user_group::Model, TestError> {
        Ok(entity::prelude::InventoryUserGroup::insert(
            entity::inventory_user_group::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                group_id: ActiveValue::Set(group_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
