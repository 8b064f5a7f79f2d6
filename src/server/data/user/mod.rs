pub mod group;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::UserModel;

/// Fields of a user account about to be inserted
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never the plain password
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, new_user: NewUser) -> Result<UserModel, DbErr> {
        let user = entity::inventory_user::ActiveModel {
            username: ActiveValue::Set(new_user.username),
            email: ActiveValue::Set(new_user.email),
            password_hash: ActiveValue::Set(new_user.password_hash),
            is_active: ActiveValue::Set(new_user.is_active),
            is_staff: ActiveValue::Set(new_user.is_staff),
            is_superuser: ActiveValue::Set(new_user.is_superuser),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::InventoryUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::InventoryUser::find()
            .filter(entity::inventory_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::InventoryUser::find()
            .filter(entity::inventory_user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::InventoryUser::find()
            .filter(entity::inventory_user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every account still waiting for activation, oldest first
    pub async fn get_pending(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::InventoryUser::find()
            .filter(entity::inventory_user::Column::IsActive.eq(false))
            .order_by_asc(entity::inventory_user::Column::CreatedAt)
            .order_by_asc(entity::inventory_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a user as active
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn activate(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.is_active = ActiveValue::Set(true);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Records the current time as the user's last login
    pub async fn update_last_login(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.last_login = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Accommodations owned by the user are kept with their owner cleared. Returns OK regardless
    /// of user existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InventoryUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
