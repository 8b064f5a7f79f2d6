use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{model::db::AccommodationModel, policy::Visibility};

/// Search and filters of the accommodation listing
#[derive(Clone, Debug, Default)]
pub struct AccommodationFilter {
    /// Matched against ID, title and country code
    pub search: Option<String>,
    pub country_code: Option<String>,
    pub published: Option<bool>,
}

pub struct AccommodationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccommodationRepository<'a, C> {
    /// Creates a new instance of [`AccommodationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an accommodation, stamping both timestamps
    pub async fn create(
        &self,
        mut accommodation: entity::accommodation::ActiveModel,
    ) -> Result<AccommodationModel, DbErr> {
        let now = Utc::now().naive_utc();
        accommodation.created_at = ActiveValue::Set(now);
        accommodation.updated_at = ActiveValue::Set(now);

        accommodation.insert(self.db).await
    }

    pub async fn get(&self, id: &str) -> Result<Option<AccommodationModel>, DbErr> {
        entity::prelude::Accommodation::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Lists the accommodations within `visibility` matching the filter, ordered by title
    pub async fn list(
        &self,
        visibility: Visibility,
        filter: &AccommodationFilter,
    ) -> Result<Vec<AccommodationModel>, DbErr> {
        let mut query = entity::prelude::Accommodation::find();

        if let Visibility::OwnedBy(user_id) = visibility {
            query = query.filter(entity::accommodation::Column::UserId.eq(user_id));
        }

        if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::accommodation::Column::Id.contains(search))
                    .add(entity::accommodation::Column::Title.contains(search))
                    .add(entity::accommodation::Column::CountryCode.contains(search)),
            );
        }

        if let Some(country_code) = filter.country_code.as_deref() {
            query = query.filter(entity::accommodation::Column::CountryCode.eq(country_code));
        }

        if let Some(published) = filter.published {
            query = query.filter(entity::accommodation::Column::Published.eq(published));
        }

        query
            .order_by_asc(entity::accommodation::Column::Title)
            .all(self.db)
            .await
    }

    /// Persists the changed fields of an accommodation, refreshing `updated_at`
    pub async fn update(
        &self,
        mut accommodation: entity::accommodation::ActiveModel,
    ) -> Result<AccommodationModel, DbErr> {
        accommodation.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        accommodation.update(self.db).await
    }

    /// Deletes an accommodation along with its localizations
    ///
    /// Returns OK regardless of the accommodation existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Accommodation::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
