use entity::localize_accommodation::Language;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::LocalizeAccommodationModel;

pub struct LocalizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocalizationRepository<'a, C> {
    /// Creates a new instance of [`LocalizationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        accommodation_id: &str,
        language: Language,
        description: String,
        policy: serde_json::Value,
    ) -> Result<LocalizeAccommodationModel, DbErr> {
        let localization = entity::localize_accommodation::ActiveModel {
            accommodation_id: ActiveValue::Set(accommodation_id.to_string()),
            language: ActiveValue::Set(language),
            description: ActiveValue::Set(description),
            policy: ActiveValue::Set(policy),
            ..Default::default()
        };

        localization.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<LocalizeAccommodationModel>, DbErr> {
        entity::prelude::LocalizeAccommodation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets every localization of an accommodation in insertion order
    pub async fn get_by_accommodation_id(
        &self,
        accommodation_id: &str,
    ) -> Result<Vec<LocalizeAccommodationModel>, DbErr> {
        entity::prelude::LocalizeAccommodation::find()
            .filter(entity::localize_accommodation::Column::AccommodationId.eq(accommodation_id))
            .order_by_asc(entity::localize_accommodation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        language: Language,
        description: String,
        policy: serde_json::Value,
    ) -> Result<Option<LocalizeAccommodationModel>, DbErr> {
        let localization = match self.get(id).await? {
            Some(localization) => localization,
            None => return Ok(None),
        };

        let mut localization_am = localization.into_active_model();
        localization_am.language = ActiveValue::Set(language);
        localization_am.description = ActiveValue::Set(description);
        localization_am.policy = ActiveValue::Set(policy);

        let localization = localization_am.update(self.db).await?;

        Ok(Some(localization))
    }

    /// Deletes a localization
    ///
    /// Returns OK regardless of the localization existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::LocalizeAccommodation::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
