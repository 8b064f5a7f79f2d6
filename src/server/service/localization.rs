//! Per-language descriptions and policies of accommodations.
//!
//! Access follows the parent accommodation: localizations are visible when it is visible and
//! editable when it is editable.

use entity::localize_accommodation::Language;
use sea_orm::{ActiveEnum, DatabaseConnection};
use serde_json::Value;

use crate::{
    model::localization::{LocalizationDto, LocalizationFormDto},
    server::{
        data::localization::LocalizationRepository,
        error::{
            access::AccessError, resource::ResourceError, validation::ValidationError, Error,
        },
        model::{
            actor::Actor,
            db::{AccommodationModel, LocalizeAccommodationModel},
        },
        policy,
        service::accommodation::AccommodationService,
        util::form,
    },
};

/// Validated localization fields
struct LocalizationParams {
    language: Language,
    description: String,
    policy: Value,
}

pub struct LocalizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocalizationService<'a> {
    /// Creates a new instance of [`LocalizationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the localizations of an accommodation visible to the actor
    pub async fn list(
        &self,
        actor: &Actor,
        accommodation_id: &str,
    ) -> Result<Vec<LocalizationDto>, Error> {
        let accommodation = AccommodationService::new(self.db)
            .get_visible(actor, accommodation_id)
            .await?;

        let localization_repo = LocalizationRepository::new(self.db);
        let localizations = localization_repo
            .get_by_accommodation_id(&accommodation.id)
            .await?;

        Ok(localizations
            .into_iter()
            .map(|localization| to_dto(localization, &accommodation))
            .collect())
    }

    /// Adds a localization to an accommodation the actor may edit
    ///
    /// # Returns
    /// - `Ok(LocalizationDto)` - The created localization
    /// - `Err(Error::ResourceError)` - Accommodation missing or not visible to the actor
    /// - `Err(Error::AccessError)` - Actor may not edit the accommodation
    /// - `Err(Error::ValidationError)` - Bad language, blank description or empty policy
    pub async fn create(
        &self,
        actor: &Actor,
        accommodation_id: &str,
        payload: LocalizationFormDto,
    ) -> Result<LocalizationDto, Error> {
        let accommodation = self.get_editable(actor, accommodation_id).await?;
        let params = validate(payload)?;

        let localization_repo = LocalizationRepository::new(self.db);
        let localization = localization_repo
            .create(
                &accommodation.id,
                params.language,
                params.description,
                params.policy,
            )
            .await?;

        Ok(to_dto(localization, &accommodation))
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        payload: LocalizationFormDto,
    ) -> Result<LocalizationDto, Error> {
        let localization_repo = LocalizationRepository::new(self.db);
        let existing = match localization_repo.get(id).await? {
            Some(localization) => localization,
            None => return Err(ResourceError::not_found("Localization", id).into()),
        };

        let accommodation = self
            .get_editable(actor, &existing.accommodation_id)
            .await?;
        let params = validate(payload)?;

        match localization_repo
            .update(id, params.language, params.description, params.policy)
            .await?
        {
            Some(localization) => Ok(to_dto(localization, &accommodation)),
            None => Err(ResourceError::not_found("Localization", id).into()),
        }
    }

    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<(), Error> {
        let localization_repo = LocalizationRepository::new(self.db);
        let existing = match localization_repo.get(id).await? {
            Some(localization) => localization,
            None => return Err(ResourceError::not_found("Localization", id).into()),
        };

        self.get_editable(actor, &existing.accommodation_id)
            .await?;
        localization_repo.delete(id).await?;

        Ok(())
    }

    async fn get_editable(
        &self,
        actor: &Actor,
        accommodation_id: &str,
    ) -> Result<AccommodationModel, Error> {
        let accommodation = AccommodationService::new(self.db)
            .get_visible(actor, accommodation_id)
            .await?;

        if !policy::can_edit(actor, &accommodation) {
            return Err(AccessError::NotAccommodationOwner {
                user_id: actor.user_id,
                accommodation_id: accommodation.id,
            }
            .into());
        }

        Ok(accommodation)
    }
}

fn validate(payload: LocalizationFormDto) -> Result<LocalizationParams, ValidationError> {
    let mut errors = ValidationError::new();

    let code = payload.language.trim();
    let language = if code.is_empty() {
        errors.add("language", form::REQUIRED);
        None
    } else {
        let language = Language::try_from_value(&code.to_string()).ok();
        if language.is_none() {
            errors.add("language", form::invalid_choice(code));
        }
        language
    };

    let description = payload.description.trim().to_string();
    if description.is_empty() {
        errors.add("description", form::REQUIRED);
    }

    let policy = match payload.policy {
        None | Some(Value::Null) => {
            errors.add("policy", form::REQUIRED);
            None
        }
        Some(Value::Object(map)) if map.is_empty() => {
            errors.add("policy", form::REQUIRED);
            None
        }
        Some(value @ Value::Object(_)) => Some(value),
        Some(_) => {
            errors.add("policy", "Enter a valid JSON object.");
            None
        }
    };

    match (language, policy) {
        (Some(language), Some(policy)) if errors.is_empty() => Ok(LocalizationParams {
            language,
            description,
            policy,
        }),
        _ => Err(errors),
    }
}

/// Human readable label, `Localized {accommodation title} in {language}`
pub fn localization_label(accommodation: &AccommodationModel, language: Language) -> String {
    format!("Localized {} in {}", accommodation.title, language.to_value())
}

fn to_dto(
    localization: LocalizeAccommodationModel,
    accommodation: &AccommodationModel,
) -> LocalizationDto {
    LocalizationDto {
        label: localization_label(accommodation, localization.language),
        id: localization.id,
        accommodation_id: localization.accommodation_id,
        language: localization.language.to_value(),
        description: localization.description,
        policy: localization.policy,
    }
}
