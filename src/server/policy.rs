//! Ownership and visibility rules for accommodations.
//!
//! Every controller and service asks these functions instead of deciding access on its own:
//! owners only see and change what they own, superusers bypass the owner check entirely.

use sea_orm::ActiveValue;

use crate::server::model::{actor::Actor, db::AccommodationModel};

/// The set of accommodations an actor may list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    All,
    OwnedBy(i32),
}

/// Owner group members are restricted to their own records, everyone else sees every record
pub fn visibility(actor: &Actor) -> Visibility {
    if actor.is_owner {
        Visibility::OwnedBy(actor.user_id)
    } else {
        Visibility::All
    }
}

pub fn can_view(actor: &Actor, accommodation: &AccommodationModel) -> bool {
    match visibility(actor) {
        Visibility::All => true,
        Visibility::OwnedBy(user_id) => accommodation.user_id == Some(user_id),
    }
}

pub fn can_edit(actor: &Actor, accommodation: &AccommodationModel) -> bool {
    actor.is_superuser || accommodation.user_id == Some(actor.user_id)
}

pub fn can_delete(actor: &Actor, accommodation: &AccommodationModel) -> bool {
    can_edit(actor, accommodation)
}

/// Whether the actor may assign an accommodation to `owner_id`
pub fn can_assign_owner(actor: &Actor, owner_id: i32) -> bool {
    actor.is_superuser || owner_id == actor.user_id
}

/// Sets the owner to the acting user when none is set; an existing owner is never replaced
pub fn assign_owner(actor: &Actor, user_id: &mut ActiveValue<Option<i32>>) {
    let has_owner = matches!(
        user_id,
        ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_))
    );

    if !has_owner {
        *user_id = ActiveValue::Set(Some(actor.user_id));
    }
}

/// Staff, superusers and property owners may use the administration API
pub fn can_access_admin(actor: &Actor) -> bool {
    actor.is_staff || actor.is_superuser || actor.is_owner
}

/// Locations are shared reference data, only staff and superusers may change them
pub fn can_manage_locations(actor: &Actor) -> bool {
    actor.is_staff || actor.is_superuser
}

/// Activating accounts is reserved to superusers
pub fn can_manage_users(actor: &Actor) -> bool {
    actor.is_superuser
}
