//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so services and controllers don't have to spell
//! out the `entity` crate paths.

/// A node of the continent → country → state → city hierarchy.
pub type LocationModel = entity::location::Model;

/// An accommodation listing; `user_id` is the owning user, if any.
pub type AccommodationModel = entity::accommodation::Model;

/// Per-language description and policy of an accommodation.
pub type LocalizeAccommodationModel = entity::localize_accommodation::Model;

/// A user account. Self-registered accounts start with `is_active = false`.
pub type UserModel = entity::inventory_user::Model;

/// A named group of users, e.g. `Property Owners`.
pub type GroupModel = entity::inventory_group::Model;
