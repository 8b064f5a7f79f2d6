pub use super::accommodation::Entity as Accommodation;
pub use super::inventory_group::Entity as InventoryGroup;
pub use super::inventory_user::Entity as InventoryUser;
pub use super::inventory_user_group::Entity as InventoryUserGroup;
pub use super::localize_accommodation::Entity as LocalizeAccommodation;
pub use super::location::Entity as Location;
