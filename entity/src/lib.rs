pub mod prelude;

pub mod accommodation;
pub mod inventory_group;
pub mod inventory_user;
pub mod inventory_user_group;
pub mod localize_accommodation;
pub mod location;
