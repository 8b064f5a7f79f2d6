use crate::server::model::db::UserModel;

/// Name of the group self-registered accommodation owners are placed into
pub static PROPERTY_OWNERS_GROUP: &str = "Property Owners";

/// The authenticated user performing a request, with the rights relevant to the ownership policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
    pub is_staff: bool,
    pub is_superuser: bool,
    /// Member of the [`PROPERTY_OWNERS_GROUP`] group
    pub is_owner: bool,
}

impl Actor {
    pub fn from_user(user: &UserModel, is_owner: bool) -> Self {
        Self {
            user_id: user.id,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            is_owner,
        }
    }
}
