use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "inventory:user:id";

/// ID of the logged in user
#[derive(Default, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert user ID into session, cycling the session ID to prevent fixation
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.cycle_id().await?;
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id))
    }
}
