use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{actor::Actor, app::AppState, session::user::SessionUserId},
        policy,
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID exists in session but not found in
///   database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Resolves the session user into an actor allowed to use the administration API
///
/// Sessions of deleted or deactivated accounts are cleared.
///
/// # Returns
/// - `Ok(Actor)`: Active staff member, superuser or property owner
/// - `Err(Error::AuthError(UserNotInSession))`: Nobody is logged in
/// - `Err(Error::AuthError(UserNotInDatabase | UserInactive))`: Stale session
/// - `Err(Error::AuthError(AdminAccessRequired))`: Logged in without admin rights
pub async fn get_actor_from_session(state: &AppState, session: &Session) -> Result<Actor, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let actor = match UserService::new(&state.db).get_actor(user_id).await {
        Ok(actor) => actor,
        Err(
            err @ Error::AuthError(AuthError::UserNotInDatabase(_) | AuthError::UserInactive(_)),
        ) => {
            session.clear().await;

            tracing::debug!(
                "Session cleared for user ID {} which is no longer an active account",
                user_id
            );

            return Err(err);
        }
        Err(err) => return Err(err),
    };

    if !policy::can_access_admin(&actor) {
        return Err(Error::AuthError(AuthError::AdminAccessRequired(user_id)));
    }

    Ok(actor)
}
