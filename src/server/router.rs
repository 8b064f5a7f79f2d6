//! HTTP routing and OpenAPI documentation configuration.
//!
//! All endpoints are registered here together with their utoipa specifications. Swagger UI
//! serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Landing document
/// - `POST /api/auth/signup`, `POST /api/auth/login`, `GET /api/auth/logout`,
///   `GET /api/auth/user` - Account flow
/// - `/api/admin/locations[/{id}]` - Location administration
/// - `/api/admin/accommodations[/{id}]` - Accommodation administration, owner filtered
/// - `/api/admin/accommodations/{id}/localizations`, `/api/admin/localizations/{id}` -
///   Localization administration
/// - `GET /api/admin/users/pending`, `POST /api/admin/users/{id}/activate` - Account approval
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db)).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Inventory", description = "Accommodation inventory API"), tags(
        (name = controller::index::INDEX_TAG, description = "Service information"),
        (name = controller::auth::AUTH_TAG, description = "Signup, login and logout"),
        (name = controller::location::LOCATION_TAG, description = "Location administration"),
        (name = controller::accommodation::ACCOMMODATION_TAG, description = "Accommodation administration"),
        (name = controller::localization::LOCALIZATION_TAG, description = "Localized accommodation content"),
        (name = controller::user::USER_TAG, description = "Account approval"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::index::index))
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::location::list_locations,
            controller::location::create_location
        ))
        .routes(routes!(
            controller::location::get_location,
            controller::location::update_location,
            controller::location::delete_location
        ))
        .routes(routes!(
            controller::accommodation::list_accommodations,
            controller::accommodation::create_accommodation
        ))
        .routes(routes!(
            controller::accommodation::get_accommodation,
            controller::accommodation::update_accommodation,
            controller::accommodation::delete_accommodation
        ))
        .routes(routes!(
            controller::localization::list_localizations,
            controller::localization::create_localization
        ))
        .routes(routes!(
            controller::localization::update_localization,
            controller::localization::delete_localization
        ))
        .routes(routes!(controller::user::get_pending_users))
        .routes(routes!(controller::user::activate_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
