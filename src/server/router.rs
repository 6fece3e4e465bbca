//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is configured to serve interactive API documentation at `/api/docs`. Cross-origin
//! requests are allowed from any origin so browser front ends can call the API.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `bearer_auth` scheme referenced by protected endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /token` - Exchange credentials for a bearer token
/// - `GET /planets`, `POST /planet`, `GET|PUT|DELETE /planet/{planet_id}`
/// - `GET /characters`, `POST /character`, `GET|PUT|DELETE /character/{character_id}`
/// - `GET /users`, `GET /users/favorites`
/// - `POST|DELETE /favorite/planet/{planet_id}`
/// - `POST|DELETE /favorite/character/{character_id}`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, &config.jwt_secret));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Holocron API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Bearer token issuance"),
            (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
            (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
            (name = controller::user::USER_TAG, description = "User API routes"),
            (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::create_token))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::create_planet))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::create_character))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
