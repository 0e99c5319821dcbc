//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PaginatedResponse};
use super::modules::{health, reservations, rooms, users};
use super::request_id::request_id_middleware;
use crate::application::{ReservationService, RoomService, UserService};
use crate::domain::RepositoryProvider;

/// Swagger UI mount point
pub const APIDOC_PATH: &str = "/apidoc";
/// OpenAPI JSON document
pub const OPENAPI_JSON_PATH: &str = "/apidoc-json";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Rooms
        rooms::create_room,
        rooms::list_rooms,
        rooms::get_room,
        rooms::update_room,
        rooms::delete_room,
        // Reservations
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<users::UserDto>,
            PaginatedResponse<rooms::RoomDto>,
            PaginatedResponse<reservations::ReservationDto>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            // Rooms
            rooms::RoomDto,
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            // Reservations
            reservations::ReservationDto,
            reservations::CreateReservationRequest,
            reservations::UpdateReservationRequest,
            reservations::DeleteReservationRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service and database liveness"),
        (name = "Users", description = "People who reserve rooms or attend meetings"),
        (name = "Rooms", description = "Bookable meeting rooms"),
        (name = "Reservations", description = "Room bookings with overlap and ownership checks"),
    ),
    info(
        title = "Roombook API",
        version = "1.0.0",
        description = "Meeting-room reservation service",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    started_at: Instant,
) -> Router {
    let user_state = users::UserHandlerState {
        user_service: Arc::new(UserService::new(repos.clone())),
    };
    let room_state = rooms::RoomHandlerState {
        room_service: Arc::new(RoomService::new(repos.clone())),
    };
    let reservation_state = reservations::ReservationHandlerState {
        reservation_service: Arc::new(ReservationService::new(repos)),
    };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(started_at),
    };

    let user_routes = Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route(
            "/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(user_state);

    let room_routes = Router::new()
        .route("/", post(rooms::create_room).get(rooms::list_rooms))
        .route(
            "/{id}",
            get(rooms::get_room)
                .patch(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .with_state(room_state);

    let reservation_routes = Router::new()
        .route(
            "/",
            post(reservations::create_reservation).get(reservations::list_reservations),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .patch(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
        .with_state(reservation_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new(APIDOC_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/users", user_routes)
        .nest("/rooms", room_routes)
        .nest("/reservations", reservation_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
