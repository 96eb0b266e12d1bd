use crate::routes::{flight, health, journey, not_travelling, root, term, todo, transport};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        term::get_terms,
        term::get_term_by_id,
        term::get_term_filters,
        flight::get_flights,
        flight::create_flight,
        flight::update_flight,
        flight::delete_flight,
        transport::get_transport,
        transport::create_transport,
        transport::update_transport,
        transport::delete_transport,
        not_travelling::get_not_travelling,
        not_travelling::upsert_not_travelling,
        not_travelling::delete_not_travelling,
        journey::get_journeys,
        journey::get_journey_summary,
        todo::get_todos
    ),
    tags(
        (name = "Terms", description = "Static school term catalog"),
        (name = "Flights", description = "Booked flights per term leg"),
        (name = "Transport", description = "Ground transport bookings"),
        (name = "Not travelling", description = "Per-term overrides"),
        (name = "Journeys", description = "Derived travel status per leg"),
        (name = "Todos", description = "Outstanding booking actions"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "School Travel API",
        version = "1.0.0",
        description = "Term dates, flights and transport for two boarding schools",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
