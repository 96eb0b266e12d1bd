mod doc;
mod dtos;
mod routes;
mod utils;

use axum::{
    Router,
    routing::{delete, get, put},
};
use doc::ApiDoc;
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utils::shutdown::shutdown_signal;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/terms", get(routes::term::get_terms))
        .route("/terms/filters", get(routes::term::get_term_filters))
        .route("/terms/{id}", get(routes::term::get_term_by_id))
        .route(
            "/flights",
            get(routes::flight::get_flights).post(routes::flight::create_flight),
        )
        .route(
            "/flights/{id}",
            put(routes::flight::update_flight).delete(routes::flight::delete_flight),
        )
        .route(
            "/transport",
            get(routes::transport::get_transport).post(routes::transport::create_transport),
        )
        .route(
            "/transport/{id}",
            put(routes::transport::update_transport)
                .delete(routes::transport::delete_transport),
        )
        .route(
            "/not-travelling",
            get(routes::not_travelling::get_not_travelling)
                .put(routes::not_travelling::upsert_not_travelling),
        )
        .route(
            "/not-travelling/{term_id}",
            delete(routes::not_travelling::delete_not_travelling),
        )
        .route("/journeys", get(routes::journey::get_journeys))
        .route("/journeys/summary", get(routes::journey::get_journey_summary))
        .route("/todos", get(routes::todo::get_todos))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
