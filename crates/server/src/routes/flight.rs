use crate::dtos::travel::{FlightRequest, FlightResponse, RecordQueryParams};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::flights,
    services::travel::{FlightDraft, TravelService},
};
use log::error;
use models::travel::Direction;
use sea_orm::prelude::Uuid;
use std::str::FromStr;

fn to_flight_response(row: flights::Model) -> FlightResponse {
    FlightResponse {
        id: row.id.to_string(),
        term_id: row.term_id,
        direction: row.direction,
        airline: row.airline,
        flight_number: row.flight_number,
        departure_airport: row.departure_airport,
        departure_date: row.departure_date,
        departure_time: row.departure_time,
        arrival_airport: row.arrival_airport,
        arrival_date: row.arrival_date,
        arrival_time: row.arrival_time,
        confirmation_code: row.confirmation_code,
        notes: row.notes,
    }
}

fn to_flight_draft(request: FlightRequest) -> Result<FlightDraft, StatusCode> {
    let direction =
        Direction::from_str(&request.direction).map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(FlightDraft {
        term_id: request.term_id,
        direction,
        airline: request.airline,
        flight_number: request.flight_number,
        departure_airport: request.departure_airport,
        departure_date: request.departure_date,
        departure_time: request.departure_time,
        arrival_airport: request.arrival_airport,
        arrival_date: request.arrival_date,
        arrival_time: request.arrival_time,
        confirmation_code: request.confirmation_code,
        notes: request.notes,
    })
}

/// List booked flights, optionally restricted to one term
#[utoipa::path(
    get,
    path = "/flights",
    params(RecordQueryParams),
    responses(
        (status = 200, description = "List of flights", body = Vec<FlightResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Flights"
)]
pub async fn get_flights(
    Query(params): Query<RecordQueryParams>,
) -> Result<Json<Vec<FlightResponse>>, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let rows = TravelService::list_flights(&db, params.term_id)
        .await
        .map_err(|e| {
            error!("listing flights failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(rows.into_iter().map(to_flight_response).collect()))
}

/// Record a booked flight
#[utoipa::path(
    post,
    path = "/flights",
    request_body = FlightRequest,
    responses(
        (status = 201, description = "Flight created", body = FlightResponse),
        (status = 400, description = "Invalid direction"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Flights"
)]
pub async fn create_flight(
    Json(request): Json<FlightRequest>,
) -> Result<(StatusCode, Json<FlightResponse>), StatusCode> {
    let draft = to_flight_draft(request)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let row = TravelService::create_flight(&db, draft).await.map_err(|e| {
        error!("creating flight failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((StatusCode::CREATED, Json(to_flight_response(row))))
}

/// Replace a booked flight's details
#[utoipa::path(
    put,
    path = "/flights/{id}",
    params(
        ("id" = Uuid, Path, description = "Flight ID")
    ),
    request_body = FlightRequest,
    responses(
        (status = 200, description = "Flight updated", body = FlightResponse),
        (status = 400, description = "Invalid direction"),
        (status = 404, description = "Flight not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Flights"
)]
pub async fn update_flight(
    Path(id): Path<Uuid>,
    Json(request): Json<FlightRequest>,
) -> Result<Json<FlightResponse>, StatusCode> {
    let draft = to_flight_draft(request)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let updated = TravelService::update_flight(&db, id, draft)
        .await
        .map_err(|e| {
            error!("updating flight {id} failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match updated {
        Some(row) => Ok(Json(to_flight_response(row))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a booked flight
#[utoipa::path(
    delete,
    path = "/flights/{id}",
    params(
        ("id" = Uuid, Path, description = "Flight ID")
    ),
    responses(
        (status = 204, description = "Flight deleted"),
        (status = 404, description = "Flight not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Flights"
)]
pub async fn delete_flight(Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let deleted = TravelService::delete_flight(&db, id).await.map_err(|e| {
        error!("deleting flight {id} failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
