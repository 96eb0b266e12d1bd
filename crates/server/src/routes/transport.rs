use crate::dtos::travel::{RecordQueryParams, TransportRequest, TransportResponse};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use database::{
    db::create_connection,
    entities::transport_legs,
    services::travel::{TransportDraft, TravelService},
};
use log::error;
use models::travel::{Direction, TransportType};
use sea_orm::prelude::Uuid;
use std::str::FromStr;

fn to_transport_response(row: transport_legs::Model) -> TransportResponse {
    TransportResponse {
        id: row.id.to_string(),
        term_id: row.term_id,
        direction: row.direction,
        transport_type: row.transport_type,
        driver_name: row.driver_name,
        phone_number: row.phone_number,
        license_number: row.license_number,
        pickup_time: row.pickup_time,
        notes: row.notes,
    }
}

fn to_transport_draft(request: TransportRequest) -> Result<TransportDraft, StatusCode> {
    let direction =
        Direction::from_str(&request.direction).map_err(|_| StatusCode::BAD_REQUEST)?;
    let transport_type =
        TransportType::from_str(&request.transport_type).map_err(|_| StatusCode::BAD_REQUEST)?;

    Ok(TransportDraft {
        term_id: request.term_id,
        direction,
        transport_type,
        driver_name: request.driver_name,
        phone_number: request.phone_number,
        license_number: request.license_number,
        pickup_time: request.pickup_time,
        notes: request.notes,
    })
}

/// List transport bookings, optionally restricted to one term
#[utoipa::path(
    get,
    path = "/transport",
    params(RecordQueryParams),
    responses(
        (status = 200, description = "List of transport bookings", body = Vec<TransportResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transport"
)]
pub async fn get_transport(
    Query(params): Query<RecordQueryParams>,
) -> Result<Json<Vec<TransportResponse>>, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let rows = TravelService::list_transport(&db, params.term_id)
        .await
        .map_err(|e| {
            error!("listing transport failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(rows.into_iter().map(to_transport_response).collect()))
}

/// Record a transport booking
#[utoipa::path(
    post,
    path = "/transport",
    request_body = TransportRequest,
    responses(
        (status = 201, description = "Transport booking created", body = TransportResponse),
        (status = 400, description = "Invalid direction or transport type"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transport"
)]
pub async fn create_transport(
    Json(request): Json<TransportRequest>,
) -> Result<(StatusCode, Json<TransportResponse>), StatusCode> {
    let draft = to_transport_draft(request)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let row = TravelService::create_transport(&db, draft)
        .await
        .map_err(|e| {
            error!("creating transport failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((StatusCode::CREATED, Json(to_transport_response(row))))
}

/// Replace a transport booking's details
#[utoipa::path(
    put,
    path = "/transport/{id}",
    params(
        ("id" = Uuid, Path, description = "Transport booking ID")
    ),
    request_body = TransportRequest,
    responses(
        (status = 200, description = "Transport booking updated", body = TransportResponse),
        (status = 400, description = "Invalid direction or transport type"),
        (status = 404, description = "Transport booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transport"
)]
pub async fn update_transport(
    Path(id): Path<Uuid>,
    Json(request): Json<TransportRequest>,
) -> Result<Json<TransportResponse>, StatusCode> {
    let draft = to_transport_draft(request)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let updated = TravelService::update_transport(&db, id, draft)
        .await
        .map_err(|e| {
            error!("updating transport {id} failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match updated {
        Some(row) => Ok(Json(to_transport_response(row))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Delete a transport booking
#[utoipa::path(
    delete,
    path = "/transport/{id}",
    params(
        ("id" = Uuid, Path, description = "Transport booking ID")
    ),
    responses(
        (status = 204, description = "Transport booking deleted"),
        (status = 404, description = "Transport booking not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Transport"
)]
pub async fn delete_transport(Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let deleted = TravelService::delete_transport(&db, id).await.map_err(|e| {
        error!("deleting transport {id} failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
