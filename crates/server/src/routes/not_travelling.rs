use crate::dtos::travel::{NotTravellingRequest, NotTravellingResponse};
use axum::{Json, extract::Path, http::StatusCode};
use database::{db::create_connection, entities::not_travelling, services::travel::TravelService};
use log::error;
use models::travel::NotTravellingRecord;

fn to_not_travelling_response(row: not_travelling::Model) -> NotTravellingResponse {
    NotTravellingResponse {
        term_id: row.term_id,
        no_flights: row.no_flights,
        no_transport: row.no_transport,
    }
}

/// List per-term not-travelling overrides
#[utoipa::path(
    get,
    path = "/not-travelling",
    responses(
        (status = 200, description = "List of overrides", body = Vec<NotTravellingResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Not travelling"
)]
pub async fn get_not_travelling() -> Result<Json<Vec<NotTravellingResponse>>, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let rows = TravelService::list_not_travelling(&db).await.map_err(|e| {
        error!("listing overrides failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(
        rows.into_iter().map(to_not_travelling_response).collect(),
    ))
}

/// Create or update the override for a term
#[utoipa::path(
    put,
    path = "/not-travelling",
    request_body = NotTravellingRequest,
    responses(
        (status = 200, description = "Override stored", body = NotTravellingResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Not travelling"
)]
pub async fn upsert_not_travelling(
    Json(request): Json<NotTravellingRequest>,
) -> Result<Json<NotTravellingResponse>, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let record = NotTravellingRecord {
        term_id: request.term_id,
        no_flights: request.no_flights,
        no_transport: request.no_transport,
    };

    let row = TravelService::upsert_not_travelling(&db, record)
        .await
        .map_err(|e| {
            error!("storing override failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(to_not_travelling_response(row)))
}

/// Remove the override for a term
#[utoipa::path(
    delete,
    path = "/not-travelling/{term_id}",
    params(
        ("term_id" = String, Path, description = "Term ID")
    ),
    responses(
        (status = 204, description = "Override removed"),
        (status = 404, description = "No override for this term"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Not travelling"
)]
pub async fn delete_not_travelling(Path(term_id): Path<String>) -> Result<StatusCode, StatusCode> {
    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let deleted = TravelService::delete_not_travelling(&db, &term_id)
        .await
        .map_err(|e| {
            error!("removing override for {term_id} failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
