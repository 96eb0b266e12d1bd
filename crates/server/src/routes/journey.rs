use crate::dtos::journey::{JourneyQueryParams, JourneyResponse, StatsResponse, SummaryResponse};
use axum::{Json, extract::Query, http::StatusCode};
use chrono::Utc;
use database::{db::create_connection, services::travel::TravelService};
use log::error;
use models::{
    catalog,
    journey::{Journey, build_journeys},
    summary::summarize,
    term::School,
    travel::{FlightLeg, NotTravellingRecord, TransportLeg},
};
use sea_orm::DatabaseConnection;
use std::str::FromStr;

/// One in-memory snapshot of the three record stores, converted to domain
/// types. The derivation core only ever sees these arrays.
pub(crate) async fn fetch_snapshot(
    db: &DatabaseConnection,
) -> Result<(Vec<FlightLeg>, Vec<TransportLeg>, Vec<NotTravellingRecord>), StatusCode> {
    let flights = TravelService::list_flights(db, None).await.map_err(|e| {
        error!("listing flights failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let transport = TravelService::list_transport(db, None).await.map_err(|e| {
        error!("listing transport failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let overrides = TravelService::list_not_travelling(db).await.map_err(|e| {
        error!("listing overrides failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok((
        flights.into_iter().map(Into::into).collect(),
        transport.into_iter().map(Into::into).collect(),
        overrides.into_iter().map(Into::into).collect(),
    ))
}

pub(crate) fn parse_school(school: Option<String>) -> Result<Option<School>, StatusCode> {
    match school {
        Some(school) => School::from_str(&school)
            .map(Some)
            .map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(None),
    }
}

fn to_journey_response(journey: &Journey<'_>) -> JourneyResponse {
    JourneyResponse {
        id: journey.id.clone(),
        term_id: journey.term.id.clone(),
        term_name: journey.term.name.clone(),
        school: journey.school.as_str().to_owned(),
        direction: journey.direction.as_str().to_owned(),
        status: journey.status.as_str().to_owned(),
        departure_date: journey.departure_date(),
        flight_id: journey.flight.map(|f| f.id.clone()),
        transport_id: journey.transport.map(|t| t.id.clone()),
    }
}

/// List derived journeys (two per term) with their booking status
#[utoipa::path(
    get,
    path = "/journeys",
    params(JourneyQueryParams),
    responses(
        (status = 200, description = "Derived journeys", body = Vec<JourneyResponse>),
        (status = 400, description = "Unknown school"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Journeys"
)]
pub async fn get_journeys(
    Query(params): Query<JourneyQueryParams>,
) -> Result<Json<Vec<JourneyResponse>>, StatusCode> {
    let school = parse_school(params.school)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let (flights, transport, overrides) = fetch_snapshot(&db).await?;

    let terms = catalog::all_terms();
    let mut journeys = build_journeys(&terms, &flights, &transport, &overrides, school);
    journeys.sort_by(|a, b| {
        (a.departure_date(), a.direction, &a.term.id)
            .cmp(&(b.departure_date(), b.direction, &b.term.id))
    });

    Ok(Json(journeys.iter().map(to_journey_response).collect()))
}

/// Aggregate upcoming journeys into counts plus the next departure
#[utoipa::path(
    get,
    path = "/journeys/summary",
    params(JourneyQueryParams),
    responses(
        (status = 200, description = "Stats and the next upcoming journey", body = SummaryResponse),
        (status = 400, description = "Unknown school"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Journeys"
)]
pub async fn get_journey_summary(
    Query(params): Query<JourneyQueryParams>,
) -> Result<Json<SummaryResponse>, StatusCode> {
    let school = parse_school(params.school)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let (flights, transport, overrides) = fetch_snapshot(&db).await?;

    let terms = catalog::all_terms();
    let journeys = build_journeys(&terms, &flights, &transport, &overrides, school);

    // The clock is read here, at the edge; the core takes `now` explicitly
    let summary = summarize(&journeys, Utc::now().date_naive());

    Ok(Json(SummaryResponse {
        stats: StatsResponse {
            total: summary.stats.total,
            complete: summary.stats.complete,
            needs_transport: summary.stats.needs_transport,
            not_booked: summary.stats.not_booked,
        },
        next_journey: summary.next_journey.as_ref().map(to_journey_response),
    }))
}
