use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct FlightResponse {
    pub id: String,
    pub term_id: String,
    pub direction: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_airport: String,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub confirmation_code: Option<String>,
    pub notes: Option<String>,
}

/// Body for creating or replacing a flight
#[derive(Debug, Deserialize, ToSchema)]
pub struct FlightRequest {
    pub term_id: String,
    /// "outbound" or "return"
    pub direction: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_airport: String,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub confirmation_code: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransportResponse {
    pub id: String,
    pub term_id: String,
    pub direction: String,
    pub transport_type: String,
    pub driver_name: String,
    pub phone_number: String,
    pub license_number: String,
    pub pickup_time: NaiveTime,
    pub notes: Option<String>,
}

/// Body for creating or replacing a transport booking
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransportRequest {
    pub term_id: String,
    /// "outbound" or "return"
    pub direction: String,
    /// "school-coach" or "taxi"
    pub transport_type: String,
    pub driver_name: String,
    pub phone_number: String,
    pub license_number: String,
    pub pickup_time: NaiveTime,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotTravellingResponse {
    pub term_id: String,
    pub no_flights: bool,
    pub no_transport: bool,
}

/// Body for the per-term override, upserted by term id
#[derive(Debug, Deserialize, ToSchema)]
pub struct NotTravellingRequest {
    pub term_id: String,
    #[serde(default)]
    pub no_flights: bool,
    #[serde(default)]
    pub no_transport: bool,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RecordQueryParams {
    /// Restrict to records attached to one term
    pub term_id: Option<String>,
}
