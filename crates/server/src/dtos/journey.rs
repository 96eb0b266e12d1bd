use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct JourneyResponse {
    pub id: String,
    pub term_id: String,
    pub term_name: String,
    pub school: String,
    pub direction: String,
    pub status: String,
    pub departure_date: NaiveDate,
    pub flight_id: Option<String>,
    pub transport_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total: u64,
    pub complete: u64,
    pub needs_transport: u64,
    pub not_booked: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub stats: StatsResponse,
    pub next_journey: Option<JourneyResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    pub id: String,
    pub kind: String,
    pub term_id: String,
    pub school: String,
    pub term_name: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub urgency: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct JourneyQueryParams {
    /// Restrict to one school ("oakfield" or "birchwood")
    pub school: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TodoQueryParams {
    /// Restrict to one school ("oakfield" or "birchwood")
    pub school: Option<String>,
    /// How far ahead to look for unbooked terms (default 12)
    pub horizon_months: Option<u32>,
}
