use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// One directional half of a term's travel
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Leaving school (keyed to the term start)
    #[strum(serialize = "outbound")]
    Outbound,
    /// Arriving back at school (keyed to the term end)
    #[strum(serialize = "return")]
    Return,
}

impl Direction {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// An airport plus a local date and time, one end of a flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPoint {
    /// IATA code (e.g. "LHR")
    pub airport: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// A booked flight for one leg of a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub id: String,
    pub term_id: String,
    pub direction: Direction,
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightPoint,
    pub arrival: FlightPoint,
    pub confirmation_code: Option<String>,
    pub notes: Option<String>,
}

/// The kind of ground transport booked
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum TransportType {
    #[strum(serialize = "school-coach")]
    SchoolCoach,
    #[strum(serialize = "taxi")]
    Taxi,
}

impl TransportType {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A ground-transport booking for one leg of a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    pub id: String,
    pub term_id: String,
    pub direction: Direction,
    pub transport_type: TransportType,
    pub driver_name: String,
    pub phone_number: String,
    pub license_number: String,
    pub pickup_time: NaiveTime,
    pub notes: Option<String>,
}

/// Per-term override suppressing the need for flights and/or transport.
/// At most one per term; upserted by term id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotTravellingRecord {
    pub term_id: String,
    #[serde(default)]
    pub no_flights: bool,
    #[serde(default)]
    pub no_transport: bool,
}
