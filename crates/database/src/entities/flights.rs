use models::travel::{Direction, FlightLeg, FlightPoint};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub term_id: String,
    pub direction: String, // "outbound" or "return"
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_date: Date,
    pub departure_time: Time,
    pub arrival_airport: String,
    pub arrival_date: Date,
    pub arrival_time: Time,
    pub confirmation_code: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FlightLeg {
    fn from(row: Model) -> Self {
        FlightLeg {
            id: row.id.to_string(),
            term_id: row.term_id,
            direction: Direction::from_str(&row.direction).unwrap_or(Direction::Outbound),
            airline: row.airline,
            flight_number: row.flight_number,
            departure: FlightPoint {
                airport: row.departure_airport,
                date: row.departure_date,
                time: row.departure_time,
            },
            arrival: FlightPoint {
                airport: row.arrival_airport,
                date: row.arrival_date,
                time: row.arrival_time,
            },
            confirmation_code: row.confirmation_code,
            notes: row.notes,
        }
    }
}
