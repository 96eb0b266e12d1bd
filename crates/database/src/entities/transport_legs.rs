use models::travel::{Direction, TransportLeg, TransportType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transport_legs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub term_id: String,
    pub direction: String,      // "outbound" or "return"
    pub transport_type: String, // "school-coach" or "taxi"
    pub driver_name: String,
    pub phone_number: String,
    pub license_number: String,
    pub pickup_time: Time,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TransportLeg {
    fn from(row: Model) -> Self {
        TransportLeg {
            id: row.id.to_string(),
            term_id: row.term_id,
            direction: Direction::from_str(&row.direction).unwrap_or(Direction::Outbound),
            transport_type: TransportType::from_str(&row.transport_type)
                .unwrap_or(TransportType::Taxi),
            driver_name: row.driver_name,
            phone_number: row.phone_number,
            license_number: row.license_number,
            pickup_time: row.pickup_time,
            notes: row.notes,
        }
    }
}
