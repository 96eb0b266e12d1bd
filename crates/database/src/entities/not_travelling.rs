use models::travel::NotTravellingRecord;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// At most one row per term, keyed by the term id
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "not_travelling")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub term_id: String,
    pub no_flights: bool,
    pub no_transport: bool,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NotTravellingRecord {
    fn from(row: Model) -> Self {
        NotTravellingRecord {
            term_id: row.term_id,
            no_flights: row.no_flights,
            no_transport: row.no_transport,
        }
    }
}
