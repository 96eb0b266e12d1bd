use crate::entities::{flights, not_travelling, transport_legs};
use chrono::{NaiveDate, NaiveTime, Utc};
use models::travel::{Direction, NotTravellingRecord, TransportType};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Everything needed to create or replace a flight, minus the id
#[derive(Debug, Clone)]
pub struct FlightDraft {
    pub term_id: String,
    pub direction: Direction,
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

/// Everything needed to create or replace a transport booking, minus the id
#[derive(Debug, Clone)]
pub struct TransportDraft {
    pub term_id: String,
    pub direction: Direction,
    pub transport_type: TransportType,
    pub driver_name: String,
    pub phone_number: String,
    pub license_number: String,
    pub pickup_time: NaiveTime,
    pub notes: Option<String>,
}

pub struct TravelService;

impl TravelService {
    /// Lists flights oldest-first so "first match wins" lookups are stable
    pub async fn list_flights(
        db: &DatabaseConnection,
        term_id: Option<String>,
    ) -> Result<Vec<flights::Model>, DbErr> {
        let mut query = flights::Entity::find().order_by_asc(flights::Column::CreatedAt);
        if let Some(term_id) = term_id {
            query = query.filter(flights::Column::TermId.eq(term_id));
        }
        query.all(db).await
    }

    pub async fn create_flight(
        db: &DatabaseConnection,
        draft: FlightDraft,
    ) -> Result<flights::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let active = flights::ActiveModel {
            id: Set(Uuid::new_v4()),
            term_id: Set(draft.term_id),
            direction: Set(draft.direction.as_str().to_owned()),
            airline: Set(draft.airline),
            flight_number: Set(draft.flight_number),
            departure_airport: Set(draft.departure_airport),
            departure_date: Set(draft.departure_date),
            departure_time: Set(draft.departure_time),
            arrival_airport: Set(draft.arrival_airport),
            arrival_date: Set(draft.arrival_date),
            arrival_time: Set(draft.arrival_time),
            confirmation_code: Set(draft.confirmation_code),
            notes: Set(draft.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }

    /// Replaces a flight's fields; returns None when the id is unknown
    pub async fn update_flight(
        db: &DatabaseConnection,
        id: Uuid,
        draft: FlightDraft,
    ) -> Result<Option<flights::Model>, DbErr> {
        let Some(existing) = flights::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: flights::ActiveModel = existing.into();
        active.term_id = Set(draft.term_id);
        active.direction = Set(draft.direction.as_str().to_owned());
        active.airline = Set(draft.airline);
        active.flight_number = Set(draft.flight_number);
        active.departure_airport = Set(draft.departure_airport);
        active.departure_date = Set(draft.departure_date);
        active.departure_time = Set(draft.departure_time);
        active.arrival_airport = Set(draft.arrival_airport);
        active.arrival_date = Set(draft.arrival_date);
        active.arrival_time = Set(draft.arrival_time);
        active.confirmation_code = Set(draft.confirmation_code);
        active.notes = Set(draft.notes);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(db).await?))
    }

    pub async fn delete_flight(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = flights::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_transport(
        db: &DatabaseConnection,
        term_id: Option<String>,
    ) -> Result<Vec<transport_legs::Model>, DbErr> {
        let mut query =
            transport_legs::Entity::find().order_by_asc(transport_legs::Column::CreatedAt);
        if let Some(term_id) = term_id {
            query = query.filter(transport_legs::Column::TermId.eq(term_id));
        }
        query.all(db).await
    }

    pub async fn create_transport(
        db: &DatabaseConnection,
        draft: TransportDraft,
    ) -> Result<transport_legs::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let active = transport_legs::ActiveModel {
            id: Set(Uuid::new_v4()),
            term_id: Set(draft.term_id),
            direction: Set(draft.direction.as_str().to_owned()),
            transport_type: Set(draft.transport_type.as_str().to_owned()),
            driver_name: Set(draft.driver_name),
            phone_number: Set(draft.phone_number),
            license_number: Set(draft.license_number),
            pickup_time: Set(draft.pickup_time),
            notes: Set(draft.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await
    }

    /// Replaces a transport booking's fields; returns None when the id is unknown
    pub async fn update_transport(
        db: &DatabaseConnection,
        id: Uuid,
        draft: TransportDraft,
    ) -> Result<Option<transport_legs::Model>, DbErr> {
        let Some(existing) = transport_legs::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: transport_legs::ActiveModel = existing.into();
        active.term_id = Set(draft.term_id);
        active.direction = Set(draft.direction.as_str().to_owned());
        active.transport_type = Set(draft.transport_type.as_str().to_owned());
        active.driver_name = Set(draft.driver_name);
        active.phone_number = Set(draft.phone_number);
        active.license_number = Set(draft.license_number);
        active.pickup_time = Set(draft.pickup_time);
        active.notes = Set(draft.notes);
        active.updated_at = Set(Utc::now().naive_utc());

        Ok(Some(active.update(db).await?))
    }

    pub async fn delete_transport(db: &DatabaseConnection, id: Uuid) -> Result<bool, DbErr> {
        let result = transport_legs::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_not_travelling(
        db: &DatabaseConnection,
    ) -> Result<Vec<not_travelling::Model>, DbErr> {
        not_travelling::Entity::find().all(db).await
    }

    /// Inserts or updates the single override row for a term
    pub async fn upsert_not_travelling(
        db: &DatabaseConnection,
        record: NotTravellingRecord,
    ) -> Result<not_travelling::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let existing = not_travelling::Entity::find_by_id(record.term_id.clone())
            .one(db)
            .await?;

        match existing {
            Some(existing) => {
                let mut active: not_travelling::ActiveModel = existing.into();
                active.no_flights = Set(record.no_flights);
                active.no_transport = Set(record.no_transport);
                active.updated_at = Set(now);
                active.update(db).await
            }
            None => {
                let active = not_travelling::ActiveModel {
                    term_id: Set(record.term_id),
                    no_flights: Set(record.no_flights),
                    no_transport: Set(record.no_transport),
                    updated_at: Set(now),
                };
                active.insert(db).await
            }
        }
    }

    pub async fn delete_not_travelling(
        db: &DatabaseConnection,
        term_id: &str,
    ) -> Result<bool, DbErr> {
        let result = not_travelling::Entity::delete_by_id(term_id.to_owned())
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
