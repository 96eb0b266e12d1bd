use crate::{
    term::{School, Term},
    travel::{Direction, FlightLeg, NotTravellingRecord, TransportLeg},
};
use chrono::NaiveDate;
use serde::Serialize;
use strum::{AsRefStr, EnumString, IntoEnumIterator};

/// The derived booking status of one journey
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyStatus {
    /// A not-travelling override suppresses this leg entirely
    #[strum(serialize = "staying")]
    Staying,
    /// Flight booked and transport booked (or not required)
    #[strum(serialize = "booked")]
    Booked,
    /// Flight booked but no ground transport arranged
    #[strum(serialize = "needs-transport")]
    NeedsTransport,
    /// No flight booked
    #[strum(serialize = "needs-flight")]
    NeedsFlight,
}

impl JourneyStatus {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// One directional leg of a term's travel with its matched records and
/// derived status. Owns nothing: it borrows the term and records supplied
/// to [`build_journeys`] and is rebuilt from scratch on every call.
#[derive(Debug, Clone, Serialize)]
pub struct Journey<'a> {
    /// Synthesized as "{term_id}-{direction}"
    pub id: String,
    pub term: &'a Term,
    pub direction: Direction,
    pub flight: Option<&'a FlightLeg>,
    pub transport: Option<&'a TransportLeg>,
    pub school: School,
    pub status: JourneyStatus,
}

impl Journey<'_> {
    /// The date this journey departs: the booked flight's departure date
    /// when one exists, otherwise the term boundary for the direction.
    pub fn departure_date(&self) -> NaiveDate {
        match self.flight {
            Some(flight) => flight.departure.date,
            None => match self.direction {
                Direction::Outbound => self.term.start_date,
                Direction::Return => self.term.end_date,
            },
        }
    }
}

/// A record attached to one directional leg of a term
trait LegRecord {
    fn term_id(&self) -> &str;
    fn direction(&self) -> Direction;
}

impl LegRecord for FlightLeg {
    fn term_id(&self) -> &str {
        &self.term_id
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

impl LegRecord for TransportLeg {
    fn term_id(&self) -> &str {
        &self.term_id
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

/// Picks the record for a (term, direction) pair. The data model tolerates
/// duplicates; the earliest record in store order wins.
fn first_match<'a, T: LegRecord>(
    records: &'a [T],
    term_id: &str,
    direction: Direction,
) -> Option<&'a T> {
    records
        .iter()
        .find(|record| record.term_id() == term_id && record.direction() == direction)
}

fn status_for_leg(
    flight: Option<&FlightLeg>,
    transport: Option<&TransportLeg>,
    override_record: Option<&NotTravellingRecord>,
) -> JourneyStatus {
    let no_flights = override_record.is_some_and(|r| r.no_flights);
    let no_transport = override_record.is_some_and(|r| r.no_transport);

    if no_flights {
        JourneyStatus::Staying
    } else if flight.is_some() && (transport.is_some() || no_transport) {
        JourneyStatus::Booked
    } else if flight.is_some() {
        JourneyStatus::NeedsTransport
    } else {
        JourneyStatus::NeedsFlight
    }
}

/// Derives up to two journeys (outbound and return) for every term matching
/// the optional school filter.
///
/// This is a pure reducer over its inputs: it applies no temporal filter,
/// validates no dates, and never fails. Missing records fold into the
/// status rather than surfacing as errors.
pub fn build_journeys<'a>(
    terms: &'a [Term],
    flights: &'a [FlightLeg],
    transport: &'a [TransportLeg],
    not_travelling: &'a [NotTravellingRecord],
    school: Option<School>,
) -> Vec<Journey<'a>> {
    let mut journeys = Vec::new();

    for term in terms {
        if let Some(school) = school
            && term.school != school
        {
            continue;
        }
        if !term.term_type.requires_travel() {
            continue;
        }

        let override_record = not_travelling.iter().find(|r| r.term_id == term.id);

        for direction in Direction::iter() {
            let flight = first_match(flights, &term.id, direction);
            let transport = first_match(transport, &term.id, direction);

            journeys.push(Journey {
                id: format!("{}-{}", term.id, direction.as_str()),
                term,
                direction,
                flight,
                transport,
                school: term.school,
                status: status_for_leg(flight, transport, override_record),
            });
        }
    }

    journeys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::TermType;
    use crate::travel::{FlightPoint, TransportType};
    use chrono::NaiveTime;

    fn half_term() -> Term {
        Term {
            id: "t1".to_owned(),
            school: School::Oakfield,
            name: "Spring Half Term".to_owned(),
            term_type: TermType::HalfTerm,
            start_date: NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
            academic_year: "2025-2026".to_owned(),
        }
    }

    fn outbound_flight(term_id: &str) -> FlightLeg {
        FlightLeg {
            id: "f1".to_owned(),
            term_id: term_id.to_owned(),
            direction: Direction::Outbound,
            airline: "British Airways".to_owned(),
            flight_number: "BA107".to_owned(),
            departure: FlightPoint {
                airport: "LHR".to_owned(),
                date: NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
                time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            },
            arrival: FlightPoint {
                airport: "DXB".to_owned(),
                date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
                time: NaiveTime::from_hms_opt(0, 25, 0).unwrap(),
            },
            confirmation_code: Some("ABC123".to_owned()),
            notes: None,
        }
    }

    fn outbound_taxi(term_id: &str) -> TransportLeg {
        TransportLeg {
            id: "tr1".to_owned(),
            term_id: term_id.to_owned(),
            direction: Direction::Outbound,
            transport_type: TransportType::Taxi,
            driver_name: "D. Patel".to_owned(),
            phone_number: "+44 7700 900123".to_owned(),
            license_number: "PCO 45678".to_owned(),
            pickup_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_stores_yield_needs_flight_everywhere() {
        let terms = vec![half_term()];
        let journeys = build_journeys(&terms, &[], &[], &[], None);

        assert_eq!(journeys.len(), 2);
        for journey in &journeys {
            assert_eq!(journey.status, JourneyStatus::NeedsFlight);
            assert!(journey.flight.is_none());
            assert!(journey.transport.is_none());
        }
    }

    #[test]
    fn test_journey_ids_and_directions() {
        let terms = vec![half_term()];
        let journeys = build_journeys(&terms, &[], &[], &[], None);

        assert_eq!(journeys[0].id, "t1-outbound");
        assert_eq!(journeys[0].direction, Direction::Outbound);
        assert_eq!(journeys[1].id, "t1-return");
        assert_eq!(journeys[1].direction, Direction::Return);
    }

    #[test]
    fn test_flight_and_transport_make_a_leg_booked() {
        let terms = vec![half_term()];
        let flights = vec![outbound_flight("t1")];
        let transport = vec![outbound_taxi("t1")];
        let journeys = build_journeys(&terms, &flights, &transport, &[], None);

        assert_eq!(journeys[0].status, JourneyStatus::Booked);
        assert_eq!(journeys[0].flight.unwrap().id, "f1");
        assert_eq!(journeys[0].transport.unwrap().id, "tr1");
    }

    #[test]
    fn test_flight_without_transport_needs_transport() {
        let terms = vec![half_term()];
        let flights = vec![outbound_flight("t1")];
        let journeys = build_journeys(&terms, &flights, &[], &[], None);

        // The outbound leg gains a flight; the return leg is unaffected
        assert_eq!(journeys[0].status, JourneyStatus::NeedsTransport);
        assert_eq!(journeys[1].status, JourneyStatus::NeedsFlight);
    }

    #[test]
    fn test_no_transport_override_completes_a_flight_only_leg() {
        let terms = vec![half_term()];
        let flights = vec![outbound_flight("t1")];
        let not_travelling = vec![NotTravellingRecord {
            term_id: "t1".to_owned(),
            no_flights: false,
            no_transport: true,
        }];
        let journeys = build_journeys(&terms, &flights, &[], &not_travelling, None);

        assert_eq!(journeys[0].status, JourneyStatus::Booked);
        // No flight on the return leg, so the override does not complete it
        assert_eq!(journeys[1].status, JourneyStatus::NeedsFlight);
    }

    #[test]
    fn test_no_flights_override_wins_over_bookings() {
        let terms = vec![half_term()];
        let flights = vec![outbound_flight("t1")];
        let transport = vec![outbound_taxi("t1")];
        let not_travelling = vec![NotTravellingRecord {
            term_id: "t1".to_owned(),
            no_flights: true,
            no_transport: true,
        }];
        let journeys = build_journeys(&terms, &flights, &transport, &not_travelling, None);

        assert_eq!(journeys[0].status, JourneyStatus::Staying);
        assert_eq!(journeys[1].status, JourneyStatus::Staying);
    }

    #[test]
    fn test_school_filter() {
        let mut birchwood_term = half_term();
        birchwood_term.id = "t2".to_owned();
        birchwood_term.school = School::Birchwood;
        let terms = vec![half_term(), birchwood_term];

        let journeys = build_journeys(&terms, &[], &[], &[], Some(School::Birchwood));
        assert_eq!(journeys.len(), 2);
        assert!(journeys.iter().all(|j| j.school == School::Birchwood));

        let journeys = build_journeys(&terms, &[], &[], &[], None);
        assert_eq!(journeys.len(), 4);
    }

    #[test]
    fn test_duplicate_records_pick_the_first_in_store_order() {
        let terms = vec![half_term()];
        let mut second = outbound_flight("t1");
        second.id = "f2".to_owned();
        let flights = vec![outbound_flight("t1"), second];

        let journeys = build_journeys(&terms, &flights, &[], &[], None);
        assert_eq!(journeys[0].flight.unwrap().id, "f1");
    }

    #[test]
    fn test_past_terms_are_not_filtered_out() {
        let mut past = half_term();
        past.id = "t0".to_owned();
        past.start_date = NaiveDate::from_ymd_opt(2019, 2, 15).unwrap();
        past.end_date = NaiveDate::from_ymd_opt(2019, 2, 24).unwrap();
        let terms = vec![past];

        // Temporal filtering is the caller's concern, not the builder's
        let journeys = build_journeys(&terms, &[], &[], &[], None);
        assert_eq!(journeys.len(), 2);
    }

    #[test]
    fn test_departure_date_prefers_the_booked_flight() {
        let terms = vec![half_term()];
        let mut flight = outbound_flight("t1");
        flight.departure.date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let flights = vec![flight];

        let journeys = build_journeys(&terms, &flights, &[], &[], None);
        assert_eq!(
            journeys[0].departure_date(),
            NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
        );
        // Return leg has no flight, so it falls back to the term end
        assert_eq!(
            journeys[1].departure_date(),
            NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()
        );
    }
}
