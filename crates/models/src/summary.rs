use crate::journey::{Journey, JourneyStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Counts over the journeys departing on or after `now`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TravelStats {
    pub total: u64,
    /// Booked or staying
    pub complete: u64,
    pub needs_transport: u64,
    /// No flight booked yet
    pub not_booked: u64,
}

/// Aggregated view over a journey list for a fixed `now`
#[derive(Debug, Clone, Serialize)]
pub struct Summary<'a> {
    pub stats: TravelStats,
    /// The soonest upcoming journey, if any
    pub next_journey: Option<Journey<'a>>,
}

/// Reduces a journey list to counts and the next upcoming journey.
///
/// `now` is an explicit parameter rather than a wall-clock read so the
/// result is deterministic for fixed inputs. Journeys departing before
/// `now` are ignored entirely.
pub fn summarize<'a>(journeys: &[Journey<'a>], now: NaiveDate) -> Summary<'a> {
    let mut stats = TravelStats::default();
    let mut next: Option<&Journey<'a>> = None;

    for journey in journeys {
        if journey.departure_date() < now {
            continue;
        }

        stats.total += 1;
        match journey.status {
            JourneyStatus::Booked | JourneyStatus::Staying => stats.complete += 1,
            JourneyStatus::NeedsTransport => stats.needs_transport += 1,
            JourneyStatus::NeedsFlight => stats.not_booked += 1,
        }

        // Earliest departure wins; ties break outbound before return,
        // then by term id, so reruns always pick the same journey
        let is_sooner = match next {
            None => true,
            Some(current) => {
                let candidate = (
                    journey.departure_date(),
                    journey.direction,
                    journey.term.id.as_str(),
                );
                let incumbent = (
                    current.departure_date(),
                    current.direction,
                    current.term.id.as_str(),
                );
                candidate < incumbent
            }
        };
        if is_sooner {
            next = Some(journey);
        }
    }

    Summary {
        stats,
        next_journey: next.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::build_journeys;
    use crate::term::{School, Term, TermType};
    use crate::travel::{Direction, FlightLeg, FlightPoint, NotTravellingRecord};
    use chrono::NaiveTime;

    fn term(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Term {
        Term {
            id: id.to_owned(),
            school: School::Oakfield,
            name: "Exeat".to_owned(),
            term_type: TermType::Exeat,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            academic_year: "2025-2026".to_owned(),
        }
    }

    fn flight(id: &str, term_id: &str, direction: Direction, date: NaiveDate) -> FlightLeg {
        FlightLeg {
            id: id.to_owned(),
            term_id: term_id.to_owned(),
            direction,
            airline: "Emirates".to_owned(),
            flight_number: "EK30".to_owned(),
            departure: FlightPoint {
                airport: "LGW".to_owned(),
                date,
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            },
            arrival: FlightPoint {
                airport: "DXB".to_owned(),
                date,
                time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            },
            confirmation_code: None,
            notes: None,
        }
    }

    #[test]
    fn test_empty_journey_list() {
        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let summary = summarize(&[], now);

        assert_eq!(summary.stats, TravelStats::default());
        assert!(summary.next_journey.is_none());
    }

    #[test]
    fn test_past_journeys_are_excluded() {
        let terms = vec![term("t0", (2025, 10, 10), (2025, 10, 12))];
        let journeys = build_journeys(&terms, &[], &[], &[], None);
        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let summary = summarize(&journeys, now);
        assert_eq!(summary.stats.total, 0);
        assert!(summary.next_journey.is_none());
    }

    #[test]
    fn test_stats_bucket_by_status() {
        let terms = vec![
            term("t1", (2026, 2, 13), (2026, 2, 22)),
            term("t2", (2026, 3, 20), (2026, 3, 22)),
        ];
        let flights = vec![flight(
            "f1",
            "t1",
            Direction::Outbound,
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
        )];
        let not_travelling = vec![NotTravellingRecord {
            term_id: "t2".to_owned(),
            no_flights: true,
            no_transport: true,
        }];
        let journeys = build_journeys(&terms, &flights, &[], &not_travelling, None);
        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let summary = summarize(&journeys, now);
        assert_eq!(summary.stats.total, 4);
        // t2 is staying on both legs
        assert_eq!(summary.stats.complete, 2);
        // t1 outbound has a flight, no transport
        assert_eq!(summary.stats.needs_transport, 1);
        // t1 return has nothing
        assert_eq!(summary.stats.not_booked, 1);

        let buckets =
            summary.stats.complete + summary.stats.needs_transport + summary.stats.not_booked;
        assert!(buckets <= summary.stats.total);
    }

    #[test]
    fn test_next_journey_is_the_earliest_departure() {
        let terms = vec![
            term("t2", (2026, 3, 20), (2026, 3, 22)),
            term("t1", (2026, 2, 13), (2026, 2, 22)),
        ];
        let journeys = build_journeys(&terms, &[], &[], &[], None);
        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let summary = summarize(&journeys, now);
        assert_eq!(summary.next_journey.unwrap().id, "t1-outbound");
    }

    #[test]
    fn test_next_journey_ties_break_outbound_then_term_id() {
        // Two terms sharing a boundary date: a's return and b's outbound
        let terms = vec![
            term("a", (2026, 2, 1), (2026, 2, 10)),
            term("b", (2026, 2, 10), (2026, 2, 20)),
        ];
        let journeys = build_journeys(&terms, &[], &[], &[], None);
        let now = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();

        let summary = summarize(&journeys, now);
        // Same date (2026-02-10): outbound beats return
        assert_eq!(summary.next_journey.unwrap().id, "b-outbound");
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let terms = vec![
            term("t1", (2026, 2, 13), (2026, 2, 22)),
            term("t2", (2026, 3, 20), (2026, 3, 22)),
        ];
        let journeys = build_journeys(&terms, &[], &[], &[], None);
        let now = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let first = summarize(&journeys, now);
        let second = summarize(&journeys, now);
        assert_eq!(first.stats, second.stats);
        assert_eq!(
            first.next_journey.map(|j| j.id),
            second.next_journey.map(|j| j.id)
        );
    }
}
