use crate::{
    term::{School, Term},
    travel::{Direction, FlightLeg, NotTravellingRecord, TransportLeg},
};
use chrono::{Months, NaiveDate};
use serde::Serialize;
use strum::AsRefStr;

/// Coarse priority bucket derived from days until departure.
/// Ordered high first so sorting by urgency puts urgent items on top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "low")]
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// What kind of booking an item asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
pub enum TodoKind {
    #[strum(serialize = "flight")]
    Flight,
    #[strum(serialize = "transport")]
    Transport,
}

impl TodoKind {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// Day breakpoints mapping days-until-departure to an urgency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyThresholds {
    pub high_days: i64,
    pub medium_days: i64,
}

impl UrgencyThresholds {
    pub fn tier(&self, days_until: i64) -> Urgency {
        if days_until <= self.high_days {
            Urgency::High
        } else if days_until <= self.medium_days {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

/// Prioritizer tuning. The thresholds are parameterized per item kind;
/// both default to the same scale (high within 30 days, medium within 60).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoConfig {
    pub flight: UrgencyThresholds,
    pub transport: UrgencyThresholds,
    /// Terms starting within this many months of `now` are considered
    pub horizon_months: u32,
}

impl Default for TodoConfig {
    fn default() -> Self {
        let thresholds = UrgencyThresholds {
            high_days: 30,
            medium_days: 60,
        };
        Self {
            flight: thresholds,
            transport: thresholds,
            horizon_months: 12,
        }
    }
}

/// A single outstanding booking action for an upcoming term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoItem {
    /// Synthesized as "{kind}-{term_id}"; no identity beyond one call
    pub id: String,
    pub kind: TodoKind,
    pub term_id: String,
    pub school: School,
    pub term_name: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_until: i64,
    pub urgency: Urgency,
}

fn flight_title(term: &Term, missing: &[Direction]) -> String {
    match missing {
        [Direction::Outbound] => format!("Book outbound flight for {}", term.name),
        [Direction::Return] => format!("Book return flight for {}", term.name),
        _ => format!("Book flights for {}", term.name),
    }
}

/// Scans upcoming terms for missing flight and transport bookings and
/// returns one action item per gap, most urgent first.
///
/// Only terms starting within `[now, now + horizon_months)` are considered.
/// Not-travelling overrides suppress the corresponding item kind. The
/// output is recomputed from scratch on every call.
pub fn prioritize(
    terms: &[Term],
    flights: &[FlightLeg],
    transport: &[TransportLeg],
    not_travelling: &[NotTravellingRecord],
    now: NaiveDate,
    config: &TodoConfig,
) -> Vec<TodoItem> {
    let horizon_end = now
        .checked_add_months(Months::new(config.horizon_months))
        .unwrap_or(NaiveDate::MAX);

    let mut items = Vec::new();

    for term in terms {
        if term.start_date < now || term.start_date >= horizon_end {
            continue;
        }
        if !term.term_type.requires_travel() {
            continue;
        }

        let override_record = not_travelling.iter().find(|r| r.term_id == term.id);
        let no_flights = override_record.is_some_and(|r| r.no_flights);
        let no_transport = override_record.is_some_and(|r| r.no_transport);
        let days_until = (term.start_date - now).num_days();

        if !no_flights {
            let missing: Vec<Direction> = if term.term_type.requires_both_legs() {
                // Short breaks need each direction checked on its own
                [Direction::Outbound, Direction::Return]
                    .into_iter()
                    .filter(|&direction| {
                        !flights
                            .iter()
                            .any(|f| f.term_id == term.id && f.direction == direction)
                    })
                    .collect()
            } else if flights.iter().any(|f| f.term_id == term.id) {
                Vec::new()
            } else {
                vec![Direction::Outbound, Direction::Return]
            };

            if !missing.is_empty() {
                items.push(TodoItem {
                    id: format!("flight-{}", term.id),
                    kind: TodoKind::Flight,
                    term_id: term.id.clone(),
                    school: term.school,
                    term_name: term.name.clone(),
                    title: flight_title(term, &missing),
                    due_date: term.start_date,
                    days_until,
                    urgency: config.flight.tier(days_until),
                });
            }
        }

        if !no_transport && !transport.iter().any(|t| t.term_id == term.id) {
            items.push(TodoItem {
                id: format!("transport-{}", term.id),
                kind: TodoKind::Transport,
                term_id: term.id.clone(),
                school: term.school,
                term_name: term.name.clone(),
                title: format!("Arrange transport for {}", term.name),
                due_date: term.start_date,
                days_until,
                urgency: config.transport.tier(days_until),
            });
        }
    }

    items.sort_by(|a, b| (a.urgency, a.due_date).cmp(&(b.urgency, b.due_date)));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::TermType;
    use crate::travel::{FlightPoint, TransportType};
    use chrono::NaiveTime;

    fn term(id: &str, term_type: TermType, start: (i32, u32, u32), end: (i32, u32, u32)) -> Term {
        Term {
            id: id.to_owned(),
            school: School::Oakfield,
            name: "Spring Half Term".to_owned(),
            term_type,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            academic_year: "2025-2026".to_owned(),
        }
    }

    fn flight(term_id: &str, direction: Direction) -> FlightLeg {
        FlightLeg {
            id: format!("f-{term_id}-{}", direction.as_str()),
            term_id: term_id.to_owned(),
            direction,
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
            confirmation_code: None,
            notes: None,
        }
    }

    fn taxi(term_id: &str) -> TransportLeg {
        TransportLeg {
            id: format!("tr-{term_id}"),
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

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_unbooked_half_term_emits_one_flight_and_one_transport_item() {
        let terms = vec![term("t1", TermType::HalfTerm, (2026, 2, 13), (2026, 2, 22))];
        let items = prioritize(&terms, &[], &[], &[], now(), &TodoConfig::default());

        assert_eq!(items.len(), 2);
        for item in &items {
            assert_eq!(item.term_id, "t1");
            assert_eq!(item.days_until, 43);
            assert_eq!(item.urgency, Urgency::Medium);
        }
        assert!(items.iter().any(|i| i.id == "flight-t1"));
        assert!(items.iter().any(|i| i.id == "transport-t1"));
    }

    #[test]
    fn test_flight_title_names_the_missing_direction() {
        let terms = vec![term("t1", TermType::HalfTerm, (2026, 2, 13), (2026, 2, 22))];
        let flights = vec![flight("t1", Direction::Outbound)];
        let items = prioritize(&terms, &flights, &[], &[], now(), &TodoConfig::default());

        let flight_item = items.iter().find(|i| i.kind == TodoKind::Flight).unwrap();
        assert_eq!(flight_item.title, "Book return flight for Spring Half Term");
    }

    #[test]
    fn test_single_leg_types_only_need_any_flight() {
        let terms = vec![term("t1", TermType::Holiday, (2026, 3, 27), (2026, 4, 19))];
        let flights = vec![flight("t1", Direction::Outbound)];
        let items = prioritize(&terms, &flights, &[], &[], now(), &TodoConfig::default());

        // One flight in either direction satisfies a holiday
        assert!(items.iter().all(|i| i.kind != TodoKind::Flight));
    }

    #[test]
    fn test_both_leg_types_flag_each_direction() {
        let terms = vec![term("t1", TermType::Exeat, (2026, 2, 13), (2026, 2, 15))];
        let flights = vec![flight("t1", Direction::Outbound)];
        let items = prioritize(&terms, &flights, &[], &[], now(), &TodoConfig::default());

        // The outbound flight alone does not clear an exeat
        assert!(items.iter().any(|i| i.kind == TodoKind::Flight));
    }

    #[test]
    fn test_transport_item_is_independent_of_flights() {
        let terms = vec![term("t1", TermType::HalfTerm, (2026, 2, 13), (2026, 2, 22))];
        let flights = vec![
            flight("t1", Direction::Outbound),
            flight("t1", Direction::Return),
        ];
        let items = prioritize(&terms, &flights, &[], &[], now(), &TodoConfig::default());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, TodoKind::Transport);

        let transport = vec![taxi("t1")];
        let items = prioritize(&terms, &flights, &transport, &[], now(), &TodoConfig::default());
        assert!(items.is_empty());
    }

    #[test]
    fn test_not_travelling_override_suppresses_items() {
        let terms = vec![term("t1", TermType::HalfTerm, (2026, 2, 13), (2026, 2, 22))];
        let not_travelling = vec![NotTravellingRecord {
            term_id: "t1".to_owned(),
            no_flights: true,
            no_transport: true,
        }];
        let items = prioritize(&terms, &[], &[], &not_travelling, now(), &TodoConfig::default());
        assert!(items.is_empty());

        // Suppressing only flights leaves the transport item
        let partial = vec![NotTravellingRecord {
            term_id: "t1".to_owned(),
            no_flights: true,
            no_transport: false,
        }];
        let items = prioritize(&terms, &[], &[], &partial, now(), &TodoConfig::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, TodoKind::Transport);
    }

    #[test]
    fn test_terms_outside_the_horizon_are_skipped() {
        let terms = vec![
            term("past", TermType::Exeat, (2025, 11, 7), (2025, 11, 9)),
            term("far", TermType::Exeat, (2027, 3, 5), (2027, 3, 7)),
            term("soon", TermType::Exeat, (2026, 2, 13), (2026, 2, 15)),
        ];
        let items = prioritize(&terms, &[], &[], &[], now(), &TodoConfig::default());

        assert!(items.iter().all(|i| i.term_id == "soon"));
    }

    #[test]
    fn test_urgency_tiers() {
        let thresholds = UrgencyThresholds {
            high_days: 30,
            medium_days: 60,
        };
        assert_eq!(thresholds.tier(0), Urgency::High);
        assert_eq!(thresholds.tier(30), Urgency::High);
        assert_eq!(thresholds.tier(31), Urgency::Medium);
        assert_eq!(thresholds.tier(60), Urgency::Medium);
        assert_eq!(thresholds.tier(61), Urgency::Low);
    }

    #[test]
    fn test_items_sort_by_urgency_then_due_date() {
        let terms = vec![
            term("late", TermType::Exeat, (2026, 6, 12), (2026, 6, 14)),
            term("soon", TermType::Exeat, (2026, 1, 16), (2026, 1, 18)),
            term("mid", TermType::Exeat, (2026, 2, 20), (2026, 2, 22)),
        ];
        let items = prioritize(&terms, &[], &[], &[], now(), &TodoConfig::default());

        for pair in items.windows(2) {
            assert!(
                (pair[0].urgency, pair[0].due_date) <= (pair[1].urgency, pair[1].due_date)
            );
        }
        assert_eq!(items[0].term_id, "soon");
        assert_eq!(items[0].urgency, Urgency::High);
        assert_eq!(items.last().unwrap().term_id, "late");
        assert_eq!(items.last().unwrap().urgency, Urgency::Low);
    }

    #[test]
    fn test_custom_transport_thresholds_apply() {
        // The stricter transport scale from the source is a config choice
        let config = TodoConfig {
            transport: UrgencyThresholds {
                high_days: 14,
                medium_days: 30,
            },
            ..Default::default()
        };
        let terms = vec![term("t1", TermType::HalfTerm, (2026, 2, 13), (2026, 2, 22))];
        let items = prioritize(&terms, &[], &[], &[], now(), &config);

        let flight_item = items.iter().find(|i| i.kind == TodoKind::Flight).unwrap();
        let transport_item = items.iter().find(|i| i.kind == TodoKind::Transport).unwrap();
        assert_eq!(flight_item.urgency, Urgency::Medium);
        // 43 days out is beyond the 30-day medium breakpoint
        assert_eq!(transport_item.urgency, Urgency::Low);
    }
}
