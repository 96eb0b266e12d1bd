//! Hand-authored school term catalog. Compiled in, never mutated at
//! runtime; corrections happen here and ship with the next build.

use crate::term::{School, Term, TermType};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date")
}

fn term(
    id: &str,
    school: School,
    name: &str,
    term_type: TermType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    academic_year: &str,
) -> Term {
    Term {
        id: id.to_owned(),
        school,
        name: name.to_owned(),
        term_type,
        start_date,
        end_date,
        academic_year: academic_year.to_owned(),
    }
}

/// Every catalogued term for both schools, in no particular order.
/// The journey builder and prioritizer apply their own filters and sorts.
pub fn all_terms() -> Vec<Term> {
    use School::{Birchwood, Oakfield};
    use TermType::{Exeat, HalfTerm, Holiday, LongLeave, ShortLeave, Term};

    const Y2526: &str = "2025-2026";
    const Y2627: &str = "2026-2027";

    vec![
        // Oakfield 2025-2026
        term(
            "oakfield-2025-autumn-term",
            Oakfield,
            "Autumn Term",
            Term,
            date(2025, 9, 3),
            date(2025, 12, 12),
            Y2526,
        ),
        term(
            "oakfield-2025-autumn-exeat-1",
            Oakfield,
            "Autumn Exeat",
            Exeat,
            date(2025, 9, 26),
            date(2025, 9, 28),
            Y2526,
        ),
        term(
            "oakfield-2025-autumn-half-term",
            Oakfield,
            "Autumn Half Term",
            HalfTerm,
            date(2025, 10, 17),
            date(2025, 11, 2),
            Y2526,
        ),
        term(
            "oakfield-2025-autumn-exeat-2",
            Oakfield,
            "November Exeat",
            Exeat,
            date(2025, 11, 21),
            date(2025, 11, 23),
            Y2526,
        ),
        term(
            "oakfield-2025-christmas-holiday",
            Oakfield,
            "Christmas Holiday",
            Holiday,
            date(2025, 12, 12),
            date(2026, 1, 6),
            Y2526,
        ),
        term(
            "oakfield-2026-spring-term",
            Oakfield,
            "Spring Term",
            Term,
            date(2026, 1, 6),
            date(2026, 3, 27),
            Y2526,
        ),
        term(
            "oakfield-2026-spring-exeat",
            Oakfield,
            "Spring Exeat",
            Exeat,
            date(2026, 1, 30),
            date(2026, 2, 1),
            Y2526,
        ),
        term(
            "oakfield-2026-spring-half-term",
            Oakfield,
            "Spring Half Term",
            HalfTerm,
            date(2026, 2, 13),
            date(2026, 2, 22),
            Y2526,
        ),
        term(
            "oakfield-2026-easter-holiday",
            Oakfield,
            "Easter Holiday",
            Holiday,
            date(2026, 3, 27),
            date(2026, 4, 21),
            Y2526,
        ),
        term(
            "oakfield-2026-summer-term",
            Oakfield,
            "Summer Term",
            Term,
            date(2026, 4, 21),
            date(2026, 7, 3),
            Y2526,
        ),
        term(
            "oakfield-2026-summer-exeat",
            Oakfield,
            "Summer Exeat",
            Exeat,
            date(2026, 5, 8),
            date(2026, 5, 10),
            Y2526,
        ),
        term(
            "oakfield-2026-summer-half-term",
            Oakfield,
            "Summer Half Term",
            HalfTerm,
            date(2026, 5, 22),
            date(2026, 5, 31),
            Y2526,
        ),
        term(
            "oakfield-2026-summer-holiday",
            Oakfield,
            "Summer Holiday",
            Holiday,
            date(2026, 7, 3),
            date(2026, 9, 2),
            Y2526,
        ),
        // Birchwood 2025-2026
        term(
            "birchwood-2025-autumn-term",
            Birchwood,
            "Autumn Term",
            Term,
            date(2025, 9, 2),
            date(2025, 12, 13),
            Y2526,
        ),
        term(
            "birchwood-2025-short-leave-1",
            Birchwood,
            "October Short Leave",
            ShortLeave,
            date(2025, 10, 3),
            date(2025, 10, 5),
            Y2526,
        ),
        term(
            "birchwood-2025-long-leave-1",
            Birchwood,
            "Autumn Long Leave",
            LongLeave,
            date(2025, 10, 24),
            date(2025, 11, 2),
            Y2526,
        ),
        term(
            "birchwood-2025-short-leave-2",
            Birchwood,
            "November Short Leave",
            ShortLeave,
            date(2025, 11, 28),
            date(2025, 11, 30),
            Y2526,
        ),
        term(
            "birchwood-2025-christmas-holiday",
            Birchwood,
            "Christmas Holiday",
            Holiday,
            date(2025, 12, 13),
            date(2026, 1, 7),
            Y2526,
        ),
        term(
            "birchwood-2026-spring-term",
            Birchwood,
            "Spring Term",
            Term,
            date(2026, 1, 7),
            date(2026, 3, 25),
            Y2526,
        ),
        term(
            "birchwood-2026-short-leave-3",
            Birchwood,
            "January Short Leave",
            ShortLeave,
            date(2026, 1, 23),
            date(2026, 1, 25),
            Y2526,
        ),
        term(
            "birchwood-2026-long-leave-2",
            Birchwood,
            "Spring Long Leave",
            LongLeave,
            date(2026, 2, 13),
            date(2026, 2, 22),
            Y2526,
        ),
        term(
            "birchwood-2026-easter-holiday",
            Birchwood,
            "Easter Holiday",
            Holiday,
            date(2026, 3, 25),
            date(2026, 4, 22),
            Y2526,
        ),
        term(
            "birchwood-2026-summer-term",
            Birchwood,
            "Summer Term",
            Term,
            date(2026, 4, 22),
            date(2026, 7, 4),
            Y2526,
        ),
        term(
            "birchwood-2026-long-leave-3",
            Birchwood,
            "Summer Long Leave",
            LongLeave,
            date(2026, 5, 22),
            date(2026, 5, 31),
            Y2526,
        ),
        term(
            "birchwood-2026-summer-holiday",
            Birchwood,
            "Summer Holiday",
            Holiday,
            date(2026, 7, 4),
            date(2026, 9, 1),
            Y2526,
        ),
        // 2026-2027, published through Christmas so far
        term(
            "oakfield-2026-autumn-term",
            Oakfield,
            "Autumn Term",
            Term,
            date(2026, 9, 2),
            date(2026, 12, 11),
            Y2627,
        ),
        term(
            "oakfield-2026-autumn-half-term",
            Oakfield,
            "Autumn Half Term",
            HalfTerm,
            date(2026, 10, 16),
            date(2026, 11, 1),
            Y2627,
        ),
        term(
            "oakfield-2026-christmas-holiday",
            Oakfield,
            "Christmas Holiday",
            Holiday,
            date(2026, 12, 11),
            date(2027, 1, 5),
            Y2627,
        ),
        term(
            "birchwood-2026-autumn-term",
            Birchwood,
            "Autumn Term",
            Term,
            date(2026, 9, 1),
            date(2026, 12, 12),
            Y2627,
        ),
        term(
            "birchwood-2026-long-leave-autumn",
            Birchwood,
            "Autumn Long Leave",
            LongLeave,
            date(2026, 10, 23),
            date(2026, 11, 1),
            Y2627,
        ),
        term(
            "birchwood-2026-christmas-holiday",
            Birchwood,
            "Christmas Holiday",
            Holiday,
            date(2026, 12, 12),
            date(2027, 1, 6),
            Y2627,
        ),
    ]
}

/// The catalog restricted to a single school
pub fn terms_for_school(school: School) -> Vec<Term> {
    all_terms()
        .into_iter()
        .filter(|term| term.school == school)
        .collect()
}
