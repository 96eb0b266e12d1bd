use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// Represents one of the two boarding schools the family tracks
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
    EnumProperty,
)]
#[serde(rename_all = "kebab-case")]
pub enum School {
    #[strum(serialize = "oakfield", props(display = "Oakfield College"))]
    Oakfield,
    #[strum(serialize = "birchwood", props(display = "Birchwood School"))]
    Birchwood,
}

impl School {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn display_name(&self) -> &'static str {
        self.get_str("display").unwrap_or_default()
    }

    pub fn all() -> Vec<School> {
        School::iter().collect()
    }
}

/// The kind of school period a term entry describes
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum TermType {
    #[strum(serialize = "term")]
    Term,
    #[strum(serialize = "half-term")]
    HalfTerm,
    #[strum(serialize = "exeat")]
    Exeat,
    #[strum(serialize = "holiday")]
    Holiday,
    #[strum(serialize = "short-leave")]
    ShortLeave,
    #[strum(serialize = "long-leave")]
    LongLeave,
}

impl TermType {
    /// Whether travel is expected around this period at all. Every current
    /// type produces both an outbound and a return leg; a future "closed
    /// weekend" marker would return false here.
    pub fn requires_travel(&self) -> bool {
        match self {
            Self::Term
            | Self::HalfTerm
            | Self::Exeat
            | Self::Holiday
            | Self::ShortLeave
            | Self::LongLeave => true,
        }
    }

    /// Short breaks need an outbound and a return flight checked separately;
    /// full terms and holidays only need some flight to exist.
    pub fn requires_both_legs(&self) -> bool {
        matches!(
            self,
            Self::HalfTerm | Self::Exeat | Self::ShortLeave | Self::LongLeave
        )
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A school calendar period, hand-authored into the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Unique id (e.g. "oakfield-2025-autumn-half-term")
    pub id: String,
    pub school: School,
    /// Human-readable name (e.g. "Autumn Half Term")
    pub name: String,
    pub term_type: TermType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Academic year in "YYYY-YYYY" form
    pub academic_year: String,
}
