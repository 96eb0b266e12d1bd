use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct TermResponse {
    pub id: String,
    pub school: String,
    pub name: String,
    pub term_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub academic_year: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct TermQueryParams {
    /// Restrict to one school ("oakfield" or "birchwood")
    pub school: Option<String>,
    /// Restrict to one academic year ("YYYY-YYYY")
    pub academic_year: Option<String>,
}
