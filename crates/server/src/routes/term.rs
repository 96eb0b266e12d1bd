use crate::dtos::term::{TermQueryParams, TermResponse};
use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
};
use models::{catalog, term::School, term::Term};
use serde_json::json;
use std::collections::HashSet;
use std::str::FromStr;

fn to_term_response(term: Term) -> TermResponse {
    TermResponse {
        id: term.id,
        school: term.school.as_str().to_owned(),
        name: term.name,
        term_type: term.term_type.as_str().to_owned(),
        start_date: term.start_date,
        end_date: term.end_date,
        academic_year: term.academic_year,
    }
}

/// List the catalogued school terms
#[utoipa::path(
    get,
    path = "/terms",
    params(TermQueryParams),
    responses(
        (status = 200, description = "List of terms", body = Vec<TermResponse>),
        (status = 400, description = "Unknown school")
    ),
    tag = "Terms"
)]
pub async fn get_terms(
    Query(params): Query<TermQueryParams>,
) -> Result<Json<Vec<TermResponse>>, StatusCode> {
    let mut terms = match params.school {
        Some(school) => {
            let school = School::from_str(&school).map_err(|_| StatusCode::BAD_REQUEST)?;
            catalog::terms_for_school(school)
        }
        None => catalog::all_terms(),
    };

    if let Some(academic_year) = params.academic_year {
        terms.retain(|term| term.academic_year == academic_year);
    }
    terms.sort_by(|a, b| a.start_date.cmp(&b.start_date));

    Ok(Json(terms.into_iter().map(to_term_response).collect()))
}

/// Get a single catalogued term by id
#[utoipa::path(
    get,
    path = "/terms/{id}",
    params(
        ("id" = String, Path, description = "Term ID")
    ),
    responses(
        (status = 200, description = "Term found", body = TermResponse),
        (status = 404, description = "Term not found")
    ),
    tag = "Terms"
)]
pub async fn get_term_by_id(Path(id): Path<String>) -> Result<Json<TermResponse>, StatusCode> {
    catalog::all_terms()
        .into_iter()
        .find(|term| term.id == id)
        .map(|term| Json(to_term_response(term)))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Get the schools and academic years available for filtering
#[utoipa::path(
    get,
    path = "/terms/filters",
    responses(
        (status = 200, description = "Filter options retrieved successfully")
    ),
    tag = "Terms"
)]
pub async fn get_term_filters() -> Json<serde_json::Value> {
    let schools: Vec<serde_json::Value> = School::all()
        .iter()
        .map(|school| {
            json!({
                "id": school.as_str(),
                "name": school.display_name(),
            })
        })
        .collect();

    let mut years: Vec<String> = catalog::all_terms()
        .into_iter()
        .map(|term| term.academic_year)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    years.sort();

    Json(json!({
        "schools": schools,
        "academic_years": years,
    }))
}
