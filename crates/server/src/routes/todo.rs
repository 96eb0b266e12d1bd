use crate::dtos::journey::{TodoQueryParams, TodoResponse};
use crate::routes::journey::{fetch_snapshot, parse_school};
use axum::{Json, extract::Query, http::StatusCode};
use chrono::Utc;
use database::db::create_connection;
use log::error;
use models::{
    catalog,
    term::Term,
    todo::{TodoConfig, TodoItem, prioritize},
};

fn to_todo_response(item: TodoItem) -> TodoResponse {
    TodoResponse {
        id: item.id,
        kind: item.kind.as_str().to_owned(),
        term_id: item.term_id,
        school: item.school.as_str().to_owned(),
        term_name: item.term_name,
        title: item.title,
        due_date: item.due_date,
        days_until: item.days_until,
        urgency: item.urgency.as_str().to_owned(),
    }
}

/// List outstanding booking actions for upcoming terms, most urgent first
#[utoipa::path(
    get,
    path = "/todos",
    params(TodoQueryParams),
    responses(
        (status = 200, description = "Prioritized action list", body = Vec<TodoResponse>),
        (status = 400, description = "Unknown school"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Todos"
)]
pub async fn get_todos(
    Query(params): Query<TodoQueryParams>,
) -> Result<Json<Vec<TodoResponse>>, StatusCode> {
    let school = parse_school(params.school)?;

    let db = create_connection().await.map_err(|e| {
        error!("database connection failed: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let (flights, transport, overrides) = fetch_snapshot(&db).await?;

    let terms: Vec<Term> = catalog::all_terms()
        .into_iter()
        .filter(|term| school.is_none_or(|s| term.school == s))
        .collect();

    let mut config = TodoConfig::default();
    if let Some(horizon_months) = params.horizon_months {
        config.horizon_months = horizon_months;
    }

    let items = prioritize(
        &terms,
        &flights,
        &transport,
        &overrides,
        Utc::now().date_naive(),
        &config,
    );

    Ok(Json(items.into_iter().map(to_todo_response).collect()))
}
