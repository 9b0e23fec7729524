// HTTP request handlers
use crate::application::section_repository::SectionFilter;
use crate::domain::section::SectionRecord;
use crate::domain::timetable::Timetable;
use crate::infrastructure::html_table::render_timetable_html;
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Html,
}

#[derive(Deserialize)]
pub struct TimetableQuery {
    pub level: Option<u8>,
    pub group: Option<String>,
    #[serde(default)]
    pub format: ResponseFormat,
}

#[derive(Deserialize)]
pub struct OverviewQuery {
    pub levels: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Timetable for one level and/or group, as JSON or an HTML table
pub async fn get_timetable(
    query: Result<Query<TimetableQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let filter = SectionFilter {
        level: query.level,
        group: query.group.filter(|g| !g.trim().is_empty()),
    };

    let timetable = state
        .timetable_service
        .get_timetable(&filter)
        .await
        .map_err(AppError::DataSource)?;

    Ok(match query.format {
        ResponseFormat::Json => Json(timetable).into_response(),
        ResponseFormat::Html => Html(render_timetable_html(&timetable)).into_response(),
    })
}

/// Committee overview: one timetable per requested level
pub async fn get_overview(
    query: Result<Query<OverviewQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Timetable>>, AppError> {
    let Query(query) = query?;
    let levels = parse_levels(&query.levels)?;
    Ok(Json(state.timetable_service.get_overview(&levels).await))
}

/// Build a timetable from sections posted by the client
pub async fn render_timetable(
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<SectionRecord>>,
) -> Json<Timetable> {
    Json(state.timetable_service.render(&records))
}

fn parse_levels(raw: &str) -> Result<Vec<u8>, AppError> {
    let levels = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| AppError::BadRequest(format!("invalid level '{}'", s)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if levels.is_empty() {
        return Err(AppError::BadRequest("no levels requested".to_string()));
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(parse_levels("3, 4,5").unwrap(), vec![3, 4, 5]);
        assert!(matches!(parse_levels("3,x"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_levels(" , "), Err(AppError::BadRequest(_))));
    }
}
