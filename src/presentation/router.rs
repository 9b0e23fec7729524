// Route table and middleware
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_overview, get_timetable, health_check, render_timetable};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/timetables", get(get_timetable))
        .route("/timetables/overview", get(get_overview))
        .route("/timetables/render", post(render_timetable))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
