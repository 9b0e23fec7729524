// Application state for HTTP handlers
use crate::application::timetable_service::TimetableService;

#[derive(Clone)]
pub struct AppState {
    pub timetable_service: TimetableService,
}
