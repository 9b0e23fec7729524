// Timetable domain model
use super::grid::Grid;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    pub title: String,
    pub grid: Grid,
    /// Sections that could not be parsed and were left out.
    pub dropped: usize,
}

impl Timetable {
    pub fn new(title: String, grid: Grid, dropped: usize) -> Self {
        Self {
            title,
            grid,
            dropped,
        }
    }
}
