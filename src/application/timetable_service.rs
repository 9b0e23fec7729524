// Timetable service - Use cases for building timetables from fetched sections
use crate::application::grid_builder::build_grid_from_records;
use crate::application::section_repository::{SectionFilter, SectionRepository};
use crate::domain::section::SectionRecord;
use crate::domain::time_axis::TimeAxis;
use crate::domain::timetable::Timetable;
use anyhow::Context;
use futures::future::join_all;
use std::sync::Arc;

#[derive(Clone)]
pub struct TimetableService {
    repository: Arc<dyn SectionRepository>,
    axis: Arc<TimeAxis>,
}

impl TimetableService {
    pub fn new(repository: Arc<dyn SectionRepository>, axis: Arc<TimeAxis>) -> Self {
        Self { repository, axis }
    }

    pub async fn get_timetable(&self, filter: &SectionFilter) -> anyhow::Result<Timetable> {
        let records = self
            .repository
            .list_sections(filter)
            .await
            .with_context(|| format!("Failed to fetch sections for {}", title_for(filter)))?;

        tracing::debug!("Fetched {} sections for {:?}", records.len(), filter);
        Ok(self.build(title_for(filter), &records))
    }

    /// One timetable per level, fetched concurrently. Levels whose fetch
    /// fails are skipped.
    pub async fn get_overview(&self, levels: &[u8]) -> Vec<Timetable> {
        let filters: Vec<SectionFilter> = levels.iter().map(|l| SectionFilter::level(*l)).collect();
        let results = join_all(filters.iter().map(|f| self.get_timetable(f))).await;

        results
            .into_iter()
            .zip(levels)
            .filter_map(|(result, level)| match result {
                Ok(timetable) => Some(timetable),
                Err(e) => {
                    tracing::warn!("Skipping level {} in overview: {:#}", level, e);
                    None
                }
            })
            .collect()
    }

    /// Build a timetable from caller-supplied records.
    pub fn render(&self, records: &[SectionRecord]) -> Timetable {
        self.build("Timetable".to_string(), records)
    }

    fn build(&self, title: String, records: &[SectionRecord]) -> Timetable {
        let build = build_grid_from_records(records, &self.axis);
        if build.dropped > 0 {
            tracing::debug!("{}: dropped {} malformed sections", title, build.dropped);
        }
        Timetable::new(title, build.grid, build.dropped)
    }
}

fn title_for(filter: &SectionFilter) -> String {
    match (&filter.group, filter.level) {
        (Some(group), Some(level)) => format!("Group {} - Level {} Timetable", group, level),
        (Some(group), None) => format!("Group {} Timetable", group),
        (None, Some(level)) => format!("Level {} Timetable", level),
        (None, None) => "Timetable".to_string(),
    }
}
