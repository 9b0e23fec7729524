// Repository trait for scheduled section data access
use crate::domain::section::SectionRecord;
use async_trait::async_trait;

/// Narrows the sections fetched for one timetable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFilter {
    pub level: Option<u8>,
    pub group: Option<String>,
}

impl SectionFilter {
    pub fn level(level: u8) -> Self {
        Self {
            level: Some(level),
            group: None,
        }
    }
}

#[async_trait]
pub trait SectionRepository: Send + Sync {
    /// List the scheduled sections matching the filter
    async fn list_sections(&self, filter: &SectionFilter) -> anyhow::Result<Vec<SectionRecord>>;
}
