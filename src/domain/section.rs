// Section domain model - one scheduled meeting of a course
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_LABEL_CHARS: usize = 24;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown day code '{0}'")]
    UnknownDayCode(String),
    #[error("malformed section: {0}")]
    MalformedSection(String),
}

/// Teaching days, in timetable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayCode {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl DayCode {
    pub const ALL: [DayCode; 5] = [
        DayCode::Sunday,
        DayCode::Monday,
        DayCode::Tuesday,
        DayCode::Wednesday,
        DayCode::Thursday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DayCode::Sunday => "Sunday",
            DayCode::Monday => "Monday",
            DayCode::Tuesday => "Tuesday",
            DayCode::Wednesday => "Wednesday",
            DayCode::Thursday => "Thursday",
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayCode {
    type Err = SectionError;

    /// Accepts the data source's single-letter codes (S M T W H), the
    /// three-letter abbreviations and the full names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sun" | "sunday" => Ok(DayCode::Sunday),
            "m" | "mon" | "monday" => Ok(DayCode::Monday),
            "t" | "tue" | "tuesday" => Ok(DayCode::Tuesday),
            "w" | "wed" | "wednesday" => Ok(DayCode::Wednesday),
            "h" | "r" | "thu" | "thursday" => Ok(DayCode::Thursday),
            _ => Err(SectionError::UnknownDayCode(s.to_string())),
        }
    }
}

/// Section as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub day_code: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub course_label: String,
    #[serde(default)]
    pub section_type: Option<String>,
}

#[cfg(test)]
impl SectionRecord {
    pub fn new(day_code: &str, start_time: &str, end_time: &str, course_label: &str) -> Self {
        Self {
            day_code: day_code.to_string(),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            course_label: course_label.to_string(),
            section_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub day: DayCode,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub label: String,
}

impl Section {
    pub fn new(day: DayCode, start: NaiveTime, end: NaiveTime, label: impl Into<String>) -> Self {
        Self {
            day,
            start,
            end,
            label: label.into(),
        }
    }

    pub fn try_from_record(record: &SectionRecord) -> Result<Self, SectionError> {
        let day = record.day_code.parse::<DayCode>()?;
        let start = parse_time("startTime", record.start_time.as_deref())?;
        let end = parse_time("endTime", record.end_time.as_deref())?;
        let label = short_label(&record.course_label, record.section_type.as_deref());

        Ok(Self::new(day, start, end, label))
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }
}

fn parse_time(field: &str, value: Option<&str>) -> Result<NaiveTime, SectionError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SectionError::MalformedSection(format!("{} is missing", field)))?;

    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| SectionError::MalformedSection(format!("{} '{}' is not a time", field, raw)))
}

/// Builds the display label, e.g. "CS101 (Lecture)".
pub fn short_label(course_label: &str, section_type: Option<&str>) -> String {
    let course = course_label.trim();
    let full = match section_type.map(str::trim).filter(|t| !t.is_empty()) {
        Some(tag) => format!("{} ({})", course, section_tag(tag)),
        None => course.to_string(),
    };

    if full.chars().count() <= MAX_LABEL_CHARS {
        return full;
    }
    let mut truncated: String = full.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

fn section_tag(tag: &str) -> String {
    match tag.to_ascii_lowercase().as_str() {
        "l" | "lec" | "lecture" => "Lecture".to_string(),
        "lab" | "laboratory" => "Lab".to_string(),
        "tut" | "tutorial" => "Tutorial".to_string(),
        _ => tag.to_string(),
    }
}
