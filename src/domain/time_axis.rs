// Time axis domain model - the fixed days and hourly slots of a timetable
use super::section::DayCode;
use thiserror::Error;

pub const STANDARD_FIRST_HOUR: u32 = 8;
pub const STANDARD_LAST_HOUR: u32 = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AxisError {
    #[error("axis needs at least one day")]
    NoDays,
    #[error("day {0} appears more than once")]
    DuplicateDay(DayCode),
    #[error("invalid hour range {first}..{last}")]
    InvalidHours { first: u32, last: u32 },
}

/// One hour band `[start_hour, start_hour + 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: u32,
    pub label: String,
}

impl TimeSlot {
    pub fn new(start_hour: u32) -> Self {
        let label = format!("{:02}:00-{:02}:00", start_hour, start_hour + 1);
        Self { start_hour, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    days: Vec<DayCode>,
    slots: Vec<TimeSlot>,
}

impl TimeAxis {
    /// Sunday to Thursday, 08:00 to 15:00.
    pub fn standard() -> Self {
        Self {
            days: DayCode::ALL.to_vec(),
            slots: (STANDARD_FIRST_HOUR..STANDARD_LAST_HOUR)
                .map(TimeSlot::new)
                .collect(),
        }
    }

    pub fn hourly(days: Vec<DayCode>, first_hour: u32, last_hour: u32) -> Result<Self, AxisError> {
        if days.is_empty() {
            return Err(AxisError::NoDays);
        }
        for (i, day) in days.iter().enumerate() {
            if days[..i].contains(day) {
                return Err(AxisError::DuplicateDay(*day));
            }
        }
        if first_hour >= last_hour || last_hour > 24 {
            return Err(AxisError::InvalidHours {
                first: first_hour,
                last: last_hour,
            });
        }

        Ok(Self {
            days,
            slots: (first_hour..last_hour).map(TimeSlot::new).collect(),
        })
    }

    pub fn days(&self) -> &[DayCode] {
        &self.days
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot_labels(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.label.clone()).collect()
    }

    /// Whether some slot begins at `hour:00`.
    pub fn has_boundary_at(&self, hour: u32) -> bool {
        self.slots.iter().any(|s| s.start_hour == hour)
    }
}

impl Default for TimeAxis {
    fn default() -> Self {
        Self::standard()
    }
}
