// Domain layer - Timetable value types
pub mod grid;
pub mod section;
pub mod time_axis;
pub mod timetable;
