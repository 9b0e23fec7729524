// Grid builder - lays scheduled sections out on the day/slot axis
//
// Pure and allocation-only: no I/O and no shared state, so it can be called
// for every rendered timetable, including with partially loaded input.
use crate::domain::grid::{Grid, GridCell, GridRow};
use crate::domain::section::{DayCode, Section, SectionRecord};
use crate::domain::time_axis::{TimeAxis, TimeSlot};
use chrono::Timelike;

/// Result of building a grid from raw records.
#[derive(Debug, Clone)]
pub struct GridBuild {
    pub grid: Grid,
    pub dropped: usize,
}

/// A section whose start sits exactly on a slot boundary.
struct Placement<'a> {
    start_hour: u32,
    end_hour: u32,
    label: &'a str,
}

/// Build the render-ready grid for `sections` on `axis`.
///
/// Never fails: sections that cannot be placed are left out. Each row covers
/// exactly `axis.slots().len()` slots, counting occupied spans, empty cells
/// and suppressed slots.
pub fn build_grid(sections: &[Section], axis: &TimeAxis) -> Grid {
    let rows = axis
        .days()
        .iter()
        .map(|day| build_row(*day, sections, axis))
        .collect();

    Grid::new(axis.slot_labels(), rows)
}

/// Parse records and build the grid, counting records that were dropped
/// for an unknown day code or missing/unparseable times.
pub fn build_grid_from_records(records: &[SectionRecord], axis: &TimeAxis) -> GridBuild {
    let mut sections = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for record in records {
        match Section::try_from_record(record) {
            Ok(section) => sections.push(section),
            Err(e) => {
                tracing::debug!("Dropping section {}: {}", record.course_label, e);
                dropped += 1;
            }
        }
    }

    GridBuild {
        grid: build_grid(&sections, axis),
        dropped,
    }
}

fn build_row(day: DayCode, sections: &[Section], axis: &TimeAxis) -> GridRow {
    let placements: Vec<Placement> = sections
        .iter()
        .filter(|s| s.day == day)
        .filter(|s| s.start.minute() == 0 && s.start.second() == 0)
        .filter(|s| axis.has_boundary_at(s.start_hour()))
        .map(|s| Placement {
            start_hour: s.start_hour(),
            end_hour: s.end_hour(),
            label: &s.label,
        })
        .collect();

    let slots = axis.slots();
    let mut cells = Vec::with_capacity(slots.len());
    let mut suppressed = 0;
    let mut i = 0;

    while i < slots.len() {
        let slot = &slots[i];

        if let Some(placement) = placements.iter().find(|p| p.start_hour == slot.start_hour) {
            let span = span_of(placement, slots.len() - i);
            cells.push((
                i,
                GridCell::Occupied {
                    label: placement.label.to_string(),
                    span,
                },
            ));
            i += span;
        } else if is_mid_span(slot, &placements) {
            suppressed += 1;
            i += 1;
        } else {
            cells.push((i, GridCell::Empty));
            i += 1;
        }
    }

    let row = GridRow::new(day.label().to_string(), cells, suppressed);
    debug_assert_eq!(row.covered_slots(), slots.len());
    row
}

/// Whole-hour span, at least one slot and never past the end of the row.
fn span_of(placement: &Placement, remaining: usize) -> usize {
    let hours = placement.end_hour.saturating_sub(placement.start_hour) as usize;
    hours.clamp(1, remaining)
}

fn is_mid_span(slot: &TimeSlot, placements: &[Placement]) -> bool {
    placements
        .iter()
        .any(|p| p.start_hour < slot.start_hour && slot.start_hour < p.end_hour)
}
