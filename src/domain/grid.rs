// Grid domain models - render-ready timetable matrix
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridCell {
    Occupied { label: String, span: usize },
    Empty,
}

impl GridCell {
    /// Number of slots this cell covers.
    pub fn span(&self) -> usize {
        match self {
            GridCell::Occupied { span, .. } => *span,
            GridCell::Empty => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub day: String,
    pub cells: Vec<GridCell>,
    /// Slot index each cell starts at, parallel to `cells`.
    #[serde(skip)]
    pub starts: Vec<usize>,
    /// Slots swallowed by an overlapping section; they have no cell.
    #[serde(skip)]
    pub suppressed: usize,
}

impl GridRow {
    /// `placed` pairs each cell with the slot index it starts at.
    pub fn new(day: String, placed: Vec<(usize, GridCell)>, suppressed: usize) -> Self {
        let (starts, cells) = placed.into_iter().unzip();
        Self {
            day,
            cells,
            starts,
            suppressed,
        }
    }

    pub fn covered_slots(&self) -> usize {
        self.cells.iter().map(GridCell::span).sum::<usize>() + self.suppressed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn new(header: Vec<String>, rows: Vec<GridRow>) -> Self {
        Self { header, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_serialization() {
        let occupied = GridCell::Occupied {
            label: "CS101".to_string(),
            span: 2,
        };
        assert_eq!(
            serde_json::to_value(&occupied).unwrap(),
            serde_json::json!({"kind": "occupied", "label": "CS101", "span": 2})
        );
        assert_eq!(
            serde_json::to_value(GridCell::Empty).unwrap(),
            serde_json::json!({"kind": "empty"})
        );
    }

    #[test]
    fn test_covered_slots() {
        let row = GridRow::new(
            "Sunday".to_string(),
            vec![
                (
                    0,
                    GridCell::Occupied {
                        label: "CS101".to_string(),
                        span: 3,
                    },
                ),
                (4, GridCell::Empty),
            ],
            1,
        );
        assert_eq!(row.starts, vec![0, 4]);
        assert_eq!(row.covered_slots(), 5);
    }
}
