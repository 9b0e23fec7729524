// HTML table rendering of a timetable grid
use crate::domain::grid::{GridCell, GridRow};
use crate::domain::timetable::Timetable;
use html_escape::encode_text;
use std::fmt::Write;

const EMPTY_CELL: &str = "-";

pub fn render_timetable_html(timetable: &Timetable) -> String {
    let mut html = String::from("<table class=\"timetable\">");
    let _ = write!(html, "<caption>{}</caption>", encode_text(&timetable.title));

    html.push_str("<thead><tr><th>Day</th>");
    for label in &timetable.grid.header {
        let _ = write!(html, "<th>{}</th>", encode_text(label));
    }
    html.push_str("</tr></thead><tbody>");

    for row in &timetable.grid.rows {
        render_row(&mut html, row);
    }

    html.push_str("</tbody></table>");
    html
}

fn render_row(html: &mut String, row: &GridRow) {
    let _ = write!(html, "<tr><th>{}</th>", encode_text(&row.day));
    for cell in &row.cells {
        match cell {
            GridCell::Occupied { label, span } if *span > 1 => {
                let _ = write!(html, "<td colspan=\"{}\">{}</td>", span, encode_text(label));
            }
            GridCell::Occupied { label, .. } => {
                let _ = write!(html, "<td>{}</td>", encode_text(label));
            }
            GridCell::Empty => {
                let _ = write!(html, "<td>{}</td>", EMPTY_CELL);
            }
        }
    }
    html.push_str("</tr>");
}
