use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use quiz_core::model::SessionSummary;

/// Builds the single-row statistics table shown at the end of a session.
#[must_use]
pub fn statistics_table(summary: &SessionSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            header_cell("Correct questions"),
            header_cell("Incorrect questions"),
            header_cell("Highest Streak"),
            header_cell("Accuracy"),
            header_cell("Average Time"),
            header_cell("Total score"),
        ]);

    table.add_row(vec![
        count_cell(summary.correct()),
        count_cell(summary.incorrect()),
        count_cell(summary.highest_streak()),
        Cell::new(format!("{:.2} %", summary.accuracy())),
        Cell::new(format!("{:.2} s", summary.average_time_secs())),
        Cell::new(summary.score()).set_alignment(CellAlignment::Right),
    ]);

    table
}

fn header_cell(title: &str) -> Cell {
    Cell::new(title).add_attribute(Attribute::Bold)
}

fn count_cell(value: u32) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
