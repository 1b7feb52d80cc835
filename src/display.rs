use std::fs::File;
use std::io::Write;

use crate::grid::{GridCell, HourLabel, Layout};
use crate::schedule::slot_utils::{column_name, last_visible_row, row_to_time, HEADER_ROW_OFFSET, WEEKDAY_COLUMNS};

const CELL_WIDTH: usize = 14;

/// Formats a cell as "label [room]", or just the label for short blocks
pub fn format_cell_text(cell: &GridCell) -> String {
    match &cell.sub_label {
        Some(room) => format!("{} [{}]", cell.label, room.trim()),
        None => cell.label.clone(),
    }
}

/// Cuts `text` to `width` characters, ending with an ellipsis when it overflows
fn ellipsize(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn covers(cell: &GridCell, row: i32) -> bool {
    row >= cell.row_start && (row < cell.row_end || row == cell.row_start)
}

/// Text rendering of the weekly grid, one line per 30-minute row
pub fn render_grid_text(title: &str, cells: &[GridCell], labels: &[HourLabel]) -> String {
    let mut out = String::new();
    out.push_str(&format!("** {} **\n", title));

    out.push_str(&format!("{:<6}", ""));
    for (name, _) in WEEKDAY_COLUMNS.iter() {
        out.push_str(&format!("| {:<width$}", &name[..3], width = CELL_WIDTH));
    }
    out.push('\n');

    for row in HEADER_ROW_OFFSET..=last_visible_row() {
        let label = labels.iter().find(|l| l.row == row).map(|l| l.text.as_str()).unwrap_or("");
        out.push_str(&format!("{:<6}", label));

        for (_, column) in WEEKDAY_COLUMNS.iter() {
            let text = cells
                .iter()
                .find(|c| c.day_column == *column && covers(c, row))
                .map(|c| ellipsize(&c.label, CELL_WIDTH))
                .unwrap_or_else(|| ".".to_string());
            out.push_str(&format!("| {:<width$}", text, width = CELL_WIDTH));
        }
        out.push('\n');
    }

    out
}

/// Writes the text grid for one combination to a file
pub fn write_grid_to_file(
    title: &str,
    cells: &[GridCell],
    labels: &[HourLabel],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;
    write!(file, "{}", render_grid_text(title, cells, labels))?;
    Ok(())
}

/// Prints a combination's cells grouped by weekday
pub fn print_combination(title: &str, layout: &Layout) {
    println!("\n=== {} ===", title);
    println!("Total blocks placed: {}", layout.cells.len());

    if !layout.skipped.is_empty() {
        println!("⚠️  Skipped blocks ({}):", layout.skipped.len());
        for skip in &layout.skipped {
            println!("  - {}", skip);
        }
    }

    for (_, column) in WEEKDAY_COLUMNS.iter() {
        let mut day_cells: Vec<&GridCell> = layout.cells.iter().filter(|c| c.day_column == *column).collect();
        if day_cells.is_empty() {
            continue;
        }
        day_cells.sort_by_key(|c| c.row_start);

        println!("\n{}:", column_name(*column).unwrap_or("?"));
        for cell in day_cells {
            println!(
                "  {}-{} (rows {}) -> {} {}",
                row_to_time(cell.row_start),
                row_to_time(cell.row_end),
                cell.grid_row(),
                format_cell_text(cell),
                cell.color
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{hour_labels, layout};
    use crate::schedule::{Schedule, TimeBlock};

    #[test]
    fn cell_text_includes_room_for_long_blocks() {
        let schedule = Schedule::new()
            .with_subject("Quimica", Some("Lab 2 (Edificio C)"), vec![TimeBlock::new("friday", "13:00", "15:00")])
            .with_subject("Arte", Some("Taller"), vec![TimeBlock::new("monday", "08:00", "09:00")]);
        let cells = layout(&schedule);
        assert_eq!(format_cell_text(&cells[0]), "Quimica [Lab 2]");
        assert_eq!(format_cell_text(&cells[1]), "Arte");
    }

    #[test]
    fn long_labels_are_ellipsized() {
        assert_eq!(ellipsize("Programacion Orientada", 10), "Programac…");
        assert_eq!(ellipsize("Arte", 10), "Arte");
    }

    #[test]
    fn text_grid_marks_covered_rows() {
        let schedule = Schedule::new()
            .with_subject("Quimica", None, vec![TimeBlock::new("friday", "13:00", "15:00")]);
        let text = render_grid_text("Combinación 1 de 1", &layout(&schedule), &hour_labels());
        let lines: Vec<&str> = text.lines().collect();

        // title, header, then rows 2..=31
        assert_eq!(lines.len(), 2 + 30);
        assert!(lines[0].contains("Combinación 1 de 1"));
        assert!(lines[1].contains("fri"));

        let row = |r: usize| lines[2 + r - 2];
        assert!(row(2).starts_with("7:00"));
        assert!(row(14).starts_with("13:00"));
        assert!(row(14).contains("Quimica"));
        assert!(row(17).contains("Quimica"));
        assert!(!row(18).contains("Quimica"));
        assert!(!row(13).contains("Quimica"));
    }
}
