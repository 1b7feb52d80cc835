use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::color::{color_of, HslColor};
use crate::schedule::slot_utils::{GRID_END_HOUR, GRID_START_HOUR, LABEL_COLUMN};
use crate::schedule::{day_column, parse_time, time_to_row, Schedule, SelectedOption, TimeBlock};

/// Sub-label shown when the backend sends no room name
pub const ROOM_PLACEHOLDER: &str = "S/N";

/// One positioned block on the weekly grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub subject: String,
    pub day_column: u8,
    pub row_start: i32,
    pub row_end: i32,
    pub label: String,
    /// Room name, only present on blocks longer than an hour
    pub sub_label: Option<String>,
    /// Short blocks show the label alone, ellipsized
    pub compact: bool,
    pub color: HslColor,
}

impl GridCell {
    /// CSS `grid-row` value
    pub fn grid_row(&self) -> String {
        format!("{} / {}", self.row_start, self.row_end)
    }
}

/// Hour-axis label in the first column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourLabel {
    pub text: String,
    pub column: u8,
    pub row: i32,
}

/// Why a block produced no cell
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkippedBlock {
    #[error("unknown day '{day}' for {subject}")]
    UnknownDay { subject: String, day: String },
    #[error("unreadable time '{time}' for {subject}")]
    UnreadableTime { subject: String, time: String },
}

/// Result of laying out a schedule, skipped blocks included
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub cells: Vec<GridCell>,
    pub skipped: Vec<SkippedBlock>,
}

/// Replaces escaped newline markers (`\n` as two characters) with a space
pub fn clean_name(subject: &str) -> String {
    subject.replace("\\n", " ")
}

/// Text before the first '(' of the room name, or the placeholder
pub fn room_text(option: &SelectedOption) -> String {
    match option.room_label.as_deref() {
        Some(room) if !room.is_empty() => room.split('(').next().unwrap_or(room).to_string(),
        _ => ROOM_PLACEHOLDER.to_string(),
    }
}

/// Lays out every block of `schedule`. Never fails: blocks that cannot be
/// placed are collected in `skipped` and the rest still render.
pub fn layout_detailed(schedule: &Schedule) -> Layout {
    let mut result = Layout::default();

    for selection in &schedule.selections {
        let name = clean_name(&selection.subject);
        let color = color_of(&name);
        let room = room_text(&selection.option);

        for block in &selection.option.blocks {
            match place_block(&name, &room, color, block) {
                Ok(cell) => result.cells.push(cell),
                Err(skip) => {
                    debug!("Skipping block: {}", skip);
                    result.skipped.push(skip);
                }
            }
        }
    }

    result
}

/// Cells for `schedule`, in subject then block order
pub fn layout(schedule: &Schedule) -> Vec<GridCell> {
    layout_detailed(schedule).cells
}

fn place_block(name: &str, room: &str, color: HslColor, block: &TimeBlock) -> Result<GridCell, SkippedBlock> {
    let day_column = day_column(&block.day).ok_or_else(|| SkippedBlock::UnknownDay {
        subject: name.to_string(),
        day: block.day.clone(),
    })?;

    let unreadable = |time: &str| SkippedBlock::UnreadableTime {
        subject: name.to_string(),
        time: time.to_string(),
    };
    let (start_hour, start_minute) = parse_time(&block.start_time).ok_or_else(|| unreadable(&block.start_time))?;
    let (end_hour, end_minute) = parse_time(&block.end_time).ok_or_else(|| unreadable(&block.end_time))?;

    // Whole-hour difference, minutes ignored
    let compact = end_hour.saturating_sub(start_hour) <= 1;

    Ok(GridCell {
        subject: name.to_string(),
        day_column,
        row_start: time_to_row(start_hour, start_minute),
        row_end: time_to_row(end_hour, end_minute),
        label: name.to_string(),
        sub_label: if compact { None } else { Some(room.to_string()) },
        compact,
        color,
    })
}

/// One label per hour from 7:00 to 21:00
pub fn hour_labels() -> Vec<HourLabel> {
    (GRID_START_HOUR..=GRID_END_HOUR)
        .map(|hour| HourLabel {
            text: format!("{}:00", hour),
            column: LABEL_COLUMN,
            row: time_to_row(hour, 0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single(subject: &str, room: Option<&str>, block: TimeBlock) -> Layout {
        layout_detailed(&Schedule::new().with_subject(subject, room, vec![block]))
    }

    #[test]
    fn first_half_hour_on_monday() {
        let result = single("Algebra", Some("A1"), TimeBlock::new("monday", "07:00", "07:30"));
        let cell = &result.cells[0];
        assert_eq!(cell.day_column, 2);
        assert_eq!(cell.row_start, 2);
        assert_eq!(cell.row_end, 3);
        assert!(cell.compact);
        assert_eq!(cell.sub_label, None);
    }

    #[test]
    fn long_friday_block_shows_room() {
        let result = single("Quimica", Some("Laboratorio 2 (Edificio C)"), TimeBlock::new("friday", "13:00", "15:00"));
        assert_eq!(
            result.cells,
            vec![GridCell {
                subject: "Quimica".to_string(),
                day_column: 6,
                row_start: 14,
                row_end: 18,
                label: "Quimica".to_string(),
                sub_label: Some("Laboratorio 2 ".to_string()),
                compact: false,
                color: color_of("Quimica"),
            }]
        );
        assert_eq!(result.cells[0].grid_row(), "14 / 18");
    }

    #[test]
    fn unknown_day_is_skipped() {
        let result = single("Historia", Some("B2"), TimeBlock::new("holiday", "08:00", "09:00"));
        assert!(result.cells.is_empty());
        assert_eq!(
            result.skipped,
            vec![SkippedBlock::UnknownDay { subject: "Historia".to_string(), day: "holiday".to_string() }]
        );
    }

    #[test]
    fn missing_room_uses_placeholder() {
        let result = single("Fisica", None, TimeBlock::new("tuesday", "10:00", "12:00"));
        assert_eq!(result.cells[0].sub_label.as_deref(), Some(ROOM_PLACEHOLDER));
        assert_eq!(result.cells[0].day_column, 3);

        let empty = single("Fisica", Some(""), TimeBlock::new("tuesday", "10:00", "12:00"));
        assert_eq!(empty.cells[0].sub_label.as_deref(), Some("S/N"));
    }

    #[test]
    fn one_hour_difference_is_compact_even_with_minutes() {
        let result = single("Ingles", Some("C3"), TimeBlock::new("thursday", "08:00", "09:59"));
        assert!(result.cells[0].compact);
        let result = single("Ingles", Some("C3"), TimeBlock::new("thursday", "08:30", "10:00"));
        assert!(!result.cells[0].compact);
        assert_eq!(result.cells[0].row_start, 5);
        assert_eq!(result.cells[0].row_end, 8);
    }

    #[test]
    fn day_names_are_case_insensitive() {
        let result = single("Arte", None, TimeBlock::new("Saturday", "9:00", "10:00"));
        assert_eq!(result.cells[0].day_column, 7);
        assert_eq!(result.cells[0].row_start, 6);
    }

    #[test]
    fn escaped_newlines_become_spaces() {
        let result = single("Calculo\\nDiferencial", None, TimeBlock::new("monday", "08:00", "09:00"));
        assert_eq!(result.cells[0].label, "Calculo Diferencial");
        assert_eq!(result.cells[0].color, color_of("Calculo Diferencial"));
    }

    #[test]
    fn out_of_range_times_are_not_clipped() {
        let result = single("Nocturno", None, TimeBlock::new("sunday", "06:00", "23:30"));
        assert_eq!(result.cells[0].row_start, 0);
        assert_eq!(result.cells[0].row_end, 35);
    }

    #[test]
    fn seconds_in_times_are_ignored() {
        let result = single("Redes", Some("Lab 4"), TimeBlock::new("monday", "08:00:00", "10:00:00"));
        assert!(result.skipped.is_empty());
        assert_eq!(result.cells[0].row_start, 4);
        assert_eq!(result.cells[0].row_end, 8);
        assert!(!result.cells[0].compact);
    }

    #[test]
    fn padded_day_name_is_unknown() {
        let result = single("Redes", None, TimeBlock::new(" monday ", "08:00", "10:00"));
        assert!(result.cells.is_empty());
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn absurd_hours_still_emit_a_cell() {
        let schedule = Schedule::new()
            .with_subject("Etica", None, vec![
                TimeBlock::new("monday", "2000000000:00", "9:00"),
                TimeBlock::new("tuesday", "-2147483648:00", "2147483647:59"),
            ])
            .with_subject("Musica", None, vec![TimeBlock::new("friday", "10:00", "11:00")]);

        let result = layout_detailed(&schedule);
        assert_eq!(result.cells.len(), 3);
        assert_eq!(result.cells[0].row_start, i32::MAX);
        assert_eq!(result.cells[0].row_end, 6);
        assert!(result.cells[0].compact);
        assert_eq!(result.cells[1].row_start, i32::MIN + 2);
        assert_eq!(result.cells[1].row_end, i32::MAX);
        assert!(!result.cells[1].compact);
        assert_eq!(result.cells[2].subject, "Musica");
    }

    #[test]
    fn bad_block_does_not_stop_siblings() {
        let schedule = Schedule::new()
            .with_subject("Etica", None, vec![
                TimeBlock::new("someday", "08:00", "09:00"),
                TimeBlock::new("monday", "xx", "09:00"),
                TimeBlock::new("monday", "08:00", "09:00"),
            ])
            .with_subject("Musica", None, vec![TimeBlock::new("friday", "10:00", "11:00")]);

        let result = layout_detailed(&schedule);
        assert_eq!(result.cells.len(), 2);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.cells[0].subject, "Etica");
        assert_eq!(result.cells[1].subject, "Musica");
    }

    #[test]
    fn hour_labels_cover_seven_to_twenty_one() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], HourLabel { text: "7:00".to_string(), column: 1, row: 2 });
        assert_eq!(labels[14], HourLabel { text: "21:00".to_string(), column: 1, row: 30 });
    }
}
