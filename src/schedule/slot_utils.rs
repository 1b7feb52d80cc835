/// First hour shown on the grid
pub const GRID_START_HOUR: i32 = 7;
/// Last hour that gets an axis label
pub const GRID_END_HOUR: i32 = 21;
/// Rows 1 and below belong to the header
pub const HEADER_ROW_OFFSET: i32 = 2;
/// Column 1 holds the hour labels, weekdays start at 2
pub const LABEL_COLUMN: u8 = 1;
pub const SLOTS_PER_HOUR: i32 = 2;

/// Lowercase weekday name -> grid column
pub const WEEKDAY_COLUMNS: [(&str, u8); 7] = [
    ("monday", 2),
    ("tuesday", 3),
    ("wednesday", 4),
    ("thursday", 5),
    ("friday", 6),
    ("saturday", 7),
    ("sunday", 8),
];

/// Resolves a weekday name (any case) to its grid column.
/// Surrounding whitespace is not stripped, " monday " is unknown.
pub fn day_column(day: &str) -> Option<u8> {
    let day = day.to_lowercase();
    WEEKDAY_COLUMNS
        .iter()
        .find(|(name, _)| *name == day)
        .map(|(_, column)| *column)
}

/// Short header for a grid column, used by the text renderings
pub fn column_name(column: u8) -> Option<&'static str> {
    WEEKDAY_COLUMNS
        .iter()
        .find(|(_, c)| *c == column)
        .map(|(name, _)| &name[..3])
}

/// Parses "H:MM" or "HH:MM" into (hour, minute); a seconds part is ignored.
/// Ranges are not checked; a missing minute part counts as zero.
pub fn parse_time(time_str: &str) -> Option<(i32, i32)> {
    let mut parts = time_str.trim().split(':');
    let hours: i32 = parts.next()?.trim().parse().ok()?;
    let minutes: i32 = match parts.next() {
        Some(m) if !m.trim().is_empty() => m.trim().parse().ok()?,
        _ => 0,
    };
    Some((hours, minutes))
}

/// Grid row of a time, 07:00 = row 2, one row per 30 minutes.
/// Times outside the visible range give rows outside it; nothing is clipped.
/// Arithmetic saturates at the i32 bounds so absurd hours still yield a row.
pub fn time_to_row(hour: i32, minute: i32) -> i32 {
    let half = if minute >= 30 { 1 } else { 0 };
    hour.saturating_sub(GRID_START_HOUR)
        .saturating_mul(SLOTS_PER_HOUR)
        .saturating_add(half + HEADER_ROW_OFFSET)
}

/// Start time of a grid row, formatted HH:MM
pub fn row_to_time(row: i32) -> String {
    let minutes = (i64::from(row) - i64::from(HEADER_ROW_OFFSET)) * 30 + i64::from(GRID_START_HOUR) * 60;
    minutes_to_time_string(minutes)
}

/// Formats minutes since midnight to time string (HH:MM)
pub fn minutes_to_time_string(minutes: i64) -> String {
    let minutes = minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Row of the last visible slot (21:30)
pub fn last_visible_row() -> i32 {
    time_to_row(GRID_END_HOUR, 30)
}
