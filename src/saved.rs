use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

pub const EMPTY_PROFILE_MESSAGE: &str = "Aún no tienes horarios guardados.";
pub const NO_DATE_TEXT: &str = "Sin fecha";

/// A schedule stored in the user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSchedule {
    #[serde(rename = "fechaCreacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub schedule: Schedule,
}

/// Entry in the profile's saved-schedules list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCard {
    pub index: usize,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cards: Vec<ScheduleCard>,
}

/// Formats a creation timestamp as dd/mm/yyyy in the viewer's local zone.
/// Accepts RFC 3339, a timestamp without offset, or a bare date.
pub fn format_created_at(raw: &str) -> Option<String> {
    format_created_at_in(raw, &Local)
}

/// Same as `format_created_at` for an explicit zone. Offset timestamps are
/// converted into `tz`; a timestamp without offset is already local wall
/// time; a bare date means midnight UTC.
pub fn format_created_at_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String> {
    let raw = raw.trim();
    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.with_timezone(tz).date_naive()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        dt.date()
    } else {
        let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)?;
        Utc.from_utc_datetime(&midnight).with_timezone(tz).date_naive()
    };
    Some(date.format("%d/%m/%Y").to_string())
}

pub fn schedule_cards(saved: &[SavedSchedule]) -> SavedListing {
    if saved.is_empty() {
        return SavedListing {
            message: Some(EMPTY_PROFILE_MESSAGE.to_string()),
            cards: Vec::new(),
        };
    }

    let cards = saved
        .iter()
        .enumerate()
        .map(|(i, s)| ScheduleCard {
            index: i,
            title: format!("Horario #{}", i + 1),
            subtitle: s
                .created_at
                .as_deref()
                .and_then(format_created_at)
                .unwrap_or_else(|| NO_DATE_TEXT.to_string()),
        })
        .collect();

    SavedListing { message: None, cards }
}
