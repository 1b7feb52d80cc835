use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::SerializeMap;

/// A single contiguous interval on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    #[serde(rename = "dia")]
    pub day: String,
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    #[serde(rename = "horaFin")]
    pub end_time: String,
}

/// The room/option chosen for one subject inside a combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    #[serde(rename = "nombre", default)]
    pub room_label: Option<String>,
    #[serde(rename = "bloques", default)]
    pub blocks: Vec<TimeBlock>,
}

/// One subject of a combination, kept in the order the backend sent it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub subject: String,
    pub option: SelectedOption,
}

/// One candidate combination returned by the planner backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(
        rename = "selecciones",
        default,
        serialize_with = "serialize_selections",
        deserialize_with = "deserialize_selections"
    )]
    pub selections: Vec<Selection>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by the CLI fixtures and tests
    pub fn with_subject(mut self, subject: &str, room_label: Option<&str>, blocks: Vec<TimeBlock>) -> Self {
        self.selections.push(Selection {
            subject: subject.to_string(),
            option: SelectedOption {
                room_label: room_label.map(str::to_string),
                blocks,
            },
        });
        self
    }

    pub fn block_count(&self) -> usize {
        self.selections.iter().map(|s| s.option.blocks.len()).sum()
    }
}

impl TimeBlock {
    pub fn new(day: &str, start_time: &str, end_time: &str) -> Self {
        TimeBlock {
            day: day.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

// `selecciones` is a JSON object whose key order is the render order, so it is
// read into a Vec instead of a HashMap.
fn deserialize_selections<'de, D>(deserializer: D) -> Result<Vec<Selection>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SelectionsVisitor;

    impl<'de> Visitor<'de> for SelectionsVisitor {
        type Value = Vec<Selection>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of subject name to selected option")
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut selections: Vec<Selection> = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((subject, option)) = access.next_entry::<String, SelectedOption>()? {
                // Later duplicates overwrite earlier ones but keep the first position
                if let Some(existing) = selections.iter_mut().find(|s| s.subject == subject) {
                    existing.option = option;
                } else {
                    selections.push(Selection { subject, option });
                }
            }
            Ok(selections)
        }
    }

    deserializer.deserialize_map(SelectionsVisitor)
}

fn serialize_selections<S>(selections: &[Selection], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(selections.len()))?;
    for selection in selections {
        map.serialize_entry(&selection.subject, &selection.option)?;
    }
    map.end()
}
