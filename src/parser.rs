use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::saved::SavedSchedule;
use crate::schedule::Schedule;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the combinations payload the planner backend returns
pub fn parse_combinations(json: &str) -> Result<Vec<Schedule>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads generated combinations from a JSON file
pub fn load_combinations<P: AsRef<Path>>(path: P) -> Result<Vec<Schedule>, LoadError> {
    load_json(path.as_ref())
}

/// Loads the schedules saved to a profile from a JSON file
pub fn load_saved_schedules<P: AsRef<Path>>(path: P) -> Result<Vec<SavedSchedule>, LoadError> {
    load_json(path.as_ref())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
