use serde::Serialize;

use super::layout::{hour_labels, layout, GridCell, HourLabel};
use crate::schedule::Schedule;

/// The container that owns whatever is currently drawn on the grid.
/// Cells are replaced on every render, labels only ever get appended.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GridSurface {
    cells: Vec<GridCell>,
    labels: Vec<HourLabel>,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn labels(&self) -> &[HourLabel] {
        &self.labels
    }

    pub fn clear_cells(&mut self) {
        self.cells.clear();
    }

    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }
}

/// Clears every cell on `surface` and lays `schedule` out in their place
pub fn render<'a>(surface: &'a mut GridSurface, schedule: &Schedule) -> &'a [GridCell] {
    surface.clear_cells();
    surface.cells.extend(layout(schedule));
    &surface.cells
}

/// Appends the hour-axis labels. Not deduplicated, call once per surface.
pub fn render_hour_labels(surface: &mut GridSurface) -> &[HourLabel] {
    surface.labels.extend(hour_labels());
    &surface.labels
}
