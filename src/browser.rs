use crate::grid::{render, GridCell, GridSurface};
use crate::schedule::Schedule;

pub const NO_SCHEDULES_MESSAGE: &str = "No hay horarios para mostrar";

/// Steps through the combinations the planner generated, one at a time
#[derive(Debug, Clone, Default)]
pub struct CombinationBrowser {
    combinations: Vec<Schedule>,
    index: usize,
}

impl CombinationBrowser {
    pub fn new(combinations: Vec<Schedule>) -> Self {
        CombinationBrowser { combinations, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn combinations(&self) -> &[Schedule] {
        &self.combinations
    }

    pub fn current(&self) -> Option<&Schedule> {
        self.combinations.get(self.index)
    }

    /// Moves forward, stopping at the last combination
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.combinations.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back, stopping at the first combination
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn caption(&self) -> String {
        if self.is_empty() {
            return NO_SCHEDULES_MESSAGE.to_string();
        }
        format!("Combinación {} de {}", self.index + 1, self.combinations.len())
    }

    /// Re-renders the current combination onto `surface`. With nothing loaded
    /// the surface is simply cleared.
    pub fn render_current<'a>(&self, surface: &'a mut GridSurface) -> &'a [GridCell] {
        match self.current() {
            Some(schedule) => render(surface, schedule),
            None => {
                surface.clear_cells();
                surface.cells()
            }
        }
    }
}
