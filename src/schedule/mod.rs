pub mod types;
pub mod slot_utils;

pub use types::{Schedule, SelectedOption, Selection, TimeBlock};
pub use slot_utils::{day_column, parse_time, row_to_time, time_to_row};
