pub mod color;
pub mod layout;
pub mod surface;

pub use color::{color_of, HslColor};
pub use layout::{hour_labels, layout, layout_detailed, GridCell, HourLabel, Layout, SkippedBlock};
pub use surface::{render, render_hour_labels, GridSurface};
