mod controls_bar;
mod header;
mod scenario_bar;
pub mod theme;
mod transcript_view;

pub use controls_bar::ControlsBar;
pub use header::Header;
pub use scenario_bar::ScenarioBar;
pub use transcript_view::{transcript_lines, TranscriptView};
