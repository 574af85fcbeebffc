pub mod config;
pub mod player;
pub mod script;
pub mod stars;
pub mod ui;
pub mod util;

pub use config::Config;
pub use player::{PlaybackSession, PlaybackState, PlaybackTiming, Transcript, TranscriptSurface};
pub use script::{Scenario, Script, ScriptError, SCENARIO_OPTIONS};
pub use stars::{GitHubClient, RepoRef, StarBadge};
pub use ui::App;
