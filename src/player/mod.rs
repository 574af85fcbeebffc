//! Scripted playback engine.
//!
//! Turns a [`Scenario`](crate::script::Scenario) into a live-looking chat
//! transcript: user bubbles with a typing indicator, assistant replies revealed
//! by a typewriter, and atomic tool-call/tool-result cards.

pub mod lexer;
mod session;
mod timing;
pub mod transcript;

pub use lexer::{tokenize, RevealLexer, RevealToken};
pub use session::{PlaybackSession, PlaybackState};
pub use timing::PlaybackTiming;
pub use transcript::{
    segments_text, Entry, EntryId, EntryKind, RunToken, Segment, SharedTranscript,
    ToolResultBody, Transcript, TranscriptSurface,
};
