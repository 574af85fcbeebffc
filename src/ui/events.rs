use crate::stars::StarBadge;

/// Application-level events delivered through the app channel
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Star fetch finished (successfully or not)
    StarsLoaded(StarBadge),
}
