use std::time::Duration;

/// Pacing used while replaying a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// How long the "Starting demo..." banner stays up
    pub start_banner: Duration,
    /// User bubble shows "typing..." for this long
    pub user_typing: Duration,
    /// Pause after the typing indicator disappears
    pub user_settle: Duration,
    /// Assistant "thinking" dots before the reveal starts
    pub assistant_thinking: Duration,
    /// Wait after each batch of revealed tokens
    pub char_delay: Duration,
    pub chars_per_batch: usize,
    /// Poll interval while paused mid-reveal
    pub pause_poll: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            start_banner: Duration::from_millis(1000),
            user_typing: Duration::from_millis(800),
            user_settle: Duration::from_millis(400),
            assistant_thinking: Duration::from_millis(600),
            char_delay: Duration::from_millis(30),
            chars_per_batch: 3,
            pause_poll: Duration::from_millis(50),
        }
    }
}

impl PlaybackTiming {
    /// Zero delays everywhere; handy for tests that only care about output
    pub fn instant() -> Self {
        Self {
            start_banner: Duration::ZERO,
            user_typing: Duration::ZERO,
            user_settle: Duration::ZERO,
            assistant_thinking: Duration::ZERO,
            char_delay: Duration::ZERO,
            chars_per_batch: 1,
            pause_poll: Duration::from_millis(1),
        }
    }

    pub(crate) fn batch_size(&self) -> usize {
        self.chars_per_batch.max(1)
    }
}
