use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::player::lexer;
use crate::player::timing::PlaybackTiming;
use crate::player::transcript::{
    EntryId, EntryKind, RunToken, ToolResultBody, Transcript, TranscriptSurface,
};
use crate::script::{Scenario, Script, Step, StepKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No scenario selected; the placeholder is showing
    Idle,
    Running,
    Paused,
    /// Every step of the selected scenario has rendered
    Completed,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Running => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Completed => "done",
        }
    }
}

/// The one run a session may have in flight
struct ActiveRun {
    token: RunToken,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ActiveRun {
    fn dispose(self) {
        self.cancel.cancel();
        self.task.abort();
        tracing::trace!(run = self.token.0, "Disposed playback run");
    }
}

/// Replays scenarios from a script into a transcript surface.
///
/// Selecting a scenario spawns a tokio task that walks the steps in order.
/// Reset, re-selection and drop all cancel that task through the same
/// disposal path, and the transcript only accepts writes from the run that
/// currently owns it. Must be used from within a tokio runtime.
pub struct PlaybackSession {
    script: Arc<Script>,
    timing: PlaybackTiming,
    surface: TranscriptSurface,
    selected: Option<String>,
    paused: watch::Sender<bool>,
    active: Option<ActiveRun>,
    next_token: u64,
}

impl PlaybackSession {
    pub fn new(script: Arc<Script>, timing: PlaybackTiming, surface: TranscriptSurface) -> Self {
        let (paused, _) = watch::channel(false);
        Self {
            script,
            timing,
            surface,
            selected: None,
            paused,
            active: None,
            next_token: 0,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn scenario(&self) -> Option<&Scenario> {
        self.selected
            .as_deref()
            .and_then(|key| self.script.scenario(key))
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    pub fn state(&self) -> PlaybackState {
        match (&self.selected, &self.active) {
            (None, _) => PlaybackState::Idle,
            (Some(_), None) => PlaybackState::Completed,
            (Some(_), Some(run)) if run.task.is_finished() => PlaybackState::Completed,
            _ if self.is_paused() => PlaybackState::Paused,
            _ => PlaybackState::Running,
        }
    }

    /// Start `key` from its first step, superseding any current run.
    ///
    /// Returns `false` and changes nothing when the script has no such scenario.
    pub fn select_scenario(&mut self, key: &str) -> bool {
        if !self.script.contains(key) {
            tracing::debug!(scenario = %key, "Ignoring unknown scenario");
            return false;
        }

        self.dispose_run();
        self.next_token += 1;
        let token = RunToken(self.next_token);

        self.selected = Some(key.to_string());
        self.paused.send_replace(false);
        self.surface.with(|t| t.begin_run(token));

        let cancel = CancellationToken::new();
        let runner = StepRunner {
            token,
            surface: self.surface.clone(),
            timing: self.timing,
            paused: self.paused.subscribe(),
            cancel: cancel.clone(),
        };
        let task = tokio::spawn(runner.run(self.script.clone(), key.to_string()));
        self.active = Some(ActiveRun {
            token,
            cancel,
            task,
        });

        tracing::debug!(scenario = %key, run = token.0, "Selected scenario");
        true
    }

    /// Selector behaviour: re-activating the current scenario resets instead
    pub fn activate(&mut self, key: &str) -> bool {
        if self.selected.as_deref() == Some(key) {
            self.reset();
            true
        } else {
            self.select_scenario(key)
        }
    }

    /// Flip the pause flag and return the new value
    pub fn toggle_pause(&mut self) -> bool {
        self.paused.send_modify(|paused| *paused = !*paused);
        let paused = self.is_paused();
        tracing::debug!(paused, "Toggled playback pause");
        paused
    }

    /// Cancel the current run and return to the idle placeholder
    pub fn reset(&mut self) {
        self.dispose_run();
        self.selected = None;
        self.paused.send_replace(false);
        self.surface.with(Transcript::reset_idle);
    }

    /// Wait until the current run ends on its own or is cancelled
    pub async fn wait_for_completion(&mut self) {
        if let Some(run) = self.active.as_mut() {
            if !run.task.is_finished() {
                let _ = (&mut run.task).await;
            }
        }
    }

    fn dispose_run(&mut self) {
        if let Some(run) = self.active.take() {
            run.dispose();
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.dispose_run();
    }
}

#[derive(Debug)]
struct Cancelled;

type StepResult = Result<(), Cancelled>;

/// Task-side half of a run
struct StepRunner {
    token: RunToken,
    surface: TranscriptSurface,
    timing: PlaybackTiming,
    paused: watch::Receiver<bool>,
    cancel: CancellationToken,
}

impl StepRunner {
    async fn run(self, script: Arc<Script>, key: String) {
        let Some(scenario) = script.scenario(&key) else {
            return;
        };

        match self.play(scenario).await {
            Ok(()) => tracing::debug!(scenario = %key, run = self.token.0, "Playback completed"),
            Err(Cancelled) => {
                tracing::debug!(scenario = %key, run = self.token.0, "Playback cancelled")
            }
        }
    }

    async fn play(&self, scenario: &Scenario) -> StepResult {
        let banner = self.write(|t| t.push(EntryKind::StartBanner));
        self.sleep(self.timing.start_banner).await?;
        if let Some(id) = banner {
            self.write(|t| t.remove(id));
        }

        for (index, step) in scenario.steps.iter().enumerate() {
            tracing::trace!(index, kind = step.kind.name(), "Executing step");
            self.execute(step).await?;
            if let Some(delay_ms) = step.delay_ms {
                self.sleep(Duration::from_millis(delay_ms)).await?;
            }
        }
        Ok(())
    }

    async fn execute(&self, step: &Step) -> StepResult {
        match &step.kind {
            StepKind::User { content } => {
                let id = self.write(|t| {
                    t.push(EntryKind::User {
                        content: content.clone(),
                        typing: true,
                    })
                });
                self.sleep(self.timing.user_typing).await?;
                if let Some(id) = id {
                    self.write(|t| t.finish_typing(id));
                }
                self.sleep(self.timing.user_settle).await?;
            }
            StepKind::Assistant { content } => {
                let id = self.write(|t| {
                    t.push(EntryKind::Assistant {
                        thinking: true,
                        segments: Vec::new(),
                    })
                });
                self.sleep(self.timing.assistant_thinking).await?;
                if let Some(id) = id {
                    self.write(|t| t.finish_thinking(id));
                    self.reveal(id, content).await?;
                }
            }
            StepKind::ToolCall { tool, params } => {
                self.write(|t| {
                    t.push(EntryKind::ToolCall {
                        tool: tool.clone(),
                        params: params.clone(),
                    })
                });
            }
            StepKind::ToolResult {
                single,
                content,
                items,
            } => {
                let body = if *single {
                    ToolResultBody::Text(content.clone())
                } else {
                    ToolResultBody::Items(items.clone())
                };
                self.write(|t| t.push(EntryKind::ToolResult(body)));
            }
            StepKind::Clear => {
                self.write(Transcript::clear);
            }
        }
        Ok(())
    }

    /// Typewriter reveal; pausing suspends between tokens, never inside one
    async fn reveal(&self, id: EntryId, text: &str) -> StepResult {
        let batch = self.timing.batch_size();
        for (index, token) in lexer::tokenize(text).enumerate() {
            self.wait_while_paused().await?;
            self.write(|t| t.append_token(id, token));
            if (index + 1) % batch == 0 {
                self.sleep(self.timing.char_delay).await?;
            }
        }
        Ok(())
    }

    async fn wait_while_paused(&self) -> StepResult {
        while self.is_paused() {
            self.sleep(self.timing.pause_poll).await?;
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    async fn sleep(&self, duration: Duration) -> StepResult {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }

    /// Apply `f` if the surface is mounted and this run still owns it
    fn write<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.surface.with_owner(self.token, f)
    }
}
