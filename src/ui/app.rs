use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::player::{PlaybackSession, SharedTranscript, Transcript, TranscriptSurface};
use crate::script::{Script, SCENARIO_OPTIONS};
use crate::stars::{GitHubClient, StarBadge, StarFetch};
use crate::ui::action::{action_for_key, Action};
use crate::ui::components::theme::TEXT_MUTED;
use crate::ui::components::{ControlsBar, Header, ScenarioBar, TranscriptView};
use crate::ui::events::AppEvent;
use crate::ui::terminal_guard::TerminalGuard;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Frames per animation tick (~300ms)
const FRAMES_PER_TICK: u32 = 18;
const PAGE_SCROLL: usize = 10;

/// Main application state
pub struct App {
    config: Config,
    should_quit: bool,
    /// Playback engine; writes into `transcript`
    session: PlaybackSession,
    /// Owned by the UI; the session only holds a weak handle
    transcript: SharedTranscript,
    transcript_view: TranscriptView,
    stars: StarBadge,
    star_fetch: Option<StarFetch>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    frame_count: u32,
}

impl App {
    pub fn new(config: Config, script: Arc<Script>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let transcript = Transcript::shared();
        let session = PlaybackSession::new(
            script,
            config.timing,
            TranscriptSurface::new(&transcript),
        );
        let stars = if config.stars.enabled {
            StarBadge::Loading
        } else {
            StarBadge::Hidden
        };

        Self {
            config,
            should_quit: false,
            session,
            transcript,
            transcript_view: TranscriptView::new(),
            stars,
            star_fetch: None,
            event_tx,
            event_rx,
            frame_count: 0,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PlaybackSession {
        &mut self.session
    }

    pub fn transcript(&self) -> &SharedTranscript {
        &self.transcript
    }

    pub fn stars(&self) -> StarBadge {
        self.stars
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop, optionally starting a scenario right away
    pub async fn run(&mut self, initial_scenario: Option<&str>) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.start_star_fetch();
        if let Some(key) = initial_scenario {
            if !self.session.select_scenario(key) {
                tracing::warn!(scenario = %key, "Requested scenario not found in script");
            }
        }

        let result = self.event_loop(&mut terminal).await;

        self.session.reset();
        self.star_fetch = None;
        guard.restore()?;
        terminal.show_cursor()?;

        result
    }

    /// Fetch the star count once; the result arrives as [`AppEvent::StarsLoaded`]
    pub fn start_star_fetch(&mut self) {
        if !self.config.stars.enabled || self.star_fetch.is_some() {
            return;
        }

        let client = match GitHubClient::new(self.config.stars.api_base.clone()) {
            Ok(client) => client,
            Err(e) => {
                tracing::debug!(error = %e, "Failed to build GitHub client");
                self.stars = StarBadge::Hidden;
                return;
            }
        };

        let tx = self.event_tx.clone();
        self.star_fetch = Some(StarFetch::spawn(
            client,
            self.config.stars.repo.clone(),
            move |badge| {
                let _ = tx.send(AppEvent::StarsLoaded(badge));
            },
        ));
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(FRAME_INTERVAL) => {
                    if event::poll(Duration::ZERO)? {
                        self.handle_terminal_event(event::read()?);
                    }
                    self.frame_count = self.frame_count.wrapping_add(1);
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if let Some(action) = action_for_key(key) {
                    self.handle_action(action);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.handle_action(Action::ScrollUp(3)),
                MouseEventKind::ScrollDown => self.handle_action(Action::ScrollDown(3)),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ActivateScenario(index) => {
                if let Some(option) = SCENARIO_OPTIONS.get(index) {
                    self.session.activate(option.key);
                    self.transcript_view.scroll_to_bottom();
                }
            }
            Action::TogglePause => {
                if self.session.selected().is_some() {
                    self.session.toggle_pause();
                }
            }
            Action::Reset => {
                self.session.reset();
                self.transcript_view.scroll_to_bottom();
            }
            Action::ScrollUp(n) => self.transcript_view.scroll_up(n as usize),
            Action::ScrollDown(n) => self.transcript_view.scroll_down(n as usize),
            Action::ScrollPageUp => self.transcript_view.scroll_up(PAGE_SCROLL),
            Action::ScrollPageDown => self.transcript_view.scroll_down(PAGE_SCROLL),
            Action::ScrollToTop => self.transcript_view.scroll_to_top(),
            Action::ScrollToBottom => self.transcript_view.scroll_to_bottom(),
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StarsLoaded(badge) => {
                self.stars = badge;
                self.star_fetch = None;
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(2), // scenario selector
                Constraint::Length(1), // controls
                Constraint::Length(1), // scenario description
                Constraint::Min(5),    // transcript
            ])
            .split(f.area());

        Header::new(self.stars).render(chunks[0], f.buffer_mut());
        ScenarioBar::new(SCENARIO_OPTIONS, self.session.selected())
            .render(chunks[1], f.buffer_mut());
        ControlsBar::new(self.session.state()).render(chunks[2], f.buffer_mut());

        if let Some(scenario) = self.session.scenario() {
            let description = Line::from(scenario.meta.description.clone()).centered();
            f.render_widget(
                Paragraph::new(description).style(Style::default().fg(TEXT_MUTED)),
                chunks[3],
            );
        }

        let tick = self.frame_count / FRAMES_PER_TICK;
        let transcript = self.transcript.lock();
        self.transcript_view
            .render(&transcript, tick, chunks[4], f.buffer_mut());
    }
}
