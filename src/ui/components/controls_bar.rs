//! Playback status and key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT, PANEL_BG, PAUSED, SUCCESS, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};
use crate::player::PlaybackState;

const IDLE_HINTS: &[(&str, &str)] = &[("1-7", "play scenario"), ("q", "quit")];

const ACTIVE_HINTS: &[(&str, &str)] = &[
    ("space", "pause/resume"),
    ("r", "reset"),
    ("PgUp/PgDn", "scroll"),
    ("q", "quit"),
];

pub struct ControlsBar {
    state: PlaybackState,
}

impl ControlsBar {
    pub fn new(state: PlaybackState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state {
            PlaybackState::Idle => IDLE_HINTS,
            _ => ACTIVE_HINTS,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if self.state != PlaybackState::Idle {
            let color = match self.state {
                PlaybackState::Running => SUCCESS,
                PlaybackState::Paused => PAUSED,
                PlaybackState::Completed | PlaybackState::Idle => TEXT_MUTED,
            };
            spans.push(Span::styled(
                format!(" {} ", self.state.label().to_uppercase()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│ ", Style::default().fg(TEXT_FAINT)));
        }

        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(TEXT_FAINT)));
            }
            spans.push(Span::styled(key.to_string(), Style::default().fg(ACCENT)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }

        Line::from(spans).centered()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .style(Style::default().bg(PANEL_BG))
            .render(area, buf);
    }
}
