use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT, STAR, TEXT_MUTED, TEXT_PRIMARY};
use crate::stars::StarBadge;

const TITLE: &str = "YouTube Connector MCP";
const SUBTITLE: &str = "Interactive Demo";

/// Title row with the GitHub star badge on the right
pub struct Header {
    stars: StarBadge,
}

impl Header {
    pub fn new(stars: StarBadge) -> Self {
        Self { stars }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(" ▶ ", Style::default().fg(ACCENT)),
            Span::styled(
                TITLE,
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {SUBTITLE}"), Style::default().fg(TEXT_MUTED)),
        ];

        if let Some(label) = self.stars.label() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("★ ", Style::default().fg(STAR)));
            spans.push(Span::styled(label, Style::default().fg(TEXT_MUTED)));
        }

        Line::from(spans)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
