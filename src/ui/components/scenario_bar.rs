use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::theme::{ACCENT, PANEL_BG, TEXT_FAINT, TEXT_SECONDARY};
use crate::script::ScenarioOption;

/// Selector row listing every scenario with its number key
pub struct ScenarioBar<'a> {
    options: &'a [ScenarioOption],
    active: Option<&'a str>,
}

impl<'a> ScenarioBar<'a> {
    pub fn new(options: &'a [ScenarioOption], active: Option<&'a str>) -> Self {
        Self { options, active }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        for (i, option) in self.options.iter().enumerate() {
            let is_active = self.active == Some(option.key);
            let (key_style, title_style) = if is_active {
                let style = Style::default()
                    .fg(TEXT_SECONDARY)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD);
                (style, style)
            } else {
                (
                    Style::default().fg(TEXT_FAINT),
                    Style::default().fg(TEXT_SECONDARY),
                )
            };

            spans.push(Span::styled(format!(" {} ", i + 1), key_style));
            spans.push(Span::styled(format!("{} ", option.title), title_style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans).centered()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(PANEL_BG))
            .render(area, buf);
    }
}
