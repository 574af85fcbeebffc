use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
        StatefulWidget, Widget,
    },
};
use unicode_width::UnicodeWidthChar;

use super::theme::{
    ACCENT, ACCENT_WARM, BORDER, CODE_BG, SUCCESS, SURFACE_BG, TEXT_FAINT, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::player::{EntryKind, Segment, ToolResultBody, Transcript};
use crate::script::ResultItem;

const PLACEHOLDER_TITLE: &str = "Select a scenario above to see how Claude uses YouTube MCP";
const ASSISTANT_INDENT: &str = "  ";
const PLACEHOLDER_HINT: &str = "Press 1-7 to pick a scenario, space to pause or resume";

/// Scrollable chat pane showing the live transcript
pub struct TranscriptView {
    /// Lines scrolled up from the bottom (0 = follow new output)
    scroll_offset: usize,
}

impl Default for TranscriptView {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptView {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    pub fn scroll_to_top(&mut self) {
        // Clamped during render
        self.scroll_offset = usize::MAX;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn render(&mut self, transcript: &Transcript, tick: u32, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER))
            .style(Style::default().bg(SURFACE_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let content = Rect {
            x: inner.x.saturating_add(1),
            y: inner.y,
            width: inner.width.saturating_sub(3),
            height: inner.height,
        };
        if content.width < 3 || content.height < 1 {
            return;
        }

        let lines = transcript_lines(transcript, content.width as usize, tick);
        let total = lines.len();
        let visible = content.height as usize;
        let max_scroll = total.saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let start = max_scroll - self.scroll_offset;
        let end = (start + visible).min(total);
        Paragraph::new(lines[start..end].to_vec()).render(content, buf);

        if total > visible {
            let bar_area = Rect {
                x: inner.x + inner.width.saturating_sub(1),
                y: inner.y,
                width: 1,
                height: inner.height,
            };
            let mut state = ScrollbarState::new(max_scroll).position(start);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_symbol(Some("│"))
                .thumb_symbol("┃")
                .render(bar_area, buf, &mut state);
        }
    }
}

/// Lay out every transcript entry for a pane `width` columns wide
pub fn transcript_lines(transcript: &Transcript, width: usize, tick: u32) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in transcript.entries() {
        match &entry.kind {
            EntryKind::Placeholder => push_placeholder(&mut lines),
            EntryKind::StartBanner => {
                lines.push(
                    Line::from(vec![
                        Span::styled("● ", Style::default().fg(SUCCESS)),
                        Span::styled("Starting demo...", Style::default().fg(TEXT_FAINT)),
                    ])
                    .centered(),
                );
            }
            EntryKind::User { content, typing } => push_user(content, *typing, width, &mut lines),
            EntryKind::Assistant { thinking, segments } => {
                push_assistant(*thinking, segments, width, tick, &mut lines)
            }
            EntryKind::ToolCall { tool, params } => push_tool_call(tool, params, width, &mut lines),
            EntryKind::ToolResult(body) => push_tool_result(body, width, &mut lines),
        }
        lines.push(Line::from(""));
    }
    lines
}

fn push_placeholder(lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("▶", Style::default().fg(TEXT_MUTED))).centered());
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            PLACEHOLDER_TITLE,
            Style::default().fg(TEXT_MUTED),
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            PLACEHOLDER_HINT,
            Style::default().fg(TEXT_FAINT),
        ))
        .centered(),
    );
}

fn push_user(content: &str, typing: bool, width: usize, lines: &mut Vec<Line<'static>>) {
    let mut header = vec![Span::styled(
        "You",
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
    )];
    if typing {
        header.push(Span::styled(
            " · typing...",
            Style::default().fg(TEXT_FAINT).add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(header).right_aligned());

    let text_style = Style::default().fg(TEXT_PRIMARY);
    for raw in content.split('\n') {
        for row in wrap_spans(&[Span::styled(raw.to_string(), text_style)], width) {
            lines.push(Line::from(row).right_aligned());
        }
    }
}

fn push_assistant(
    thinking: bool,
    segments: &[Segment],
    width: usize,
    tick: u32,
    lines: &mut Vec<Line<'static>>,
) {
    lines.push(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(ACCENT)),
        Span::styled(
            "Claude",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
    ]));

    if thinking {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(pulse_dots(tick));
        spans.push(Span::styled(
            " Claude is thinking",
            Style::default().fg(TEXT_FAINT),
        ));
        lines.push(Line::from(spans));
        return;
    }

    let body_width = width.saturating_sub(ASSISTANT_INDENT.len());
    let mut logical: Vec<Span<'static>> = Vec::new();

    for segment in segments {
        match segment {
            Segment::Text(text) => {
                logical.push(Span::styled(text.clone(), Style::default().fg(TEXT_SECONDARY)))
            }
            Segment::Bold(text) => logical.push(Span::styled(
                text.clone(),
                Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
            )),
            Segment::Code(text) => logical.push(Span::styled(
                text.clone(),
                Style::default().fg(ACCENT_WARM).bg(CODE_BG),
            )),
            Segment::LineBreak => flush_paragraph(&mut logical, body_width, lines),
        }
    }
    if !logical.is_empty() {
        flush_paragraph(&mut logical, body_width, lines);
    }
}

fn flush_paragraph(
    logical: &mut Vec<Span<'static>>,
    width: usize,
    lines: &mut Vec<Line<'static>>,
) {
    for row in wrap_spans(logical, width) {
        let mut spans = vec![Span::raw(ASSISTANT_INDENT)];
        spans.extend(row);
        lines.push(Line::from(spans));
    }
    logical.clear();
}

fn pulse_dots(tick: u32) -> Vec<Span<'static>> {
    let lit = (tick as usize) % 3;
    (0..3)
        .map(|i| {
            let color = if i == lit { TEXT_SECONDARY } else { TEXT_FAINT };
            Span::styled("●", Style::default().fg(color))
        })
        .collect()
}

fn push_tool_call(tool: &str, params: &str, width: usize, lines: &mut Vec<Line<'static>>) {
    let frame = Style::default().fg(BORDER);
    lines.push(Line::from(vec![
        Span::styled("┌─ ", frame),
        Span::styled("■ ", Style::default().fg(ACCENT_WARM)),
        Span::styled(
            "TOOL ",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
        ),
        Span::styled(tool.to_string(), Style::default().fg(TEXT_PRIMARY)),
    ]));

    let param_style = Style::default().fg(TEXT_SECONDARY);
    for raw in params.lines() {
        for row in wrap_spans(
            &[Span::styled(raw.to_string(), param_style)],
            width.saturating_sub(2),
        ) {
            let mut spans = vec![Span::styled("│ ", frame)];
            spans.extend(row);
            lines.push(Line::from(spans));
        }
    }
    lines.push(Line::from(Span::styled("└─", frame)));
}

fn push_tool_result(body: &ToolResultBody, width: usize, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(SUCCESS)),
        Span::styled(
            "RESULT",
            Style::default().fg(TEXT_FAINT).add_modifier(Modifier::BOLD),
        ),
    ]));

    match body {
        ToolResultBody::Text(text) => {
            let style = Style::default().fg(TEXT_SECONDARY);
            for raw in text.split('\n') {
                for row in wrap_spans(
                    &[Span::styled(raw.to_string(), style)],
                    width.saturating_sub(2),
                ) {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(row);
                    lines.push(Line::from(spans));
                }
            }
        }
        ToolResultBody::Items(items) => {
            for item in items {
                push_result_item(item, width, lines);
            }
        }
    }
}

fn push_result_item(item: &ResultItem, width: usize, lines: &mut Vec<Line<'static>>) {
    let title_style = Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD);
    let title_rows = wrap_spans(
        &[Span::styled(item.title.clone(), title_style)],
        width.saturating_sub(4),
    );
    for (i, row) in title_rows.into_iter().enumerate() {
        let marker = if i == 0 { "  ▸ " } else { "    " };
        let mut spans = vec![Span::styled(marker, Style::default().fg(ACCENT))];
        spans.extend(row);
        lines.push(Line::from(spans));
    }

    let meta = Style::default().fg(TEXT_FAINT);
    let mut spans = vec![
        Span::raw("    "),
        Span::styled(item.channel.clone(), meta),
    ];
    let extras = [
        (item.views.as_deref(), meta),
        (item.duration.as_deref(), Style::default().fg(TEXT_MUTED)),
    ];
    for (value, style) in extras {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            spans.push(Span::styled(" | ", meta));
            spans.push(Span::styled(value.to_string(), style));
        }
    }
    lines.push(Line::from(spans));
}

/// Word-wrap styled spans to `width` display columns.
///
/// Breaks after the last whitespace when possible, otherwise mid-word.
/// Always yields at least one (possibly empty) row.
fn wrap_spans(spans: &[Span<'static>], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<(char, Style)>> = Vec::new();
    let mut current: Vec<(char, Style)> = Vec::new();
    let mut current_width = 0usize;
    let mut break_at: Option<usize> = None;

    for span in spans {
        for ch in span.content.chars().filter(|c| !c.is_control()) {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                let carry = match break_at {
                    Some(idx) if idx < current.len() => current.split_off(idx),
                    _ => Vec::new(),
                };
                rows.push(std::mem::replace(&mut current, carry));
                current_width = current.iter().map(|(c, _)| c.width().unwrap_or(0)).sum();
                break_at = None;
            }
            current.push((ch, span.style));
            current_width += ch_width;
            if ch.is_whitespace() {
                break_at = Some(current.len());
            }
        }
    }
    rows.push(current);

    rows.into_iter().map(group_by_style).collect()
}

fn group_by_style(chars: Vec<(char, Style)>) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut buffer = String::new();
    let mut style: Option<Style> = None;

    for (ch, ch_style) in chars {
        if style.is_some_and(|s| s != ch_style) {
            spans.push(Span::styled(std::mem::take(&mut buffer), style.unwrap_or_default()));
        }
        style = Some(ch_style);
        buffer.push(ch);
    }
    if !buffer.is_empty() {
        spans.push(Span::styled(buffer, style.unwrap_or_default()));
    }
    spans
}
