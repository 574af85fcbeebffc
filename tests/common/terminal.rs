//! TUI testing utilities using Ratatui's TestBackend

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use ytmcp_demo::App;

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Render one frame of the app and return the screen contents
pub fn draw_app(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw frame");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Text of a single row with trailing whitespace removed
pub fn row(screen: &str, y: usize) -> &str {
    screen.lines().nth(y).unwrap_or_default().trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_buffer_rows() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| f.render_widget(Paragraph::new("AB\nCD"), f.area()))
            .unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        assert_eq!(row(&screen, 0), "AB");
        assert_eq!(row(&screen, 1), "CD");
        assert_eq!(row(&screen, 2), "");
    }
}
