//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title and border color
    pub color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let width = config.max_width.min(area.width);
    // 2 borders + 2 columns of padding
    let text_width = width.saturating_sub(4).max(1) as usize;

    let message_rows: usize = config
        .message
        .split('\n')
        .map(|line| line.chars().count().div_ceil(text_width).max(1))
        .sum();
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    // title + blank + message + hint + borders
    let height = ((2 + message_rows + hint_rows + 2) as u16).min(area.height);

    let dialog_area = centered_rect(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.message.split('\n').map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.color))
        .style(Style::default().bg(Color::Black));
    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block.padding(Padding::horizontal(1)));

    frame.render_widget(dialog, dialog_area);
}

/// Rectangle of the given size centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(5, 5, 10, 10);
        let rect = centered_rect(area, 20, 20);
        assert_eq!((rect.x, rect.y), (5, 5));
    }
}
