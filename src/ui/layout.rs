//! Layout components (header, panels, status bar)

use crate::platform::{CLEAR_SHORTCUT, QUIT_HINT, SUBMIT_SHORTCUT};
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions
pub struct ScreenAreas {
    pub header: Rect,
    pub selector: Rect,
    pub form: Rect,
    pub progress: Rect,
    pub ledger: Rect,
    pub status: Rect,
}

/// Split the screen: form column on the left, history on the right
pub fn create_layout(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    ScreenAreas {
        header: rows[0],
        selector: left[0],
        form: left[1],
        progress: right[0],
        ledger: right[1],
        status: rows[2],
    }
}

/// Draw the application title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Dynamic Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" {}", get_focus_hints(state)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let width = QUIT_HINT.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        width: width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(QUIT_HINT).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused panel
fn get_focus_hints(state: &AppState) -> String {
    match state.focus {
        Focus::Selector => "←/→:form type  Enter/Tab:fill in  q:quit".to_string(),
        Focus::Form if state.form.is_submit_active() => {
            format!("Enter:submit  Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:back")
        }
        Focus::Form
            if state
                .form
                .active_definition()
                .is_some_and(|f| f.is_dropdown()) =>
        {
            format!("←/→:choose  Tab:next  {SUBMIT_SHORTCUT}:submit  Esc:back")
        }
        Focus::Form => {
            format!("Tab:next  {CLEAR_SHORTCUT}:clear  {SUBMIT_SHORTCUT}:submit  Esc:back")
        }
        Focus::Ledger => "y:copy JSON  Tab:next  Esc:back".to_string(),
    }
}
