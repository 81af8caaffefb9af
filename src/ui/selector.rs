//! Form type selector rendering

use crate::state::{AppState, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the blank selector entry
pub const UNSELECTED_LABEL: &str = "Select Form Type";

/// Draw the single-select control for form types
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.focus == Focus::Selector;
    let accent = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let (label, label_style) = match state.selected_form_type_name() {
        Some(name) => (name, Style::default().add_modifier(Modifier::BOLD)),
        None => (UNSELECTED_LABEL, Style::default().fg(Color::DarkGray)),
    };

    let position = match state.selected_form_type {
        Some(index) => format!(" {}/{} ", index + 1, state.form_types.len()),
        None => format!(" -/{} ", state.form_types.len()),
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(accent)),
        Span::styled(label, label_style),
        Span::styled(" ▶", Style::default().fg(accent)),
    ]);

    let block = Block::default()
        .title(" Form Type ")
        .title_top(Line::from(position).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
