//! Schema-driven form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::state::{AppState, Focus, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
const FIELD_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 1;

/// Draw the form for the selected schema, or a hint when none is bound
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let is_focused = state.focus == Focus::Form;

    let Some(schema) = form.schema() else {
        draw_empty(frame, area, state);
        return;
    };

    let title = format!(" {} ", form.form_type().unwrap_or_default());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Fields in schema order, then the submit button
    let mut constraints = Vec::with_capacity(schema.len() * 2 + 2);
    for _ in schema.fields() {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in schema.fields().iter().enumerate() {
        let is_active = is_focused && form.active_field() == index;
        let error = form.error(&field.name);
        draw_field(
            frame,
            chunks[index * 2],
            field,
            form.value(&field.name),
            error.is_some(),
            is_active,
        );
        draw_field_error(frame, chunks[index * 2 + 1], error);
    }

    let button_area = chunks[schema.len() * 2];
    let button_width = button_area.width.min(16);
    render_button(
        frame,
        Rect {
            width: button_width,
            ..button_area
        },
        "Submit",
        is_focused && form.is_submit_active(),
        Color::Green,
    );
}

fn draw_empty(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = match state.selected_form_type_name() {
        Some(name) => format!("No form is available for \"{name}\"."),
        None => "Select a form type to begin.".to_string(),
    };

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Form ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
