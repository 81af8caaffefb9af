//! Field rendering utilities for forms

use crate::schema::{FieldDefinition, FieldKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder for the blank dropdown choice
pub const DROPDOWN_BLANK: &str = "Select";

/// Text shown inside a field. Values are rendered as typed; only the
/// presentation depends on the field kind.
pub fn display_value(field: &FieldDefinition, value: Option<&str>, is_active: bool) -> String {
    let value = value.unwrap_or_default();

    match &field.kind {
        FieldKind::Dropdown(_) => {
            let choice = if value.is_empty() { DROPDOWN_BLANK } else { value };
            format!("◀ {choice} ▶")
        }
        _ if value.is_empty() && !is_active => match field.kind {
            FieldKind::Date => "YYYY-MM-DD".to_string(),
            FieldKind::Number => "(number)".to_string(),
            _ => "(empty)".to_string(),
        },
        FieldKind::Password => "•".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

/// Draw one schema field as a bordered single-line input
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDefinition,
    value: Option<&str>,
    has_error: bool,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let is_placeholder = value.unwrap_or_default().is_empty() && !field.is_dropdown();
    let text_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(
        display_value(field, value, is_active),
        text_style,
    )];
    if is_active && !field.is_dropdown() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let required = if field.required { " *" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, required))
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", field.kind.type_name()),
                Style::default().add_modifier(Modifier::DIM),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the inline error line under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_value_shown_as_typed() {
        let field = FieldDefinition::text("city", "City", true);
        assert_eq!(display_value(&field, Some("Austin"), false), "Austin");
    }

    #[test]
    fn test_empty_inactive_placeholders() {
        let text = FieldDefinition::text("city", "City", true);
        let date = FieldDefinition::date("expiryDate", "Expiry Date", true);
        let number = FieldDefinition::number("age", "Age", false);
        assert_eq!(display_value(&text, None, false), "(empty)");
        assert_eq!(display_value(&date, Some(""), false), "YYYY-MM-DD");
        assert_eq!(display_value(&number, None, false), "(number)");
    }

    #[test]
    fn test_empty_active_field_shows_nothing() {
        let text = FieldDefinition::text("city", "City", true);
        assert_eq!(display_value(&text, None, true), "");
    }

    #[test]
    fn test_password_is_masked() {
        let field = FieldDefinition::password("cvv", "CVV", true);
        assert_eq!(display_value(&field, Some("123"), false), "•••");
        assert_eq!(display_value(&field, Some("123"), true), "•••");
    }

    #[test]
    fn test_number_is_not_parsed() {
        let field = FieldDefinition::number("age", "Age", false);
        assert_eq!(display_value(&field, Some("12abc"), false), "12abc");
    }

    #[test]
    fn test_dropdown_blank_and_choice() {
        let field = FieldDefinition::dropdown("state", "State", &["Texas"], true);
        assert_eq!(display_value(&field, None, false), "◀ Select ▶");
        assert_eq!(display_value(&field, Some(""), true), "◀ Select ▶");
        assert_eq!(display_value(&field, Some("Texas"), false), "◀ Texas ▶");
    }
}
