//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod ledger_table;
mod progress_bar;
mod selector;

use crate::app::App;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let state = &app.state;
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    selector::draw(frame, areas.selector, state);
    forms::draw_form(frame, areas.form, state);
    progress_bar::draw(frame, areas.progress, &state.progress);
    ledger_table::draw(frame, areas.ledger, state);
    layout::draw_status_bar(frame, areas.status, state);

    // Modal error dialog on top
    if let Some(message) = state.current_error() {
        render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::schema::SchemaCatalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn screen(app: &App) -> String {
        render(app).join("\n")
    }

    fn app_with(form_type: &str) -> App {
        let config = TuiConfig {
            initial_form_type: Some(form_type.to_string()),
            ..Default::default()
        };
        App::new(Box::new(SchemaCatalog::builtin()), &config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn row_of(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("{needle:?} not on screen"))
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(Box::new(SchemaCatalog::builtin()), &TuiConfig::default());
        let screen = screen(&app);
        assert!(screen.contains("Dynamic Form"));
        assert!(screen.contains("Select Form Type"));
        assert!(screen.contains("Select a form type to begin."));
        assert!(screen.contains("No submissions yet."));
        assert!(screen.contains("0%"));
    }

    #[test]
    fn test_address_fields_render_in_schema_order() {
        let app = app_with("Address Information");
        let lines = render(&app);

        let street = row_of(&lines, "Street *");
        let city = row_of(&lines, "City *");
        let state = row_of(&lines, "State *");
        let zip = row_of(&lines, "Zip Code");
        assert!(street < city && city < state && state < zip);

        assert!(lines[state + 1].contains("◀ Select ▶"));
        assert!(!lines[zip].contains("Zip Code *"));
        assert!(screen(&app).contains("Submit"));
    }

    #[test]
    fn test_required_error_is_shown_under_field() {
        let mut app = app_with("User Information");
        press(&mut app, KeyCode::Enter);
        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        app.submit();

        let lines = render(&app);
        let last_name = row_of(&lines, "Last Name *");
        let error = row_of(&lines, "Last Name is required.");
        // box of three rows, then the error line
        assert_eq!(error, last_name + 3);
        assert!(!screen(&app).contains("First Name is required."));
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut app = app_with("Payment Information");
        app.state.form.set_field_value("cvv", "987");
        let screen = screen(&app);
        assert!(screen.contains("•••"));
        assert!(!screen.contains("987"));
    }

    #[tokio::test]
    async fn test_submission_table_uses_schema_labels() {
        let mut app = app_with("User Information");
        app.state.form.set_field_value("firstName", "Ada");
        app.state.form.set_field_value("lastName", "Lovelace");
        app.submit();

        // the form is cleared after submit, so the values only live in the table
        let lines = render(&app);
        let row = row_of(&lines, "Lovelace");
        let header = &lines[row - 1];
        assert!(header.contains("Form"));
        assert!(header.contains("Last Name"));
        assert!(header.contains("Age"));
        assert!(lines[row].contains("User Information"));
        assert!(screen(&app).contains("Submissions (1)"));
        assert!(screen(&app).contains("100%"));
    }

    #[test]
    fn test_error_dialog_overlays_screen() {
        let mut app = App::new(Box::new(SchemaCatalog::builtin()), &TuiConfig::default());
        app.push_error("schema catalog defines no form types");
        let screen = screen(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("schema catalog defines no form types"));
        assert!(screen.contains("to dismiss"));
    }
}
