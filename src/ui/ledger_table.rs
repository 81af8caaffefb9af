//! Submission history table

use crate::state::{AppState, Focus, SubmissionLedger};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

const FORM_HEADER: &str = "Form";

/// Draw the ledger as a table; columns come from the submissions' schemas
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let ledger = &state.ledger;
    let border_color = if state.focus == Focus::Ledger {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" Submissions ({}) ", ledger.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if ledger.is_empty() {
        let empty = Paragraph::new("No submissions yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let columns = ledger.columns();
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        ["#", FORM_HEADER]
            .into_iter()
            .map(str::to_string)
            .chain(columns.iter().map(|c| c.label.clone()))
            .map(Cell::from),
    )
    .style(header_style);

    let rows = ledger
        .submissions()
        .iter()
        .zip(ledger.rows())
        .enumerate()
        .map(|(index, (submission, cells))| {
            let leading = [(index + 1).to_string(), submission.form_type.clone()];
            Row::new(leading.into_iter().chain(cells).map(Cell::from))
        });

    let widths = [
        Constraint::Length(3),
        Constraint::Length(form_column_width(ledger)),
    ]
        .into_iter()
        .chain(columns.iter().map(|_| Constraint::Fill(1)));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(block);

    frame.render_widget(table, area);
}

/// Wide enough for the longest form-type name and the header itself
fn form_column_width(ledger: &SubmissionLedger) -> u16 {
    ledger
        .submissions()
        .iter()
        .map(|s| s.form_type.chars().count())
        .max()
        .unwrap_or_default()
        .max(FORM_HEADER.len()) as u16
}
