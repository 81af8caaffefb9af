//! Submission progress gauge

use crate::state::Progress;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

/// Draw the 0-100 gauge that fills after each accepted submission
pub fn draw(frame: &mut Frame, area: Rect, progress: &Progress) {
    let color = if progress.is_active() {
        Color::Green
    } else {
        Color::DarkGray
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(progress.percent());

    frame.render_widget(gauge, area);
}
