//! Status bar with key hints and the current form phase

use crate::app::App;
use crate::state::{BlockReason, FormPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str =
    "Tab/↓ next  Shift+Tab/↑ prev  Enter next/submit  Ctrl+S submit  Ctrl+U clear  Esc quit";

fn block_reason_label(reason: BlockReason) -> String {
    match reason {
        BlockReason::EmptyField(field) => format!("{field} is empty"),
        BlockReason::InvalidUsername => "Username is invalid".to_string(),
        BlockReason::PasswordMismatch => "Passwords differ".to_string(),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    match app.form.phase() {
        FormPhase::Editing => {
            spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
        }
        FormPhase::Submitted => {
            spans.push(Span::styled(" ✓ ", Style::default().fg(Color::Green)));
        }
        FormPhase::SubmitBlocked(reason) => {
            spans.push(Span::styled(" ○ ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                block_reason_label(reason),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(" | "));
        }
    }

    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
