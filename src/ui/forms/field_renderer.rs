//! Field rendering utilities for forms

use crate::state::{FormField, ValidationError};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line input using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, mask: char) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(mask);
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {}: ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline error line under a field, if there is one
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<&ValidationError>) {
    if let Some(error) = error {
        let line = Paragraph::new(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, area);
    }
}
