//! Sign-in form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::state::{FieldName, ValidationError};
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Sign In Form";
const BUTTON_LABEL: &str = "Sign In";
const SUCCESS_MESSAGE: &str = "Sign In successful!";

/// Draw the sign-in form into the rectangles computed by `layout`
pub fn draw_sign_in(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let form = &app.form;
    let state = form.state();
    let mask = app.config.mask_char();

    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.form);

    for (name, area) in FieldName::ALL.into_iter().zip(layout.fields) {
        let is_active = form.active_field_name() == Some(name);
        draw_field(frame, area, state.field(name), is_active, mask);
    }

    draw_field_error(frame, layout.username_error, state.username_error.as_ref());
    let mismatch = state
        .password_match_error
        .then_some(ValidationError::PasswordMismatch);
    draw_field_error(frame, layout.confirm_error, mismatch.as_ref());

    render_button(
        frame,
        layout.button,
        BUTTON_LABEL,
        form.is_button_active(),
        !form.is_sign_in_disabled(),
        Color::Green,
    );

    if state.sign_in_success {
        let message = Paragraph::new(Span::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(message, layout.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| crate::ui::draw(frame, app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn type_into(app: &mut App, field: FieldName, value: &str) {
        app.form.handle_change(field, value.to_string());
    }

    #[test]
    fn test_renders_title_labels_and_button() {
        let app = App::new(TuiConfig::default());
        let output = render(&app, 100, 30);
        assert!(output.contains("Sign In Form"), "should show title");
        assert!(output.contains("Username:"));
        assert!(output.contains("Password:"));
        assert!(output.contains("Confirm Password:"));
        assert!(output.contains("Sign In"));
        assert!(!output.contains("Sign In successful!"));
    }

    #[test]
    fn test_passwords_are_masked() {
        let mut app = App::new(TuiConfig {
            mask_char: Some('*'),
            ..Default::default()
        });
        type_into(&mut app, FieldName::Username, "Alice");
        type_into(&mut app, FieldName::Password, "hunter");
        let output = render(&app, 100, 30);
        assert!(output.contains("Alice"));
        assert!(!output.contains("hunter"));
        assert!(output.contains("******"));
    }

    #[test]
    fn test_inline_errors_are_shown() {
        let mut app = App::new(TuiConfig::default());
        type_into(&mut app, FieldName::Username, "al1ce");
        type_into(&mut app, FieldName::Password, "secret");
        type_into(&mut app, FieldName::ConfirmPassword, "other");
        let output = render(&app, 100, 30);
        assert!(output.contains("Username must contain only letters."));
        assert!(output.contains("Passwords do not match."));
    }

    #[test]
    fn test_success_message_after_submit() {
        let mut app = App::new(TuiConfig::default());
        type_into(&mut app, FieldName::Username, "Alice");
        type_into(&mut app, FieldName::Password, "secret");
        type_into(&mut app, FieldName::ConfirmPassword, "secret");
        app.form.handle_submit();
        let output = render(&app, 100, 30);
        assert!(output.contains("Sign In successful!"));
        assert!(!output.contains("Alice"));
    }

    #[test]
    fn test_renders_on_narrow_terminal() {
        let app = App::new(TuiConfig::default());
        let output = render(&app, 40, 24);
        assert!(output.contains("Sign In Form"));
        assert!(output.contains("Username:"));
    }

    #[test]
    fn test_help_bar_can_be_hidden() {
        let app = App::new(TuiConfig {
            show_help: Some(false),
            ..Default::default()
        });
        let output = render(&app, 100, 30);
        assert!(!output.contains("Tab/↓ next"));

        let app = App::new(TuiConfig::default());
        let output = render(&app, 100, 30);
        assert!(output.contains("Tab/↓ next"));
    }
}
