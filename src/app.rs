//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{Form, SignInForm, SubmitOutcome};
use crate::ui::layout::FormLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// The sign-in form
    pub form: SignInForm,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            form: SignInForm::new(),
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_button = self.form.is_button_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if on_button => {
                self.submit();
            }
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Char('u') if ctrl => self.edit_active_field(String::clear),
            KeyCode::Char(c) if !ctrl => self.edit_active_field(|value| value.push(c)),
            KeyCode::Backspace => self.edit_active_field(|value| {
                value.pop();
            }),
            _ => {}
        }
    }

    /// Apply `edit` to the focused field's value and run the change handler
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.form.active_field_name() else {
            return;
        };
        let mut value = self.form.state().field(field).as_text().to_string();
        edit(&mut value);
        self.form.handle_change(field, value);
    }

    /// Submit the form if the button is enabled.
    ///
    /// Returns `None` when submission is disabled.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        // Leaving a field for the button blurs it first
        if let Some(field) = self.form.active_field_name() {
            self.form.handle_blur(field);
        }

        if self.form.is_sign_in_disabled() {
            tracing::debug!(phase = ?self.form.phase(), "submit ignored while disabled");
            return None;
        }

        let outcome = self.form.handle_submit();
        if let SubmitOutcome::Rejected(err) = &outcome {
            tracing::debug!(%err, "sign in rejected");
        }
        Some(outcome)
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        let Some((height, width)) = self.terminal_size else {
            return;
        };

        let layout = FormLayout::compute(Rect::new(0, 0, width, height), self.config.show_help());
        match layout.hit_test(mouse.column, mouse.row) {
            Some(SignInForm::BUTTON_INDEX) => {
                self.form.set_active_field(SignInForm::BUTTON_INDEX);
                self.submit();
            }
            Some(index) => self.form.set_active_field(index),
            None => {}
        }
    }
}
