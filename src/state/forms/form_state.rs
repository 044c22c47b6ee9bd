//! Sign-in form state and its change/blur/submit handlers

use super::field::{FieldName, FormField};
use super::validation::{check_username, passwords_match, ValidationError};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Field values plus validation and result flags for one form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub username: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub username_error: Option<ValidationError>,
    pub password_match_error: bool,
    pub sign_in_success: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            username: FormField::new(FieldName::Username),
            password: FormField::new(FieldName::Password),
            confirm_password: FormField::new(FieldName::ConfirmPassword),
            username_error: None,
            password_match_error: false,
            sign_in_success: false,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Why submission is currently blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    EmptyField(FieldName),
    InvalidUsername,
    PasswordMismatch,
}

/// Derived state of the form, recomputed on every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    SubmitBlocked(BlockReason),
    Submitted,
}

/// Data handed over by an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SignInRequest),
    Rejected(ValidationError),
}

/// Controller owning the form state and the focus cursor.
///
/// Focus indices 0..=2 are the fields in [`FieldName::ALL`] order, index 3 is
/// the submit button row.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    state: FormState,
    pub active_field_index: usize,
}

impl SignInForm {
    /// Focus index of the submit button
    pub const BUTTON_INDEX: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Store a new value for `field` and revalidate it.
    pub fn handle_change(&mut self, field: FieldName, new_value: String) {
        self.state.sign_in_success = false;

        match field.counterpart() {
            Some(other) => {
                let counterpart = self.state.field(other).as_text();
                self.state.password_match_error = !passwords_match(&new_value, counterpart);
            }
            None => {
                self.state.username_error = check_username(&new_value).error();
            }
        }

        self.state.field_mut(field).set_text(new_value);
    }

    /// Revalidate `field` from its current value when it loses focus.
    ///
    /// Emptiness is checked first; format and match checks only run on a
    /// non-empty value. A blur that raises an error ends the submitted phase.
    pub fn handle_blur(&mut self, field: FieldName) {
        let value = self.state.field(field).as_text();

        match field {
            FieldName::Username => {
                self.state.username_error = check_username(value).error();
            }
            FieldName::Password | FieldName::ConfirmPassword => {
                if value.trim().is_empty() {
                    return;
                }
                self.state.password_match_error = !passwords_match(
                    self.state.password.as_text(),
                    self.state.confirm_password.as_text(),
                );
            }
        }

        if self.state.username_error.is_some() || self.state.password_match_error {
            self.state.sign_in_success = false;
        }
    }

    /// Attempt to submit the form.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        if !passwords_match(
            self.state.password.as_text(),
            self.state.confirm_password.as_text(),
        ) {
            self.state.password_match_error = true;
            return SubmitOutcome::Rejected(ValidationError::PasswordMismatch);
        }

        let request = SignInRequest {
            username: self.state.username.as_text().to_string(),
        };
        tracing::debug!(username = %request.username, "sign in submitted");

        self.state = FormState {
            sign_in_success: true,
            ..FormState::new()
        };

        SubmitOutcome::Accepted(request)
    }

    pub fn is_sign_in_disabled(&self) -> bool {
        self.block_reason().is_some()
    }

    fn block_reason(&self) -> Option<BlockReason> {
        if let Some(name) = FieldName::ALL
            .into_iter()
            .find(|name| self.state.field(*name).is_blank())
        {
            return Some(BlockReason::EmptyField(name));
        }
        if self.state.username_error.is_some() {
            return Some(BlockReason::InvalidUsername);
        }
        if self.state.password_match_error {
            return Some(BlockReason::PasswordMismatch);
        }
        None
    }

    pub fn phase(&self) -> FormPhase {
        if self.state.sign_in_success {
            return FormPhase::Submitted;
        }
        match self.block_reason() {
            Some(reason) => FormPhase::SubmitBlocked(reason),
            None => FormPhase::Editing,
        }
    }

    /// The field under the focus cursor, or `None` on the button row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_button_active(&self) -> bool {
        self.active_field_index == Self::BUTTON_INDEX
    }

    /// Move focus to `index`, blurring the field that loses it
    pub fn focus(&mut self, index: usize) {
        let index = index.min(Self::BUTTON_INDEX);
        if index == self.active_field_index {
            return;
        }
        if let Some(previous) = self.active_field_name() {
            self.handle_blur(previous);
        }
        self.active_field_index = index;
    }
}

impl Form for SignInForm {
    fn field_count(&self) -> usize {
        4 // username, password, confirm password, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.focus(index);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::from_index(index).map(|name| self.state.field(name))
    }
}
