//! Form field value objects

use std::fmt;

/// Identifies one of the sign-in form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in display (and tab) order
    pub const ALL: [FieldName; 3] = [
        FieldName::Username,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Human-readable label shown in the field border
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Username => "Username",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the field's value is masked when rendered
    pub fn is_masked(self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }

    /// The password field on the other side of the match check, if any
    pub fn counterpart(self) -> Option<FieldName> {
        match self {
            FieldName::Username => None,
            FieldName::Password => Some(FieldName::ConfirmPassword),
            FieldName::ConfirmPassword => Some(FieldName::Password),
        }
    }

    pub fn from_index(index: usize) -> Option<FieldName> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single text input with its identity and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_masked(&self) -> bool {
        self.name.is_masked()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// True if the value is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Get the display value for rendering, masking secrets
    pub fn display_value(&self, mask: char) -> String {
        if self.is_masked() {
            std::iter::repeat(mask)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
