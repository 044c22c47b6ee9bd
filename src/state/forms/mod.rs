//! Form domain layer
//!
//! Type-safe state for the sign-in form: field values, validation rules and
//! the change/blur/submit handlers.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{
    BlockReason, Form, FormPhase, FormState, SignInForm, SignInRequest, SubmitOutcome,
};
pub use validation::ValidationError;
