//! Form rendering module
//!
//! - `field_renderer`: Field and inline error rendering
//! - `sign_in_form`: The sign-in form

mod field_renderer;
mod sign_in_form;

pub use sign_in_form::draw_sign_in;
