//! Responsive layout for the sign-in screen
//!
//! Everything here is a pure function of the terminal area, so the renderer
//! and the mouse handler compute identical rectangles.

use super::components::BUTTON_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Terminal width below which the mobile layout is used
pub const MOBILE_MAX_WIDTH: u16 = 60;
/// Terminal width below which the tablet layout is used
pub const TABLET_MAX_WIDTH: u16 = 100;
/// Form width on wide terminals
pub const DESKTOP_FORM_WIDTH: u16 = 50;

/// Input field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Title line + blank line above the form block
const TITLE_HEIGHT: u16 = 2;

/// Rows inside the form block: three fields, two error lines, button, message
const FORM_CONTENT_HEIGHT: u16 = FIELD_HEIGHT * 3 + 2 + BUTTON_HEIGHT + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Style configuration for one breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStyle {
    pub breakpoint: Breakpoint,
    /// Horizontal padding inside the form border
    pub padding: u16,
}

impl FormStyle {
    pub fn for_width(width: u16) -> Self {
        let breakpoint = Breakpoint::from_width(width);
        let padding = match breakpoint {
            Breakpoint::Desktop => 2,
            Breakpoint::Tablet => 1,
            Breakpoint::Mobile => 0,
        };
        Self {
            breakpoint,
            padding,
        }
    }

    /// Width of the form block for a terminal `width` columns wide
    pub fn form_width(&self, width: u16) -> u16 {
        match self.breakpoint {
            Breakpoint::Desktop => DESKTOP_FORM_WIDTH.min(width),
            Breakpoint::Tablet => (u32::from(width) * 90 / 100) as u16,
            Breakpoint::Mobile => width,
        }
    }
}

/// Computed rectangles for every part of the sign-in screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub form: Rect,
    /// Username, password, confirm password
    pub fields: [Rect; 3],
    pub username_error: Rect,
    pub confirm_error: Rect,
    pub button: Rect,
    pub message: Rect,
    pub help: Option<Rect>,
}

impl FormLayout {
    pub fn compute(area: Rect, show_help: bool) -> Self {
        let style = FormStyle::for_width(area.width);

        // Reserve bottom line for the help bar
        let (body, help) = if show_help {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let form_width = style.form_width(body.width);
        let form_height = (FORM_CONTENT_HEIGHT + 2).min(body.height.saturating_sub(TITLE_HEIGHT));
        let total_height = (TITLE_HEIGHT + form_height).min(body.height);
        let top = body.y + (body.height - total_height) / 2;
        let left = body.x + (body.width - form_width) / 2;

        let title = Rect::new(left, top, form_width, 1.min(total_height));
        let form = Rect::new(
            left,
            top + (total_height - form_height),
            form_width,
            form_height,
        );

        let inner = Rect {
            x: form.x + 1,
            y: form.y + 1,
            width: form.width.saturating_sub(2),
            height: form.height.saturating_sub(2),
        };
        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),  // Username
                Constraint::Length(1),             // Username error
                Constraint::Length(FIELD_HEIGHT),  // Password
                Constraint::Length(FIELD_HEIGHT),  // Confirm password
                Constraint::Length(1),             // Confirm password error
                Constraint::Length(BUTTON_HEIGHT), // Sign In
                Constraint::Length(1),             // Success message
            ])
            .horizontal_margin(style.padding)
            .split(inner);

        Self {
            title,
            form,
            fields: [content[0], content[2], content[3]],
            username_error: content[1],
            confirm_error: content[4],
            button: content[5],
            message: content[6],
            help,
        }
    }

    /// Focus index under the given screen cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        if let Some(index) = self.fields.iter().position(|r| r.contains(position)) {
            return Some(index);
        }
        if self.button.contains(position) {
            return Some(self.fields.len());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod breakpoint {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_width() {
            assert_eq!(Breakpoint::from_width(40), Breakpoint::Mobile);
            assert_eq!(Breakpoint::from_width(59), Breakpoint::Mobile);
            assert_eq!(Breakpoint::from_width(60), Breakpoint::Tablet);
            assert_eq!(Breakpoint::from_width(99), Breakpoint::Tablet);
            assert_eq!(Breakpoint::from_width(100), Breakpoint::Desktop);
            assert_eq!(Breakpoint::from_width(200), Breakpoint::Desktop);
        }
    }

    mod form_style {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_desktop_is_fixed_width() {
            let style = FormStyle::for_width(120);
            assert_eq!(style.breakpoint, Breakpoint::Desktop);
            assert_eq!(style.padding, 2);
            assert_eq!(style.form_width(120), DESKTOP_FORM_WIDTH);
        }

        #[test]
        fn test_tablet_is_ninety_percent() {
            let style = FormStyle::for_width(80);
            assert_eq!(style.breakpoint, Breakpoint::Tablet);
            assert_eq!(style.form_width(80), 72);
        }

        #[test]
        fn test_mobile_is_full_width() {
            let style = FormStyle::for_width(40);
            assert_eq!(style.padding, 0);
            assert_eq!(style.form_width(40), 40);
        }

        #[test]
        fn test_same_width_same_style() {
            assert_eq!(FormStyle::for_width(80), FormStyle::for_width(80));
        }
    }

    mod form_layout {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_desktop_form_is_centered() {
            let layout = FormLayout::compute(Rect::new(0, 0, 120, 40), true);
            assert_eq!(layout.form.width, DESKTOP_FORM_WIDTH);
            assert_eq!(layout.form.x, (120 - DESKTOP_FORM_WIDTH) / 2);
        }

        #[test]
        fn test_help_bar_is_last_line() {
            let layout = FormLayout::compute(Rect::new(0, 0, 80, 30), true);
            assert_eq!(layout.help, Some(Rect::new(0, 29, 80, 1)));

            let layout = FormLayout::compute(Rect::new(0, 0, 80, 30), false);
            assert_eq!(layout.help, None);
        }

        #[test]
        fn test_rows_are_stacked_in_order() {
            let layout = FormLayout::compute(Rect::new(0, 0, 120, 40), true);
            let [username, password, confirm] = layout.fields;
            assert!(layout.title.y < layout.form.y);
            assert_eq!(layout.username_error.y, username.y + FIELD_HEIGHT);
            assert_eq!(password.y, layout.username_error.y + 1);
            assert_eq!(confirm.y, password.y + FIELD_HEIGHT);
            assert_eq!(layout.confirm_error.y, confirm.y + FIELD_HEIGHT);
            assert_eq!(layout.button.y, layout.confirm_error.y + 1);
            assert_eq!(layout.message.y, layout.button.y + BUTTON_HEIGHT);
        }

        #[test]
        fn test_hit_test_maps_fields_and_button() {
            let layout = FormLayout::compute(Rect::new(0, 0, 120, 40), true);
            for (index, field) in layout.fields.iter().enumerate() {
                assert_eq!(layout.hit_test(field.x + 1, field.y + 1), Some(index));
            }
            assert_eq!(
                layout.hit_test(layout.button.x + 1, layout.button.y + 1),
                Some(3)
            );
            assert_eq!(layout.hit_test(0, 0), None);
        }
    }
}
