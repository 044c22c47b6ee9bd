//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;
mod status_bar;

use crate::app::App;
use layout::FormLayout;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = FormLayout::compute(frame.area(), app.config.show_help());

    forms::draw_sign_in(frame, &layout, app);

    if let Some(help) = layout.help {
        status_bar::draw_status_bar(frame, help, app);
    }
}
