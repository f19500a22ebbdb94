//! UI module for rendering the TUI

mod components;
mod contact;
mod home;
mod layout;
mod plans;
mod services;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (nav_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_navbar(frame, nav_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, content_area, app),
        View::Services => services::draw(frame, content_area, app),
        View::Plans => plans::draw(frame, content_area, app),
        View::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlay goes last so it sits on top of the section content
    if app.state.nav_menu_open {
        layout::draw_nav_menu(frame, content_area, app);
    }
}
