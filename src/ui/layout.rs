//! Main layout: nav bar, content area, status bar, nav menu overlay

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Split the frame into nav bar, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw the nav bar with one link per section, highlighting the active one.
/// Once the content is scrolled past the threshold the bar condenses.
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.state.navbar_scrolled();

    let mut spans: Vec<Span> = vec![Span::styled(
        " Harborline Telecom ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for view in View::all() {
        let is_active = view == app.state.current_view;
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}] {}", view.shortcut(), view.label()),
            style,
        ));
    }

    let border_style = if scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar with key hints for the current view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.state.nav_menu_open {
        "Up/Down: choose section  Enter: go  any other key: close"
    } else {
        match app.state.current_view {
            View::Contact => "Tab: next field  Ctrl+S: send  Esc: menu",
            View::Plans => "Left/Right: plan type  Up/Down: plan  Enter: ask about plan  m: menu  q: quit",
            View::Home | View::Services => "1-4: sections  Up/Down: scroll  m: menu  q: quit",
        }
    };

    let status = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(status, area);
}

/// Draw the nav menu overlay (compact-screen menu)
pub fn draw_nav_menu(frame: &mut Frame, area: Rect, app: &App) {
    let width = 24u16.min(area.width);
    let height = (View::all().len() as u16 + 2).min(area.height.saturating_sub(2));
    if width == 0 || height == 0 {
        return;
    }
    let menu_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 2,
        width,
        height,
    };

    frame.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = View::all()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if i == app.state.nav_menu_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {} ", view.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, menu_area);
}
