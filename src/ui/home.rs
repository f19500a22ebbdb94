//! Home section

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Fast, reliable connectivity for homes and businesses",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Fiber internet, television and telephony with local"),
        Line::from("support that actually picks up the phone."),
        Line::from(""),
        Line::from("Browse our services and plans, or head to the contact"),
        Line::from("section to tell us what you need. We answer within one"),
        Line::from("business day."),
        Line::from(""),
        Line::from(Span::styled(
            "Why Harborline?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("  * 99.9% uptime across our fiber footprint"),
        Line::from("  * No data caps, no speed throttling"),
        Line::from("  * Installation within 72 hours"),
        Line::from("  * Local technicians, local call center"),
    ];

    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}
