//! Services section

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let service = |title: &str| {
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        Line::from(""),
        service("Fiber Internet"),
        Line::from("  Symmetric fiber up to 10 Gbps, residential and"),
        Line::from("  dedicated enterprise circuits."),
        Line::from(""),
        service("Television"),
        Line::from("  Over 180 channels with cloud DVR, bundled with any"),
        Line::from("  internet plan."),
        Line::from(""),
        service("Telephony"),
        Line::from("  Fixed lines and SIP trunking with number porting."),
        Line::from(""),
        service("Technical Support"),
        Line::from("  On-site installation, network audits and managed"),
        Line::from("  Wi-Fi for offices."),
    ];

    let block = Block::default()
        .title(" Services ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}
