//! Contact form rendering

use crate::app::App;
use crate::state::{FormField, FormStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let banner_height = if app.state.success_banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Success banner
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Phone
            Constraint::Length(1),             // Phone error
            Constraint::Length(3),             // Service
            Constraint::Length(1),             // Service error
            Constraint::Min(5),                // Message
            Constraint::Length(1),             // Message error
            Constraint::Length(1),             // Response region
        ])
        .split(area);

    if app.state.success_banner.is_some() {
        draw_success_banner(frame, chunks[0]);
    }

    let form = &app.state.contact_form;
    let active = form.active_field_index;

    draw_field(frame, chunks[1], &form.name, active == 0, None);
    draw_error_line(frame, chunks[2], &form.name);
    draw_field(frame, chunks[3], &form.email, active == 1, None);
    draw_error_line(frame, chunks[4], &form.email);
    draw_field(frame, chunks[5], &form.phone, active == 2, None);
    draw_error_line(frame, chunks[6], &form.phone);

    // The service selector shows its label, not the wire value
    let service_display = if form.service_label().is_empty() {
        "(choose with Up/Down)".to_string()
    } else {
        form.service_label().to_string()
    };
    draw_field(
        frame,
        chunks[7],
        &form.service,
        active == 3,
        Some(service_display.as_str()),
    );
    draw_error_line(frame, chunks[8], &form.service);

    draw_field(frame, chunks[9], &form.message, active == 4, None);
    draw_error_line(frame, chunks[10], &form.message);

    draw_response_region(frame, chunks[11], app);
}

/// Draw a form field; an errored field gets a red border
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    display_override: Option<&str>,
) {
    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = display_override.unwrap_or(field.display_value());
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline annotation beneath a field, if any
fn draw_error_line(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(message) = field.error() {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw the form response region with the current status, if any
fn draw_response_region(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.state.form_status;
    if status == FormStatus::None {
        return;
    }

    let color = match status {
        FormStatus::None => unreachable!(),
        FormStatus::Sending => Color::Gray,
        FormStatus::Sent => Color::Green,
        FormStatus::Rejected => Color::Yellow,
        FormStatus::Failed => Color::Red,
    };

    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {}", status.message()),
        Style::default().fg(color),
    )));
    frame.render_widget(line, area);
}

fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let banner = Paragraph::new(Line::from(Span::styled(
        " Message sent! We'll be in touch with you soon.",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block);
    frame.render_widget(banner, area);
}
