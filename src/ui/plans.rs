//! Pricing plans with tab switching
//!
//! Exactly one tab button and one plan panel are active at a time; the
//! others are rendered deactivated.

use crate::app::App;
use crate::state::{plans_for_tier, PlanTier};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Tab buttons
            Constraint::Min(0),                // Plan panel
        ])
        .split(area);

    draw_tab_buttons(frame, chunks[0], app);
    draw_plan_panel(frame, chunks[1], app);
}

fn draw_tab_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let tiers = PlanTier::all();
    let constraints: Vec<Constraint> = tiers
        .iter()
        .map(|_| Constraint::Ratio(1, tiers.len() as u32))
        .collect();
    let tab_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, tier) in tiers.iter().enumerate() {
        render_button(
            frame,
            tab_chunks[i],
            tier.label(),
            *tier == app.state.active_tier,
        );
    }
}

fn draw_plan_panel(frame: &mut Frame, area: Rect, app: &App) {
    let plans = plans_for_tier(app.state.active_tier);

    let block = Block::default()
        .title(format!(" {} Plans ", app.state.active_tier.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> =
        plans.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, plan) in plans.iter().enumerate() {
        draw_plan_card(frame, card_chunks[i], plan, i == app.state.selected_plan);
    }
}

fn draw_plan_card(
    frame: &mut Frame,
    area: Rect,
    plan: &crate::state::Plan,
    is_selected: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(plan.name, name_style),
        Span::raw("  "),
        Span::styled(plan.speed, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(plan.price, Style::default().fg(Color::Green)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
