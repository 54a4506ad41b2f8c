//! Left-hand panel: session stats, equipped gear, and conditions.

use crate::game_state::GameState;
use crate::gear::GearSlot;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default()
        .title(" Angler ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let session = &game_state.session;
    let env = &game_state.environment;

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Level: "),
            Span::styled(
                session.level.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Fish caught: {}", session.fish_caught)),
        Line::from(vec![
            Span::raw("Credits: "),
            Span::styled(
                session.credits.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Weather: "),
            Span::styled(env.weather.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Time: "),
            Span::styled(env.time_of_day.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    for slot in GearSlot::ALL {
        let item = game_state.loadout.equipped(slot);
        lines.push(Line::from(format!(
            "{}: {} ({})",
            slot.name(),
            item.name,
            item.stat_label()
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
