//! Pond view: the swimming population and, while a fish is hooked, the
//! line tension gauge.

use crate::constants::{ESCAPE_TENSION, POND_SIZE, SUCCESS_TENSION};
use crate::fishing::types::{AnglerPhase, Species};
use crate::game_state::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw_pond_scene(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let title = match game_state.session.phase() {
        AnglerPhase::Idle => " Pond ",
        AnglerPhase::Cast => " Pond (line out) ",
        AnglerPhase::Engaged => " Pond (fish on!) ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Water
            Constraint::Length(1), // Tension gauge
        ])
        .split(inner);

    draw_water(frame, chunks[0], game_state);
    draw_tension_gauge(frame, chunks[1], game_state);
}

/// Renders the water as rows of ripples with one glyph per fish, mapped
/// from pond coordinates onto the character grid.
fn draw_water(frame: &mut Frame, area: Rect, game_state: &GameState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let mut grid = vec![vec![None::<Species>; width]; height];

    for fish in &game_state.population {
        let col = ((fish.position.0 / POND_SIZE) * (width - 1) as f32).round() as usize;
        let row = ((fish.position.1 / POND_SIZE) * (height - 1) as f32).round() as usize;
        grid[row.min(height - 1)][col.min(width - 1)] = Some(fish.species);
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    Some(species) => Span::styled(
                        species_glyph(*species),
                        Style::default().fg(species_color(*species)),
                    ),
                    None => Span::styled("~", Style::default().fg(Color::Rgb(30, 60, 120))),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_tension_gauge(frame: &mut Frame, area: Rect, game_state: &GameState) {
    if game_state.session.phase() != AnglerPhase::Engaged {
        let hint = match game_state.session.phase() {
            AnglerPhase::Cast => "Waiting for a bite...",
            _ => "Press 'c' to cast",
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let tension = game_state.session.tension_level;
    // The stored value can leave the display band; clamp for the gauge only
    let ratio = (tension.clamp(0, 100) as f64) / 100.0;
    let color = if tension > ESCAPE_TENSION - 15 {
        Color::Red
    } else if tension < SUCCESS_TENSION + 10 {
        Color::Green
    } else {
        Color::Yellow
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("Tension {}", tension));
    frame.render_widget(gauge, area);
}

fn species_glyph(species: Species) -> &'static str {
    match species {
        Species::Bass => "B",
        Species::Trout => "T",
        Species::Catfish => "C",
    }
}

fn species_color(species: Species) -> Color {
    match species {
        Species::Bass => Color::Green,
        Species::Trout => Color::Magenta,
        Species::Catfish => Color::Yellow,
    }
}
