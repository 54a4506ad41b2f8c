pub mod pond_scene;
pub mod shop_scene;
mod stats_panel;

use crate::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shop_scene::ShopScreen;

/// Main UI drawing function. The shop overlay, when open, is drawn on
/// top of the regular layout.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState, shop: Option<&ShopScreen>) {
    let size = frame.size();

    // Split vertically: main content, full-width log, footer
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content (stats + pond)
            Constraint::Length(8), // Message log
            Constraint::Length(3), // Footer
        ])
        .split(size);

    // Split main content: stats panel on the left, pond on the right
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, chunks[0], game_state);
    pond_scene::draw_pond_scene(frame, chunks[1], game_state);
    draw_log(frame, v_chunks[1], game_state);
    draw_footer(frame, v_chunks[2], shop.is_some());

    if let Some(shop) = shop {
        shop_scene::draw_shop(frame, size, game_state, shop);
    }
}

/// Draws the rolling message log, newest at the bottom.
fn draw_log(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default().title(" Log ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let start = game_state.log.len().saturating_sub(visible);

    let lines: Vec<Line> = game_state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(entry.text.clone(), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draws the key-hint footer.
fn draw_footer(frame: &mut Frame, area: Rect, shop_open: bool) {
    let hints = if shop_open {
        "[1/2/3] Tab  [↑/↓] Select  [Enter] Buy  [Esc] Close"
    } else {
        "[c] Cast  [r] Reel  [t] Adjust Tension  [s] Shop  [q] Quit"
    };

    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
