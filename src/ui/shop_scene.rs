//! Shop overlay: browse one gear slot at a time and buy upgrades.

use crate::game_state::GameState;
use crate::gear::{catalog, GearSlot};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Cursor state for the shop overlay.
pub struct ShopScreen {
    pub slot: GearSlot,
    pub selected_index: usize,
}

impl ShopScreen {
    pub fn new() -> Self {
        Self {
            slot: GearSlot::Rod,
            selected_index: 0,
        }
    }

    /// Switches to another slot tab, resetting the cursor.
    pub fn select_slot(&mut self, slot: GearSlot) {
        if self.slot != slot {
            self.slot = slot;
            self.selected_index = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < catalog(self.slot).len() {
            self.selected_index += 1;
        }
    }
}

impl Default for ShopScreen {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw_shop(frame: &mut Frame, area: Rect, game_state: &GameState, shop: &ShopScreen) {
    let popup = centered_rect(56, 12, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Shop ({} credits) ", game_state.session.credits))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = Vec::new();

    // Slot tabs
    let tabs: Vec<Span> = GearSlot::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, slot)| {
            let style = if *slot == shop.slot {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled(format!("[{}] {}", i + 1, slot.name()), style),
                Span::raw("   "),
            ]
        })
        .collect();
    lines.push(Line::from(tabs));
    lines.push(Line::from(""));

    let equipped_index = game_state.loadout.equipped_index(shop.slot);
    for (index, item) in catalog(shop.slot).iter().enumerate() {
        let cursor = if index == shop.selected_index { "> " } else { "  " };
        let equipped = if index == equipped_index {
            " (equipped)"
        } else {
            ""
        };

        let style = if index == shop.selected_index {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else if item.cost > game_state.session.credits {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::styled(
            format!(
                "{}{} | {} | {} credits{}",
                cursor,
                item.name,
                item.stat_label(),
                item.cost,
                equipped
            ),
            style,
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left),
        inner,
    );
}

/// A rect of the requested size centered in `area`, shrunk to fit on
/// small terminals.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_state() -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        GameState::new(&mut rng)
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let rect = centered_rect(56, 12, area);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
        assert_eq!(rect.width, 56);
        assert_eq!(rect.height, 12);
    }

    #[test]
    fn test_centered_rect_shrinks_on_tiny_terminals() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect(56, 12, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);

        // Degenerate 0x0 area must not underflow
        let rect = centered_rect(56, 12, Rect::new(0, 0, 0, 0));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }

    #[test]
    fn test_shop_draws_on_very_wide_terminals() {
        // Rendering on an oversized terminal must not overflow the
        // centering arithmetic
        let state = create_test_state();
        let shop = ShopScreen::new();
        let backend = TestBackend::new(1200, 50);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let size = frame.size();
                draw_shop(frame, size, &state, &shop);
            })
            .unwrap();
    }

    #[test]
    fn test_cursor_is_bounded_by_the_catalog() {
        let mut shop = ShopScreen::new();
        shop.move_up();
        assert_eq!(shop.selected_index, 0);

        for _ in 0..20 {
            shop.move_down();
        }
        assert_eq!(shop.selected_index, catalog(shop.slot).len() - 1);
    }
}
