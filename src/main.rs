mod build_info;
mod constants;
mod environment;
mod fishing;
mod game_logic;
mod game_state;
mod gear;
mod ui;

use constants::*;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fishing::logic::{adjust_tension, cast, reel_in};
use game_logic::game_tick;
use game_state::GameState;
use gear::{purchase_gear, GearSlot};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::shop_scene::ShopScreen;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "pondside {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Pondside - Terminal Fishing Game\n");
                println!("Usage: pondside [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'pondside --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut state = GameState::new(&mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let mut tick_counter: u64 = 0;
    let mut shop: Option<ShopScreen> = None;

    // Main loop
    loop {
        terminal.draw(|frame| {
            ui::draw_ui(frame, &state, shop.as_ref());
        })?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Shop overlay swallows input while open
                if let Some(screen) = shop.as_mut() {
                    match key_event.code {
                        KeyCode::Char('1') => screen.select_slot(GearSlot::Rod),
                        KeyCode::Char('2') => screen.select_slot(GearSlot::Reel),
                        KeyCode::Char('3') => screen.select_slot(GearSlot::Bait),
                        KeyCode::Up => screen.move_up(),
                        KeyCode::Down => screen.move_down(),
                        KeyCode::Enter => {
                            if let Some(message) =
                                purchase_gear(&mut state, screen.slot, screen.selected_index)
                            {
                                state.add_log(message, true);
                            }
                        }
                        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
                            shop = None;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                } else {
                    match key_event.code {
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            for message in cast(&mut state, &mut rng) {
                                state.add_log(message, true);
                            }
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            for message in reel_in(&mut state, &mut rng) {
                                state.add_log(message, true);
                            }
                        }
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            for message in adjust_tension(&mut state, &mut rng) {
                                state.add_log(message, false);
                            }
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => {
                            shop = Some(ShopScreen::new());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        // Game tick every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            tick_counter += 1;
            for message in game_tick(&mut state, &mut rng, tick_counter) {
                state.add_log(message, false);
            }
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
