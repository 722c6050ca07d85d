//! X-Man: a turn-based terminal RPG
//!
//! Main entry point for the game.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use xman_core::{BOARD_HEIGHT, BOARD_WIDTH, GameRng, GameState};
use xman_tui::{App, Theme};

/// X-Man - fight the alien invasion!
#[derive(Parser, Debug)]
#[command(name = "xman")]
#[command(author, version, about = "X-Man - fight the alien invasion!", long_about = None)]
struct Args {
    /// RNG seed for a reproducible session
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Board width in cells
    #[arg(long = "width", default_value_t = BOARD_WIDTH)]
    width: i32,

    /// Board height in cells
    #[arg(long = "height", default_value_t = BOARD_HEIGHT)]
    height: i32,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let state = GameState::with_board(rng, args.width.max(8), args.height.max(8));
    let mut app = App::new(state, Theme::dark());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            if app.should_quit() {
                break;
            }
        }
    }

    let summary = app.summary();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(summary) = summary {
        println!("GAME OVER - you were defeated!");
        println!("Final Level: {}", summary.level);
        println!("Total Gold Collected: {}", summary.total_gold);
        println!("Enemies Defeated: {}", summary.enemies_killed);
    }

    Ok(())
}
