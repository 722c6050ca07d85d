//! xman-tui: terminal front end for the X-Man RPG
//!
//! Renders the core's board, encounter and shop screens with ratatui
//! and translates crossterm key events into core ticks and command
//! lines. All game rules live in xman-core.

pub mod app;
pub mod art;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
