//! Input handling - convert key events to world directions
//!
//! Movement uses W/A/S/D (the original bindings) plus the arrow keys.
//! Each press yields exactly one world tick.

use crossterm::event::{KeyCode, KeyEvent};
use xman_core::world::Direction;

/// Convert a key event to a movement direction, if it is one.
pub fn key_to_direction(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::North),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::South),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::West),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::East),
        _ => None,
    }
}
