//! Terminal color theme
//!
//! All UI code takes colors from here instead of hardcoding Color::
//! values at call sites.

use ratatui::style::Color;

/// Color theme for the terminal UI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Default border color
    pub border: Color,
    /// Danger border (death screen)
    pub border_danger: Color,

    /// Positive (healing, level-ups, escapes)
    pub good: Color,
    /// Negative (damage taken, defeat)
    pub bad: Color,
    /// Gold and fire
    pub warning: Color,
    /// Darkness entities and wither/weakness lines
    pub dark: Color,
    /// Player marker and agile enemies
    pub cyan: Color,
    /// Armor and level lines
    pub info: Color,

    pub map_floor: Color,
    pub map_shop: Color,
    pub map_enemy: Color,
    pub map_player: Color,
}

impl Theme {
    /// Default palette, matching the original's ANSI choices.
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            border_danger: Color::Red,
            good: Color::Green,
            bad: Color::Red,
            warning: Color::Yellow,
            dark: Color::DarkGray,
            cyan: Color::Cyan,
            info: Color::Blue,
            map_floor: Color::DarkGray,
            map_shop: Color::Green,
            map_enemy: Color::Red,
            map_player: Color::Cyan,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
