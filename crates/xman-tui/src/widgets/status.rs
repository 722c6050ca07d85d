//! Player stats panel shown under the board

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use xman_core::entity::Player;

use crate::theme::Theme;

/// Widget for the player stats panel
pub struct StatusWidget<'a> {
    player: &'a Player,
    theme: Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(player: &'a Player, theme: Theme) -> Self {
        Self { player, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.player;
        let t = &self.theme;
        let mut lines = vec![Line::styled(
            format!("Health: {}/{}", p.base.health, p.base.max_health),
            Style::default().fg(t.good),
        )];

        if p.status.is_burning() {
            lines.push(Line::styled(
                format!(
                    "BURNING: {} dmg/turn for {} turns",
                    p.status.burn_damage, p.status.burn_turns
                ),
                Style::default().fg(t.warning),
            ));
        }
        if p.status.is_withering() {
            lines.push(Line::styled(
                format!(
                    "WITHERING: {} dmg/turn for {} turns",
                    p.status.wither_damage, p.status.wither_turns
                ),
                Style::default().fg(t.dark),
            ));
        }
        if p.status.is_weakened() {
            lines.push(Line::styled(
                format!("WEAKNESS: -50% damage for {} turns", p.status.weakness_turns),
                Style::default().fg(t.dark),
            ));
        }

        lines.push(Line::raw(format!("Weapon: {}", p.weapon)));
        if p.armor > 0 {
            lines.push(Line::styled(
                format!("Armor: {} (reduces damage)", p.armor),
                Style::default().fg(t.info),
            ));
        }
        lines.push(Line::raw(format!("Level: {}", p.level)));
        lines.push(Line::raw(format!("XP: {}/{}", p.xp, p.xp_needed())));
        lines.push(Line::styled(
            format!("Gold: {}", p.gold),
            Style::default().fg(t.warning),
        ));
        lines.push(Line::raw(format!(
            "Potions: {} | Big Potions: {}",
            p.health_potions, p.big_potions
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Stats"))
            .render(area, buf);
    }
}
