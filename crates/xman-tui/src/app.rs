//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use xman_core::entity::{Enemy, EnemyType};
use xman_core::shop::{ARMOR_PRICE, BIG_POTION_PRICE, POTION_PRICE, WEAPONS};
use xman_core::{GameLoopResult, GameState, Mode, SessionSummary};

use crate::art;
use crate::input::key_to_direction;
use crate::theme::Theme;
use crate::widgets::{BoardWidget, MessagesWidget, StatusWidget};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, Copy)]
enum UiMode {
    /// Title screen; any movement key starts the game
    Title,
    /// Normal play; the core's [`Mode`] picks the screen
    Playing,
    /// Final statistics after defeat
    DeathScreen(SessionSummary),
}

/// Application state
pub struct App {
    state: GameState,
    ui_mode: UiMode,
    /// Text being typed at an encounter/corpse/shop prompt
    input: String,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(state: GameState, theme: Theme) -> Self {
        Self {
            state,
            ui_mode: UiMode::Title,
            input: String::new(),
            should_quit: false,
            theme,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The defeat summary, once the session has ended
    pub fn summary(&self) -> Option<SessionSummary> {
        match self.ui_mode {
            UiMode::DeathScreen(summary) => Some(summary),
            _ => None,
        }
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Terminals deliver both Press and Release in some modes;
            // a press is exactly one tick.
            if key.kind != KeyEventKind::Press {
                return;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
                return;
            }
            match self.ui_mode {
                UiMode::Title => {
                    self.ui_mode = UiMode::Playing;
                    if let Some(dir) = key_to_direction(key) {
                        self.state.tick_move(dir);
                    }
                }
                UiMode::Playing => self.handle_play_key(key),
                UiMode::DeathScreen(_) => {
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            Mode::Roam => {
                if let Some(dir) = key_to_direction(key) {
                    self.state.tick_move(dir);
                }
            }
            Mode::Encounter(_) | Mode::Corpse(_) | Mode::Shop(_) => match key.code {
                KeyCode::Enter => {
                    let line = std::mem::take(&mut self.input);
                    if let GameLoopResult::Defeat(summary) = self.state.submit_line(&line) {
                        self.ui_mode = UiMode::DeathScreen(summary);
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                }
                _ => {}
            },
            Mode::GameOver(summary) => {
                self.ui_mode = UiMode::DeathScreen(summary);
            }
        }
    }

    /// Render the current screen.
    pub fn render(&self, frame: &mut Frame) {
        match self.ui_mode {
            UiMode::Title => self.render_title(frame),
            UiMode::DeathScreen(summary) => self.render_death(frame, summary),
            UiMode::Playing => match self.state.mode {
                Mode::Roam => self.render_roam(frame),
                Mode::Encounter(idx) | Mode::Corpse(idx) => self.render_encounter(frame, idx),
                Mode::Shop(_) => self.render_shop(frame),
                Mode::GameOver(summary) => self.render_death(frame, summary),
            },
        }
    }

    fn render_title(&self, frame: &mut Frame) {
        let mut lines: Vec<Line> = art::TITLE
            .iter()
            .map(|&l| Line::styled(l, Style::default().fg(self.theme.cyan)))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Press W/A/S/D Keys to Start...",
            Style::default().fg(self.theme.good),
        ));
        frame.render_widget(
            Paragraph::new(lines).centered(),
            centered_rect(frame.area(), 40, 8),
        );
    }

    fn render_roam(&self, frame: &mut Frame) {
        let board_height = self.state.height as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height),
                Constraint::Length(12),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(BoardWidget::new(&self.state, self.theme), chunks[0]);
        frame.render_widget(StatusWidget::new(&self.state.player, self.theme), chunks[1]);
        frame.render_widget(
            MessagesWidget::new(&self.state.message_history, self.theme),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new("Press W/A/S/D Keys to Move...")
                .style(Style::default().fg(self.theme.text_dim)),
            chunks[3],
        );
    }

    fn render_encounter(&self, frame: &mut Frame, idx: usize) {
        let enemy = &self.state.enemies[idx];
        let art = art::alien_art(enemy.enemy_type);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(art.len() as u16 + 2),
                Constraint::Length(8),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let art_color = match enemy.enemy_type {
            EnemyType::Agile => self.theme.cyan,
            EnemyType::Fire => self.theme.warning,
            EnemyType::Darkness => self.theme.dark,
            EnemyType::Normal => self.theme.text,
        };
        let art_lines: Vec<Line> = art
            .iter()
            .map(|&l| Line::styled(l, Style::default().fg(art_color)))
            .collect();
        frame.render_widget(Paragraph::new(art_lines), chunks[0]);

        frame.render_widget(
            Paragraph::new(self.encounter_banner(enemy))
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        frame.render_widget(
            MessagesWidget::new(&self.state.messages, self.theme),
            chunks[2],
        );
        self.render_prompt(frame, chunks[3]);
    }

    fn encounter_banner(&self, enemy: &Enemy) -> Vec<Line<'_>> {
        let t = &self.theme;
        let p = &self.state.player;
        let mut lines = Vec::new();

        if enemy.is_dead {
            lines.push(Line::styled(
                "The enemy lies dead at your feet.",
                Style::default().fg(t.text_dim),
            ));
        } else {
            let label = match enemy.enemy_type {
                EnemyType::Normal => "ENEMY",
                EnemyType::Agile => "AGILE ENEMY (Can dodge attacks!)",
                EnemyType::Fire => "FIRE ENEMY (Can burn you!)",
                EnemyType::Darkness => "DARKNESS ENTITY (Withers and weakens!)",
            };
            lines.push(Line::styled(label, Style::default().fg(t.bad).bold()));
        }

        lines.push(Line::styled(
            format!("Player Health: {}/{}", p.base.health, p.base.max_health),
            Style::default().fg(t.good),
        ));
        if p.status.is_burning() {
            lines.push(Line::styled(
                format!(
                    "Burning: {} dmg/turn ({} turns)",
                    p.status.burn_damage, p.status.burn_turns
                ),
                Style::default().fg(t.warning),
            ));
        }
        if p.status.is_withering() {
            lines.push(Line::styled(
                format!(
                    "Withering: {} dmg/turn ({} turns)",
                    p.status.wither_damage, p.status.wither_turns
                ),
                Style::default().fg(t.dark),
            ));
        }
        if p.status.is_weakened() {
            lines.push(Line::styled(
                format!("Weakness: -50% damage ({} turns)", p.status.weakness_turns),
                Style::default().fg(t.dark),
            ));
        }
        if !enemy.is_dead {
            lines.push(Line::raw(format!(
                "Enemy  Health: {}",
                enemy.base.health.max(0)
            )));
            if let Some(countdown) = enemy.wither_countdown() {
                lines.push(Line::styled(
                    format!("Next wither attack in: {} turns", countdown),
                    Style::default().fg(t.dark),
                ));
            }
        }
        lines
    }

    fn render_shop(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(art::SHOP.len() as u16 + 1),
                Constraint::Length(WEAPONS.len() as u16 + 9),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let art_lines: Vec<Line> = art::SHOP
            .iter()
            .map(|&l| Line::styled(l, Style::default().fg(self.theme.warning)))
            .collect();
        frame.render_widget(Paragraph::new(art_lines), chunks[0]);

        frame.render_widget(
            Paragraph::new(self.storefront()).block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        frame.render_widget(
            MessagesWidget::new(&self.state.messages, self.theme),
            chunks[2],
        );
        self.render_prompt(frame, chunks[3]);
    }

    fn storefront(&self) -> Vec<Line<'_>> {
        let t = &self.theme;
        let p = &self.state.player;
        let mut lines = vec![
            Line::styled(format!("Gold: {}", p.gold), Style::default().fg(t.warning)),
            Line::raw("WEAPONS:"),
        ];
        for weapon in &WEAPONS {
            let mut label = format!("  {} | Price: {}", weapon.name, weapon.price);
            if p.owns_weapon(weapon.name) {
                label.push_str(" [OWNED]");
            }
            if p.weapon == weapon.name {
                label.push_str(" [EQUIPPED]");
            }
            lines.push(Line::raw(label));
        }
        let mut fists = "  Fists | Always owned".to_string();
        if p.weapon == "Fists" {
            fists.push_str(" [EQUIPPED]");
        }
        lines.push(Line::raw(fists));
        lines.push(Line::raw("ITEMS:"));
        lines.push(Line::raw(format!(
            "  Potion | Price: {} (heals 30-50 HP)",
            POTION_PRICE
        )));
        lines.push(Line::raw(format!(
            "  BigPotion | Price: {} (heals 50-100 HP)",
            BIG_POTION_PRICE
        )));
        lines.push(Line::raw(format!(
            "  Armor | Price: {} (+5 armor, max 10)",
            ARMOR_PRICE
        )));
        lines
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let prompt = Paragraph::new(format!(">: {}", self.input))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Type 'help' for a list of actions"),
            )
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(prompt, area);
    }

    fn render_death(&self, frame: &mut Frame, summary: SessionSummary) {
        let t = &self.theme;
        let lines = vec![
            Line::styled("GAME OVER", Style::default().fg(t.bad).bold()),
            Line::styled("You have been defeated!", Style::default().fg(t.bad)),
            Line::raw(""),
            Line::raw(format!("Final Level: {}", summary.level)),
            Line::raw(format!("Total Gold Collected: {}", summary.total_gold)),
            Line::raw(format!("Enemies Defeated: {}", summary.enemies_killed)),
            Line::raw(""),
            Line::raw("Thanks for playing X-Man!"),
            Line::styled(
                "Press any key to exit...",
                Style::default().fg(t.text_dim),
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines).centered().block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(t.border_danger)),
            ),
            centered_rect(frame.area(), 44, 12),
        );
    }
}

/// A centered rect of the given size, clamped to the frame
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
