//! Board display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use xman_core::GameState;
use xman_core::board::BoardCell;
use xman_core::entity::EnemyType;

use crate::theme::Theme;

/// Widget for rendering the world grid
pub struct BoardWidget<'a> {
    state: &'a GameState,
    theme: Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(state: &'a GameState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn cell_style(&self, cell: BoardCell) -> Style {
        let t = &self.theme;
        let color = match cell {
            BoardCell::Floor => t.map_floor,
            BoardCell::Shop => t.map_shop,
            BoardCell::Enemy(EnemyType::Agile) => t.cyan,
            BoardCell::Enemy(EnemyType::Fire) => t.warning,
            BoardCell::Enemy(EnemyType::Darkness) => t.dark,
            BoardCell::Enemy(EnemyType::Normal) => t.map_enemy,
            BoardCell::Player => t.map_player,
        };
        let style = Style::default().fg(color);
        if cell == BoardCell::Player {
            style.bold()
        } else {
            style
        }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title("X-Man");
        let inner = block.inner(area);
        block.render(area, buf);

        let grid = self.state.draw_board();
        for (y, row) in grid.iter().enumerate() {
            if y as u16 >= inner.height {
                break;
            }
            for (x, &cell) in row.iter().enumerate() {
                if x as u16 >= inner.width {
                    break;
                }
                if let Some(buf_cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    buf_cell.set_char(cell.symbol());
                    buf_cell.set_style(self.cell_style(cell));
                }
            }
        }
    }
}
