//! Render boundary
//!
//! The core produces a grid of [`BoardCell`] values; the TUI decides
//! colors and writes the screen. Cell precedence, lowest first:
//! floor < shop < enemy (per type, darkness renders blank) < player.

use crate::consts::{S_AGILE, S_DARKNESS, S_ENEMY, S_FIRE, S_FLOOR, S_PLAYER, S_SHOP};
use crate::entity::{Enemy, EnemyType, Player, Shop};

/// One cell of the rendered board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCell {
    Floor,
    Shop,
    Enemy(EnemyType),
    Player,
}

impl BoardCell {
    /// ASCII symbol for the cell. Darkness enemies are invisible.
    pub fn symbol(self) -> char {
        match self {
            BoardCell::Floor => S_FLOOR,
            BoardCell::Shop => S_SHOP,
            BoardCell::Enemy(EnemyType::Agile) => S_AGILE,
            BoardCell::Enemy(EnemyType::Fire) => S_FIRE,
            BoardCell::Enemy(EnemyType::Darkness) => S_DARKNESS,
            BoardCell::Enemy(EnemyType::Normal) => S_ENEMY,
            BoardCell::Player => S_PLAYER,
        }
    }
}

/// Render the world into a `height x width` grid of cells. Dead enemies
/// are not drawn; the player is drawn last and occludes anything beneath.
pub fn draw_board(
    width: i32,
    height: i32,
    player: &Player,
    enemies: &[Enemy],
    shops: &[Shop],
) -> Vec<Vec<BoardCell>> {
    let in_bounds = |x: i32, y: i32| x >= 0 && x < width && y >= 0 && y < height;
    let mut grid = vec![vec![BoardCell::Floor; width as usize]; height as usize];

    for shop in shops {
        if in_bounds(shop.x, shop.y) {
            grid[shop.y as usize][shop.x as usize] = BoardCell::Shop;
        }
    }
    for enemy in enemies {
        if !enemy.is_dead && in_bounds(enemy.base.x, enemy.base.y) {
            grid[enemy.base.y as usize][enemy.base.x as usize] = BoardCell::Enemy(enemy.enemy_type);
        }
    }
    if in_bounds(player.base.x, player.base.y) {
        grid[player.base.y as usize][player.base.x as usize] = BoardCell::Player;
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::FISTS;

    fn world() -> (Player, Vec<Enemy>, Vec<Shop>) {
        (
            Player::new(4, 4, 100, FISTS.attack),
            vec![Enemy::new(8, 2, EnemyType::Normal)],
            vec![Shop::new(1, 1)],
        )
    }

    #[test]
    fn test_precedence_player_on_top() {
        let (mut player, mut enemies, shops) = world();
        player.base.x = 8;
        player.base.y = 2;
        enemies.push(Enemy::new(1, 1, EnemyType::Agile));
        let grid = draw_board(30, 16, &player, &enemies, &shops);
        // Player occludes the enemy, enemy occludes the shop.
        assert_eq!(grid[2][8], BoardCell::Player);
        assert_eq!(grid[1][1], BoardCell::Enemy(EnemyType::Agile));
    }

    #[test]
    fn test_dead_enemies_not_drawn() {
        let (player, mut enemies, shops) = world();
        enemies[0].is_dead = true;
        let grid = draw_board(30, 16, &player, &enemies, &shops);
        assert_eq!(grid[2][8], BoardCell::Floor);
    }

    #[test]
    fn test_darkness_renders_blank() {
        assert_eq!(BoardCell::Enemy(EnemyType::Darkness).symbol(), ' ');
        assert_eq!(BoardCell::Enemy(EnemyType::Normal).symbol(), 'E');
        assert_eq!(BoardCell::Player.symbol(), 'X');
        assert_eq!(BoardCell::Shop.symbol(), 'S');
        assert_eq!(BoardCell::Floor.symbol(), '-');
    }
}
