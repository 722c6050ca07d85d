//! World movement, enemy drift, respawn timers and type mutation
//!
//! The world advances one tick per directional key press. Living
//! enemies drift on the axis the player moved along, dead enemies
//! accrue respawn time, and on every 50th move freshly respawned
//! enemies may re-roll their type against the player's level.

use crate::consts::{RETYPE_INTERVAL, SPAWN_MARGIN};
use crate::entity::{Enemy, EnemyType, Player};
use crate::rng::GameRng;

/// A directional key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

/// The axis a direction moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::West | Direction::East => Axis::Horizontal,
            Direction::North | Direction::South => Axis::Vertical,
        }
    }

    /// Signed step along the axis (screen coordinates: north is -y)
    pub fn delta(self) -> i32 {
        match self {
            Direction::North | Direction::West => -1,
            Direction::South | Direction::East => 1,
        }
    }
}

fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    v.max(lo).min(hi)
}

/// Bounded random walk for one coordinate: inside the margins the enemy
/// drifts -1/0/+1 uniformly; at or past a margin it is pushed back in.
/// The result is clamped to the board.
fn drift_coord(pos: i32, dim: i32, rng: &mut GameRng) -> i32 {
    let next = if pos > 1 && pos < dim - 2 {
        pos + rng.range(-1, 1)
    } else if pos <= 1 {
        pos + 1
    } else {
        pos - 1
    };
    clamp(next, 0, dim - 1)
}

/// Drift every living enemy along the axis of the player's movement.
pub fn drift_enemies(
    enemies: &mut [Enemy],
    axis: Axis,
    width: i32,
    height: i32,
    rng: &mut GameRng,
) {
    for enemy in enemies.iter_mut().filter(|e| !e.is_dead) {
        match axis {
            Axis::Horizontal => enemy.base.x = drift_coord(enemy.base.x, width, rng),
            Axis::Vertical => enemy.base.y = drift_coord(enemy.base.y, height, rng),
        }
    }
}

/// Move the player one cell, clamped to the board.
pub fn move_player(player: &mut Player, dir: Direction, width: i32, height: i32) {
    match dir.axis() {
        Axis::Horizontal => player.base.x = clamp(player.base.x + dir.delta(), 0, width - 1),
        Axis::Vertical => player.base.y = clamp(player.base.y + dir.delta(), 0, height - 1),
    }
}

/// A random spawn position within the spawn margins
pub fn random_spawn(width: i32, height: i32, rng: &mut GameRng) -> (i32, i32) {
    (
        rng.range(SPAWN_MARGIN, width - 1),
        rng.range(SPAWN_MARGIN, height - 1),
    )
}

/// Advance respawn timers on dead enemies; an enemy whose timer reaches
/// the type threshold comes back at a random position with full health
/// and cleared corpse state.
pub fn respawn_enemies(enemies: &mut [Enemy], width: i32, height: i32, rng: &mut GameRng) {
    for enemy in enemies.iter_mut().filter(|e| e.is_dead) {
        enemy.respawn_timer += 1;
        if enemy.respawn_timer >= enemy.enemy_type.respawn_ticks() {
            enemy.respawn_timer = 0;
            let (x, y) = random_spawn(width, height, rng);
            enemy.base.x = x;
            enemy.base.y = y;
            enemy.reset_health();
        }
    }
}

/// Every 50th move, living enemies with a freshly reset respawn timer
/// may re-roll their type from the level-gated distribution. A darkness
/// enemy is never downgraded unless the re-roll itself says darkness.
pub fn retype_respawned(enemies: &mut [Enemy], moves: u64, player_level: i32, rng: &mut GameRng) {
    if moves % RETYPE_INTERVAL != 0 {
        return;
    }
    for enemy in enemies
        .iter_mut()
        .filter(|e| !e.is_dead && e.respawn_timer == 0)
    {
        let new_type = EnemyType::roll_for_level(player_level, rng);
        if enemy.enemy_type != EnemyType::Darkness || new_type == EnemyType::Darkness {
            enemy.enemy_type = new_type;
        }
    }
}
