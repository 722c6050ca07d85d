//! Game entities
//!
//! [`Character`] is the shared data block for anything that can fight:
//! a grid position, health, and a four-slot attack array. [`Player`] and
//! [`Enemy`] embed it by value instead of inheriting from it.

pub mod enemy;
pub mod player;

pub use enemy::{Enemy, EnemyType};
pub use player::Player;

use crate::consts::ATTACK_SLOTS;

/// An ordered attack array: three normal rolls plus the critical in the
/// last slot. The critical carries no multiplier beyond its own value.
pub type AttackArray = [i32; ATTACK_SLOTS];

/// Index of the critical slot
pub const CRIT_SLOT: usize = ATTACK_SLOTS - 1;

/// Shared combatant data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub x: i32,
    pub y: i32,
    pub max_health: i32,
    pub health: i32,
    pub attack: AttackArray,
}

impl Character {
    pub fn new(x: i32, y: i32, health: i32, attack: AttackArray) -> Self {
        Self {
            x,
            y,
            max_health: health,
            health,
            attack,
        }
    }

    /// Heal, clamped to max health. Damage is never clamped: health may
    /// go negative to signal death.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

/// A shop is just a fixed spot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shop {
    pub x: i32,
    pub y: i32,
}

impl Shop {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_clamps_to_max() {
        let mut c = Character::new(0, 0, 100, [1, 2, 3, 4]);
        c.health = 80;
        c.heal(50);
        assert_eq!(c.health, 100);
    }

    #[test]
    fn test_damage_may_go_negative() {
        let mut c = Character::new(0, 0, 10, [1, 2, 3, 4]);
        c.health -= 25;
        assert_eq!(c.health, -15);
    }
}
