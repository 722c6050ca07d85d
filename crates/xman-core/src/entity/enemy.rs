//! Enemies and their type-specific behavior

use strum::{Display, EnumIter};

use super::{AttackArray, Character};
use crate::consts::{DARKNESS_RESPAWN_TICKS, RESPAWN_TICKS};
use crate::rng::GameRng;

/// Base stats for a freshly spawned normal enemy
pub const NORMAL_BASE_HEALTH: i32 = 50;
pub const NORMAL_BASE_ATTACK: AttackArray = [20, 18, 17, 25];

/// Darkness entities are tougher and scale more slowly
pub const DARKNESS_BASE_HEALTH: i32 = 120;
pub const DARKNESS_BASE_ATTACK: AttackArray = [30, 25, 35, 39];

/// Enemy variants. Fire and agile share the normal stat base; only the
/// type-specific combat behavior differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum EnemyType {
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "agile")]
    Agile,
    #[strum(serialize = "fire")]
    Fire,
    #[strum(serialize = "darkness")]
    Darkness,
}

impl EnemyType {
    /// Chance (percent) that a player attack whiffs against this type
    pub fn miss_percent(self) -> u32 {
        match self {
            EnemyType::Agile => 35,
            EnemyType::Darkness => 5,
            EnemyType::Normal | EnemyType::Fire => 0,
        }
    }

    /// Stat scaling per player level beyond the first
    pub fn level_multiplier(self, player_level: i32) -> f64 {
        let per_level = match self {
            EnemyType::Darkness => 0.15,
            _ => 0.2,
        };
        1.0 + (player_level - 1) as f64 * per_level
    }

    /// XP bonus on top of the base kill reward
    pub fn xp_bonus(self) -> i32 {
        match self {
            EnemyType::Normal => 0,
            EnemyType::Agile => 20,
            EnemyType::Fire => 30,
            EnemyType::Darkness => 50,
        }
    }

    /// Gold bonus on top of the base kill reward
    pub fn gold_bonus(self) -> i32 {
        match self {
            EnemyType::Normal => 0,
            EnemyType::Agile => 5,
            EnemyType::Fire => 10,
            EnemyType::Darkness => 15,
        }
    }

    /// Gold bonus when searching the corpse
    pub fn search_bonus(self) -> i32 {
        match self {
            EnemyType::Normal => 0,
            EnemyType::Agile => 2,
            EnemyType::Fire => 3,
            EnemyType::Darkness => 5,
        }
    }

    /// World ticks a dead enemy of this type stays down
    pub fn respawn_ticks(self) -> u32 {
        match self {
            EnemyType::Darkness => DARKNESS_RESPAWN_TICKS,
            _ => RESPAWN_TICKS,
        }
    }

    /// Roll an enemy type from the level-gated distribution.
    ///
    /// Level >= 5: 15% darkness, 25% agile, 15% fire, else normal.
    /// Level 4: 30% agile, 20% fire, else normal.
    /// Below 4: always normal.
    pub fn roll_for_level(player_level: i32, rng: &mut GameRng) -> EnemyType {
        if player_level >= 5 {
            let roll = rng.fraction();
            if roll < 0.15 {
                return EnemyType::Darkness;
            } else if roll < 0.40 {
                return EnemyType::Agile;
            } else if roll < 0.55 {
                return EnemyType::Fire;
            }
        } else if player_level >= 4 {
            let roll = rng.fraction();
            if roll < 0.3 {
                return EnemyType::Agile;
            } else if roll < 0.5 {
                return EnemyType::Fire;
            }
        }
        EnemyType::Normal
    }
}

/// Enemy state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub base: Character,
    pub enemy_type: EnemyType,
    pub is_dead: bool,
    /// Ticks accrued while dead; respawns at the type threshold
    pub respawn_timer: u32,
    /// Has the corpse been searched for bonus loot
    pub searched: bool,
    /// Has the kill reward been handed out
    pub loot_given: bool,
    /// Darkness special-attack cadence: wither lands on every 4th retaliation
    pub attack_counter: u32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, enemy_type: EnemyType) -> Self {
        Self {
            base: Character::new(x, y, NORMAL_BASE_HEALTH, NORMAL_BASE_ATTACK),
            enemy_type,
            is_dead: false,
            respawn_timer: 0,
            searched: false,
            loot_given: false,
            attack_counter: 0,
        }
    }

    /// Reset to full health for a new encounter (or a respawn).
    pub fn reset_health(&mut self) {
        self.base.health = self.base.max_health;
        self.is_dead = false;
        self.searched = false;
        self.loot_given = false;
        self.attack_counter = 0;
    }

    /// Turns until the next darkness wither attack lands, for the
    /// encounter banner. None unless this is a darkness entity that has
    /// already retaliated at least once with a pending special.
    pub fn wither_countdown(&self) -> Option<u32> {
        if self.enemy_type != EnemyType::Darkness || self.attack_counter == 0 {
            return None;
        }
        let remaining = 4 - (self.attack_counter % 4);
        if remaining == 4 { None } else { Some(remaining) }
    }

    /// Recompute max health and attacks from the per-type base, scaled
    /// linearly with the player's level. Results truncate toward zero.
    pub fn scale_to_level(&mut self, player_level: i32) {
        let mult = self.enemy_type.level_multiplier(player_level);
        let (base_health, base_attacks) = match self.enemy_type {
            EnemyType::Darkness => (DARKNESS_BASE_HEALTH, DARKNESS_BASE_ATTACK),
            _ => (NORMAL_BASE_HEALTH, NORMAL_BASE_ATTACK),
        };
        self.base.max_health = (base_health as f64 * mult) as i32;
        self.base.health = self.base.max_health;
        for (slot, base) in self.base.attack.iter_mut().zip(base_attacks) {
            *slot = (base as f64 * mult) as i32;
        }
    }
}
