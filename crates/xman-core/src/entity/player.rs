//! The player character

use std::collections::HashSet;

use super::{AttackArray, Character};
use crate::consts::{LEVEL_ATTACK_BONUS, LEVEL_HEALTH_BONUS, LEVEL_XP_STEP};
use crate::shop::FISTS;
use crate::status::StatusEffects;

/// Player state: an embedded [`Character`] plus progression, inventory
/// and active status effects.
#[derive(Debug, Clone)]
pub struct Player {
    pub base: Character,
    /// Name of the currently equipped weapon
    pub weapon: String,
    pub level: i32,
    pub xp: i32,
    /// Spendable gold
    pub gold: i32,
    /// Cumulative gold earned this session; never decreases
    pub total_gold: i32,
    pub enemies_killed: u32,
    pub status: StatusEffects,
    /// Damage reduction, 0-10 in steps of 5
    pub armor: i32,
    pub health_potions: u32,
    pub big_potions: u32,
    /// Weapon names the player owns; "Fists" is always present
    pub owned_weapons: HashSet<String>,
}

impl Player {
    /// Create the starting player at the given position.
    pub fn new(x: i32, y: i32, health: i32, attack: AttackArray) -> Self {
        let mut owned_weapons = HashSet::new();
        owned_weapons.insert(FISTS.name.to_string());
        Self {
            base: Character::new(x, y, health, attack),
            weapon: FISTS.name.to_string(),
            level: 1,
            xp: 0,
            gold: 0,
            total_gold: 0,
            enemies_killed: 0,
            status: StatusEffects::default(),
            armor: 0,
            health_potions: 0,
            big_potions: 0,
            owned_weapons,
        }
    }

    /// XP needed to reach the next level
    pub fn xp_needed(&self) -> i32 {
        self.level * LEVEL_XP_STEP
    }

    /// Add XP and check for a level-up.
    ///
    /// Performs a single threshold check per call: a very large grant does
    /// not cascade multiple level-ups. On level-up the player gains +50
    /// max health, a full heal, and +7 to every attack slot; the caller
    /// is responsible for curing status effects and narrating.
    ///
    /// Returns true if a level-up occurred.
    pub fn gain_xp(&mut self, amount: i32) -> bool {
        self.xp += amount;
        let xp_needed = self.xp_needed();
        if self.xp >= xp_needed {
            self.level += 1;
            self.xp -= xp_needed;
            self.base.max_health += LEVEL_HEALTH_BONUS;
            self.base.health = self.base.max_health;
            for slot in self.base.attack.iter_mut() {
                *slot += LEVEL_ATTACK_BONUS;
            }
            return true;
        }
        false
    }

    /// Record a gold reward. Both the spendable pool and the session
    /// total grow; spending only ever touches `gold`.
    pub fn earn_gold(&mut self, amount: i32) {
        self.gold += amount;
        self.total_gold += amount;
    }

    pub fn owns_weapon(&self, name: &str) -> bool {
        self.owned_weapons.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_one() -> Player {
        Player::new(4, 4, 100, [25, 22, 21, 30])
    }

    #[test]
    fn test_starting_player_owns_fists() {
        let p = level_one();
        assert!(p.owns_weapon("Fists"));
        assert_eq!(p.weapon, "Fists");
    }

    #[test]
    fn test_gain_xp_below_threshold() {
        let mut p = level_one();
        assert!(!p.gain_xp(99));
        assert_eq!(p.level, 1);
        assert_eq!(p.xp, 99);
    }

    #[test]
    fn test_gain_xp_level_up() {
        let mut p = level_one();
        p.base.health = 40;
        assert!(p.gain_xp(130));
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 30);
        assert_eq!(p.base.max_health, 150);
        assert_eq!(p.base.health, 150);
        assert_eq!(p.base.attack, [32, 29, 28, 37]);
    }

    #[test]
    fn test_gain_xp_single_check_per_call() {
        // A huge grant crosses one threshold only; the remainder carries.
        let mut p = level_one();
        assert!(p.gain_xp(500));
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 400);
    }

    #[test]
    fn test_gain_xp_monotonic_level() {
        let mut p = level_one();
        for grant in [10, 0, 250, 90, 90, 1000] {
            let before = p.level;
            p.gain_xp(grant);
            assert!(p.level >= before);
        }
    }

    #[test]
    fn test_post_levelup_xp_below_new_threshold() {
        let mut p = level_one();
        p.gain_xp(120);
        assert!(p.xp < p.xp_needed());
    }

    #[test]
    fn test_earn_gold_tracks_total() {
        let mut p = level_one();
        p.earn_gold(12);
        p.gold -= 10; // spend
        p.earn_gold(5);
        assert_eq!(p.gold, 7);
        assert_eq!(p.total_gold, 17);
    }
}
