//! Status effects: burn, wither, weakness
//!
//! Burn and wither are timed damage-over-time counters ticked at the
//! start of the player's attack action (wither first, then burn).
//! Weakness halves player-dealt damage while it lasts; its duration is
//! tied to wither - when wither expires, weakness is cleared with it.
//! Effects never stack: re-applying one overwrites damage and duration.

/// Active status-effect counters on the player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEffects {
    pub burn_damage: i32,
    pub burn_turns: u32,
    pub wither_damage: i32,
    pub wither_turns: u32,
    pub weakness_turns: u32,
}

impl StatusEffects {
    /// Set (or overwrite) burn
    pub fn apply_burn(&mut self, damage: i32, turns: u32) {
        self.burn_damage = damage;
        self.burn_turns = turns;
    }

    /// Set (or overwrite) wither together with weakness
    pub fn apply_wither(&mut self, damage: i32, wither_turns: u32, weakness_turns: u32) {
        self.wither_damage = damage;
        self.wither_turns = wither_turns;
        self.weakness_turns = weakness_turns;
    }

    /// Tick burn; returns the damage to subtract this turn, if burning.
    pub fn tick_burn(&mut self) -> Option<i32> {
        if self.burn_turns == 0 {
            return None;
        }
        self.burn_turns -= 1;
        Some(self.burn_damage)
    }

    /// Tick wither; returns the damage to subtract this turn, if
    /// withering. Clears weakness when the last wither turn elapses -
    /// weakness cannot outlive wither.
    pub fn tick_wither(&mut self) -> Option<i32> {
        if self.wither_turns == 0 {
            return None;
        }
        self.wither_turns -= 1;
        if self.wither_turns == 0 {
            self.weakness_turns = 0;
        }
        Some(self.wither_damage)
    }

    /// While weakened, player-dealt damage is halved (truncated).
    pub fn is_weakened(&self) -> bool {
        self.weakness_turns > 0
    }

    pub fn is_burning(&self) -> bool {
        self.burn_turns > 0
    }

    pub fn is_withering(&self) -> bool {
        self.wither_turns > 0
    }

    /// Cure everything (level-up reward)
    pub fn cure_all(&mut self) {
        self.burn_turns = 0;
        self.wither_turns = 0;
        self.weakness_turns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_ticks_down() {
        let mut s = StatusEffects::default();
        s.apply_burn(5, 2);
        assert_eq!(s.tick_burn(), Some(5));
        assert_eq!(s.tick_burn(), Some(5));
        assert_eq!(s.tick_burn(), None);
    }

    #[test]
    fn test_wither_expiry_clears_weakness() {
        let mut s = StatusEffects::default();
        s.apply_wither(8, 2, 2);
        assert!(s.is_weakened());
        assert_eq!(s.tick_wither(), Some(8));
        assert!(s.is_weakened());
        assert_eq!(s.tick_wither(), Some(8));
        assert!(!s.is_weakened());
        assert_eq!(s.tick_wither(), None);
    }

    #[test]
    fn test_reapply_overwrites() {
        let mut s = StatusEffects::default();
        s.apply_burn(3, 4);
        s.apply_burn(7, 2);
        assert_eq!(s.burn_damage, 7);
        assert_eq!(s.burn_turns, 2);
    }

    #[test]
    fn test_cure_all() {
        let mut s = StatusEffects::default();
        s.apply_burn(5, 3);
        s.apply_wither(8, 2, 2);
        s.cure_all();
        assert!(!s.is_burning());
        assert!(!s.is_withering());
        assert!(!s.is_weakened());
    }
}
