//! Loot and progression
//!
//! Kill rewards are granted once, on the first death transition, before
//! the corpse state is entered. Searching the corpse later yields a
//! second, smaller gold bonus, exactly once.

use crate::entity::{Enemy, Player};
use crate::rng::GameRng;

/// Base kill rewards before the type bonus
const KILL_XP_RANGE: (i32, i32) = (30, 50);
const KILL_GOLD_RANGE: (i32, i32) = (10, 15);
const SEARCH_GOLD_RANGE: (i32, i32) = (3, 8);

/// Hand out the kill reward and run the level-up bookkeeping.
///
/// Marks the enemy dead with `loot_given`, grants XP and gold with the
/// type bonuses, and - if the XP grant crossed the level threshold -
/// cures all status effects and narrates the level-up.
pub fn award_kill(
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut GameRng,
    messages: &mut Vec<String>,
) {
    enemy.is_dead = true;
    enemy.loot_given = true;

    let xp_reward = rng.range(KILL_XP_RANGE.0, KILL_XP_RANGE.1) + enemy.enemy_type.xp_bonus();
    let gold_reward = rng.range(KILL_GOLD_RANGE.0, KILL_GOLD_RANGE.1) + enemy.enemy_type.gold_bonus();

    player.earn_gold(gold_reward);
    player.enemies_killed += 1;

    messages.push("YOU HAVE KILLED AN ENEMY!".to_string());
    messages.push(format!("You gained {} XP!", xp_reward));
    messages.push(format!("You found {} Gold!", gold_reward));

    if player.gain_xp(xp_reward) {
        messages.push("*** LEVEL UP! ***".to_string());
        messages.push(format!("You are now level {}!", player.level));
        messages.push(format!(
            "Max Health increased to {}!",
            player.base.max_health
        ));
        messages.push("Attack damage increased!".to_string());
        messages.push("Fully healed!".to_string());
        if player.status.is_burning() {
            messages.push("Burn cured!".to_string());
        }
        if player.status.is_withering() {
            messages.push("Wither and weakness cured!".to_string());
        }
        player.status.cure_all();
    }
}

/// Search a corpse for the one-time bonus gold. Repeat attempts are
/// rejected with a message and no reward.
pub fn search_corpse(
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut GameRng,
    messages: &mut Vec<String>,
) {
    if enemy.searched {
        messages.push("You've already searched this corpse!".to_string());
        return;
    }
    enemy.searched = true;

    let bonus_gold =
        rng.range(SEARCH_GOLD_RANGE.0, SEARCH_GOLD_RANGE.1) + enemy.enemy_type.search_bonus();
    player.earn_gold(bonus_gold);

    messages.push("You search the remains...".to_string());
    messages.push(format!("You found: {} extra Gold!", bonus_gold));
    messages.push(format!("You now have {} Gold total!", player.gold));
}
