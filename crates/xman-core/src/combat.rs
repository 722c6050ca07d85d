//! Combat resolution
//!
//! One player `attack` command resolves, in order: wither tick, burn
//! tick (each with a lethal check), the miss roll against the enemy
//! type, the player's damage roll, then - if the enemy survives or the
//! player whiffed - the enemy retaliation with armor reduction and
//! type-specific status application. A whiffed attack is not a free
//! turn: the enemy retaliates exactly as on a connected attack.

use crate::consts::ARMOR_BLOCK_PER_POINT;
use crate::entity::{CRIT_SLOT, Enemy, EnemyType, Player};
use crate::rng::GameRng;

/// Darkness wither payload: 8 damage/turn for 2 turns plus 2 turns of weakness
const DARKNESS_WITHER_DAMAGE: i32 = 8;
const DARKNESS_WITHER_TURNS: u32 = 2;
const DARKNESS_WEAKNESS_TURNS: u32 = 2;

/// Darkness inflicts wither on every 4th retaliation
const DARKNESS_SPECIAL_CADENCE: u32 = 4;

/// Fire burn: 50% per retaliation, 3-7 damage for 2-4 turns
const BURN_CHANCE_PERCENT: u32 = 50;
const BURN_DAMAGE_RANGE: (i32, i32) = (3, 7);
const BURN_TURNS_RANGE: (i32, i32) = (2, 4);

/// Potion healing ranges
const POTION_HEAL_RANGE: (i32, i32) = (30, 50);
const BIG_POTION_HEAL_RANGE: (i32, i32) = (50, 100);

/// How an `attack` command resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Both sides still standing; await the next command
    Continue,
    /// Enemy dropped to 0 or below; no retaliation this turn
    EnemySlain,
    /// Player dropped to 0 or below
    PlayerSlain,
}

/// The two potion sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionKind {
    Regular,
    Big,
}

/// Resolve one `attack` command.
pub fn resolve_attack(
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut GameRng,
    messages: &mut Vec<String>,
) -> AttackOutcome {
    // Status effects tick first, wither before burn, each checked for
    // lethality before the swing happens.
    if let Some(damage) = player.status.tick_wither() {
        player.base.health -= damage;
        messages.push(format!(
            "You take {} wither damage! ({} turns left)",
            damage, player.status.wither_turns
        ));
        if player.base.health <= 0 {
            return AttackOutcome::PlayerSlain;
        }
    }
    if let Some(damage) = player.status.tick_burn() {
        player.base.health -= damage;
        messages.push(format!(
            "You take {} burn damage! ({} turns left)",
            damage, player.status.burn_turns
        ));
        if player.base.health <= 0 {
            return AttackOutcome::PlayerSlain;
        }
    }

    // Miss roll by enemy type; a whiff still takes full retaliation.
    let miss_percent = enemy.enemy_type.miss_percent();
    if miss_percent > 0 && rng.percent(miss_percent) {
        match enemy.enemy_type {
            EnemyType::Darkness => {
                messages.push("Your attack passes through the darkness!".to_string())
            }
            _ => messages.push("The agile alien dodged your attack!".to_string()),
        }
        if enemy_retaliate(player, enemy, rng, messages) {
            return AttackOutcome::PlayerSlain;
        }
        return AttackOutcome::Continue;
    }

    // Connected hit: uniform slot selection, last slot is the critical.
    let slot = rng.rn2(player.base.attack.len() as u32) as usize;
    let mut damage = player.base.attack[slot];
    if player.status.is_weakened() {
        damage /= 2;
        messages.push("(Your damage is halved by WEAKNESS!)".to_string());
    }
    enemy.base.health -= damage;
    if slot == CRIT_SLOT {
        messages.push("Critical hit on the enemy!".to_string());
    }
    messages.push(format!("You did {} damage!", damage));

    if enemy.base.health <= 0 {
        // Enemy does not get to retaliate on the killing blow.
        return AttackOutcome::EnemySlain;
    }

    if enemy_retaliate(player, enemy, rng, messages) {
        return AttackOutcome::PlayerSlain;
    }
    AttackOutcome::Continue
}

/// Enemy retaliation: uniform slot roll, armor reduction with a floor of
/// 1 damage, then type-specific status application. Returns true if the
/// player died.
pub fn enemy_retaliate(
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut GameRng,
    messages: &mut Vec<String>,
) -> bool {
    let slot = rng.rn2(enemy.base.attack.len() as u32) as usize;
    if slot == CRIT_SLOT {
        messages.push("Critical hit on you!".to_string());
    }
    let base_damage = enemy.base.attack[slot];
    let actual_damage = (base_damage - player.armor * ARMOR_BLOCK_PER_POINT).max(1);
    player.base.health -= actual_damage;

    if player.armor > 0 {
        messages.push(format!(
            "The enemy did {} damage ({} after armor)!",
            base_damage, actual_damage
        ));
    } else {
        messages.push(format!("The enemy did {} damage to you!", actual_damage));
    }

    match enemy.enemy_type {
        EnemyType::Darkness => {
            enemy.attack_counter += 1;
            if enemy.attack_counter % DARKNESS_SPECIAL_CADENCE == 0 {
                player.status.apply_wither(
                    DARKNESS_WITHER_DAMAGE,
                    DARKNESS_WITHER_TURNS,
                    DARKNESS_WEAKNESS_TURNS,
                );
                messages.push(format!(
                    "The darkness withers you! {} damage/turn for {} turns + WEAKNESS!",
                    DARKNESS_WITHER_DAMAGE, DARKNESS_WITHER_TURNS
                ));
            }
        }
        EnemyType::Fire => {
            if rng.percent(BURN_CHANCE_PERCENT) {
                let burn_damage = rng.range(BURN_DAMAGE_RANGE.0, BURN_DAMAGE_RANGE.1);
                let burn_turns = rng.range(BURN_TURNS_RANGE.0, BURN_TURNS_RANGE.1) as u32;
                player.status.apply_burn(burn_damage, burn_turns);
                messages.push(format!(
                    "You've been set on fire! {} damage per turn for {} turns!",
                    burn_damage, burn_turns
                ));
            }
        }
        EnemyType::Normal | EnemyType::Agile => {}
    }

    player.base.health <= 0
}

/// Drink a potion if one is available. Heals a random amount clamped to
/// max health and does not consume a combat turn.
pub fn drink_potion(
    player: &mut Player,
    kind: PotionKind,
    rng: &mut GameRng,
    messages: &mut Vec<String>,
) {
    match kind {
        PotionKind::Regular => {
            if player.health_potions == 0 {
                messages.push("You don't have any health potions!".to_string());
                return;
            }
            player.health_potions -= 1;
            let heal = rng.range(POTION_HEAL_RANGE.0, POTION_HEAL_RANGE.1);
            player.base.heal(heal);
            messages.push(format!("You drank a potion and restored {} HP!", heal));
            messages.push(format!(
                "Current Health: {}/{}",
                player.base.health, player.base.max_health
            ));
            messages.push(format!("Potions remaining: {}", player.health_potions));
        }
        PotionKind::Big => {
            if player.big_potions == 0 {
                messages.push("You don't have any big potions!".to_string());
                return;
            }
            player.big_potions -= 1;
            let heal = rng.range(BIG_POTION_HEAL_RANGE.0, BIG_POTION_HEAL_RANGE.1);
            player.base.heal(heal);
            messages.push(format!("You drank a BIG POTION and restored {} HP!", heal));
            messages.push(format!(
                "Current Health: {}/{}",
                player.base.health, player.base.max_health
            ));
            messages.push(format!("Big Potions remaining: {}", player.big_potions));
        }
    }
}

/// 50/50 escape roll for the `run` command
pub fn attempt_run(rng: &mut GameRng) -> bool {
    rng.one_in(2)
}
