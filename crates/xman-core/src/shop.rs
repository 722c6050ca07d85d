//! Shop catalog and economy engine
//!
//! Purchases and equips are soft-validated: insufficient gold, already
//! owned, or the armor cap produce a descriptive message and change no
//! state. Nothing here consumes a combat turn.

use crate::consts::{ARMOR_BLOCK_PER_POINT, ARMOR_MAX, ARMOR_STEP, LEVEL_ATTACK_BONUS};
use crate::entity::{AttackArray, Player};

/// A purchasable weapon: name, base attack array, gold price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weapon {
    pub name: &'static str,
    pub attack: AttackArray,
    pub price: i32,
}

/// Fists: free, always owned, the starting loadout.
pub const FISTS: Weapon = Weapon {
    name: "Fists",
    attack: [25, 22, 21, 30],
    price: 0,
};

/// The fixed weapon catalog
pub const WEAPONS: [Weapon; 3] = [
    Weapon {
        name: "Sword",
        attack: [27, 24, 23, 32],
        price: 10,
    },
    Weapon {
        name: "Mace",
        attack: [28, 25, 24, 33],
        price: 20,
    },
    Weapon {
        name: "Axe",
        attack: [30, 27, 26, 35],
        price: 35,
    },
];

pub const POTION_PRICE: i32 = 10;
pub const BIG_POTION_PRICE: i32 = 25;
pub const ARMOR_PRICE: i32 = 50;

/// Look up a weapon (catalog or Fists) by case-insensitive name.
pub fn find_weapon(name: &str) -> Option<&'static Weapon> {
    if name.eq_ignore_ascii_case(FISTS.name) {
        return Some(&FISTS);
    }
    WEAPONS.iter().find(|w| w.name.eq_ignore_ascii_case(name))
}

/// A weapon's base array scaled by the retroactive level bonus:
/// +7 to every slot per level beyond the first.
pub fn scaled_attack(base: AttackArray, level: i32) -> AttackArray {
    let bonus = LEVEL_ATTACK_BONUS * (level - 1).max(0);
    base.map(|slot| slot + bonus)
}

/// Equip an owned weapon by item token. Rejected if not owned.
pub fn equip(player: &mut Player, item: &str) -> Vec<String> {
    let Some(weapon) = find_weapon(item) else {
        return vec![format!("You don't own {}!", title_case(item))];
    };
    if !player.owns_weapon(weapon.name) {
        return vec![format!("You don't own {}!", weapon.name)];
    }
    player.weapon = weapon.name.to_string();
    player.base.attack = scaled_attack(weapon.attack, player.level);
    vec![format!("Equipped {}!", weapon.name)]
}

/// Buy an item by token: a catalog weapon, Potion, BigPotion or Armor.
pub fn buy(player: &mut Player, item: &str) -> Vec<String> {
    if item.eq_ignore_ascii_case("potion") {
        return buy_potion(player);
    }
    if item.eq_ignore_ascii_case("bigpotion") {
        return buy_big_potion(player);
    }
    if item.eq_ignore_ascii_case("armor") {
        return buy_armor(player);
    }
    if let Some(weapon) = WEAPONS.iter().find(|w| w.name.eq_ignore_ascii_case(item)) {
        return buy_weapon(player, weapon);
    }
    vec!["Unknown item. Type 'help' for options.".to_string()]
}

fn buy_potion(player: &mut Player) -> Vec<String> {
    if player.gold < POTION_PRICE {
        return vec!["You cannot afford a Potion...".to_string()];
    }
    player.gold -= POTION_PRICE;
    player.health_potions += 1;
    vec![
        "You have purchased a Potion!".to_string(),
        format!("You now have {} potion(s)", player.health_potions),
    ]
}

fn buy_big_potion(player: &mut Player) -> Vec<String> {
    if player.gold < BIG_POTION_PRICE {
        return vec!["You cannot afford a Big Potion...".to_string()];
    }
    player.gold -= BIG_POTION_PRICE;
    player.big_potions += 1;
    vec![
        "You have purchased a Big Potion!".to_string(),
        format!("You now have {} big potion(s)", player.big_potions),
    ]
}

fn buy_armor(player: &mut Player) -> Vec<String> {
    if player.gold < ARMOR_PRICE {
        return vec!["You cannot afford Armor...".to_string()];
    }
    if player.armor >= ARMOR_MAX {
        return vec!["You already have maximum armor!".to_string()];
    }
    player.gold -= ARMOR_PRICE;
    player.armor += ARMOR_STEP;
    vec![
        "You have purchased Armor! +5 damage reduction".to_string(),
        format!(
            "Current armor: {} (blocks {} damage)",
            player.armor,
            player.armor * ARMOR_BLOCK_PER_POINT
        ),
    ]
}

fn buy_weapon(player: &mut Player, weapon: &Weapon) -> Vec<String> {
    if player.owns_weapon(weapon.name) {
        return vec![format!(
            "You already own the {}! Use 'Equip {}' to equip it.",
            weapon.name, weapon.name
        )];
    }
    if player.gold < weapon.price {
        return vec![format!("You cannot afford the {}...", weapon.name)];
    }
    player.gold -= weapon.price;
    player.owned_weapons.insert(weapon.name.to_string());
    player.base.attack = scaled_attack(weapon.attack, player.level);
    player.weapon = weapon.name.to_string();
    vec![format!(
        "You have purchased and equipped the {}!",
        weapon.name
    )]
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_gold(gold: i32) -> Player {
        let mut p = Player::new(4, 4, 100, FISTS.attack);
        p.gold = gold;
        p
    }

    #[test]
    fn test_buy_sword_exact_gold() {
        let mut p = player_with_gold(10);
        buy(&mut p, "sword");
        assert_eq!(p.gold, 0);
        assert!(p.owns_weapon("Sword"));
        assert_eq!(p.weapon, "Sword");
        assert_eq!(p.base.attack, [27, 24, 23, 32]);
    }

    #[test]
    fn test_buy_weapon_scales_retroactively() {
        let mut p = player_with_gold(35);
        p.level = 3;
        buy(&mut p, "axe");
        // +7 per level beyond the first, twice
        assert_eq!(p.base.attack, [44, 41, 40, 49]);
    }

    #[test]
    fn test_buy_weapon_insufficient_gold() {
        let mut p = player_with_gold(5);
        let msgs = buy(&mut p, "sword");
        assert_eq!(p.gold, 5);
        assert!(!p.owns_weapon("Sword"));
        assert!(msgs[0].contains("cannot afford"));
    }

    #[test]
    fn test_buy_weapon_already_owned() {
        let mut p = player_with_gold(30);
        buy(&mut p, "sword");
        let gold_after = p.gold;
        let msgs = buy(&mut p, "sword");
        assert_eq!(p.gold, gold_after);
        assert!(msgs[0].contains("already own"));
    }

    #[test]
    fn test_equip_not_owned() {
        let mut p = player_with_gold(0);
        let msgs = equip(&mut p, "mace");
        assert_eq!(p.weapon, "Fists");
        assert!(msgs[0].contains("don't own"));
    }

    #[test]
    fn test_equip_fists_always_works() {
        let mut p = player_with_gold(10);
        p.level = 2;
        buy(&mut p, "sword");
        equip(&mut p, "fists");
        assert_eq!(p.weapon, "Fists");
        assert_eq!(p.base.attack, [32, 29, 28, 37]);
    }

    #[test]
    fn test_armor_cap_rejected() {
        let mut p = player_with_gold(200);
        buy(&mut p, "armor");
        buy(&mut p, "armor");
        assert_eq!(p.armor, 10);
        assert_eq!(p.gold, 100);
        let msgs = buy(&mut p, "armor");
        assert_eq!(p.armor, 10);
        assert_eq!(p.gold, 100);
        assert!(msgs[0].contains("maximum armor"));
    }

    #[test]
    fn test_buy_potions_increment_matching_count() {
        let mut p = player_with_gold(35);
        buy(&mut p, "potion");
        assert_eq!(p.health_potions, 1);
        assert_eq!(p.big_potions, 0);
        buy(&mut p, "bigpotion");
        assert_eq!(p.health_potions, 1);
        assert_eq!(p.big_potions, 1);
        assert_eq!(p.gold, 0);
    }

    #[test]
    fn test_unknown_item() {
        let mut p = player_with_gold(100);
        let msgs = buy(&mut p, "shield");
        assert!(msgs[0].contains("Unknown item"));
        assert_eq!(p.gold, 100);
    }

    #[test]
    fn test_find_weapon_case_insensitive() {
        assert_eq!(find_weapon("SWORD").unwrap().name, "Sword");
        assert_eq!(find_weapon("fists").unwrap().name, "Fists");
        assert!(find_weapon("spear").is_none());
    }
}
