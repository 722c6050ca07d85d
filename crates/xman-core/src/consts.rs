//! Core game constants.

/// Board dimensions (visible grid)
pub const BOARD_WIDTH: i32 = 30;
pub const BOARD_HEIGHT: i32 = 16;

/// Attack arrays always hold four slots; the last one is the critical.
pub const ATTACK_SLOTS: usize = 4;

/// XP needed for the next level is `level * LEVEL_XP_STEP`.
pub const LEVEL_XP_STEP: i32 = 100;

/// Max health gained per level-up
pub const LEVEL_HEALTH_BONUS: i32 = 50;

/// Added to every attack slot per level-up (and per level when equipping)
pub const LEVEL_ATTACK_BONUS: i32 = 7;

/// Armor is bought in steps of 5, capped at 10
pub const ARMOR_STEP: i32 = 5;
pub const ARMOR_MAX: i32 = 10;

/// Each point of armor blocks 2 damage on a retaliation
pub const ARMOR_BLOCK_PER_POINT: i32 = 2;

/// Dead enemies respawn after this many world ticks
pub const RESPAWN_TICKS: u32 = 50;
pub const DARKNESS_RESPAWN_TICKS: u32 = 120;

/// Every this many moves, freshly respawned enemies may re-roll their type
pub const RETYPE_INTERVAL: u64 = 50;

/// Enemies spawn and respawn at coordinates in `[SPAWN_MARGIN, dim - 1]`
pub const SPAWN_MARGIN: i32 = 3;

/// Number of enemies roaming the board
pub const ENEMY_COUNT: usize = 5;

/// Map symbols
pub const S_FLOOR: char = '-';
pub const S_SHOP: char = 'S';
pub const S_PLAYER: char = 'X';
pub const S_ENEMY: char = 'E';
pub const S_AGILE: char = '^';
pub const S_FIRE: char = 'O';
/// Darkness enemies render as a blank cell - invisible on the board.
pub const S_DARKNESS: char = ' ';
