//! Fixed ASCII art for the title, encounters and the shop

use xman_core::entity::EnemyType;

pub const TITLE: &[&str] = &[
    r"__  __    __  __   ____   __  _ ",
    r"\ \/ /   |  \/  | / () \ |  \| |",
    r"/_/\_\   |_|\/|_|/__/\__\|_|\__|",
    r"             X-Man",
];

const ALIEN_NORMAL: &[&str] = &[
    r"       _________",
    r"      /___   ___\",
    r"     //@@@\ /@@@\",
    r"     \@@@/ \@@@//",
    r"      \___  ___/",
    r"         | - |",
    r"          \_/",
];

const ALIEN_AGILE: &[&str] = &[
    r"       _________",
    r"      /___   ___\",
    r"     //@@@\ /@@@\",
    r"     \@@@/ \@@@//",
    r"      \___  ___/",
    r"         |~~~|    (AGILE)",
    r"          \_/",
];

const ALIEN_FIRE: &[&str] = &[
    r"       _________",
    r"      /___   ___\",
    r"     //@@@\ /@@@\",
    r"     \@@@/ \@@@//",
    r"      \___  ___/",
    r"    ~~~~~| - |~~~~~  (FIRE)",
    r"          \_/",
];

const ALIEN_DARKNESS: &[&str] = &[
    r"             XMENXM    EN              X    MENXM",
    r"          ENXMENXM    EN               XM    ENXMENXM",
    r"        XMENXMENX    XME               NXM    ENXMENXME",
    r"     NXMENXMENXME    NXME             NXME    NXMENXMENXME",
    r"    NEXMENXMENXME    NXMENXMENXMENXMENXMEN     XMENXMENXMENX",
    r"  MENXMENXMENXMEN     XMENXMENXMENXMENXME     NXMENXMENXMENXM",
    r" ENXMENXMENXMENXME      NXMENXMENXMENX      MENXMENXMENXMENXM",
    r" ENXMENXMENXMENXMEN      XMENXMENXMEN      XMENXMENXMENXMENXM",
    r"ENXMENXMENXMENXMENXM      ENXMENXMENX     MENXMENXMENXMENXMENX",
    r"                                                  (DARKNESS)",
];

pub const SHOP: &[&str] = &[
    r"                ______________",
    r"    __,.,---'''''              '''''---..._",
    r" ,-'             .....:::''::.:            '`-.",
    r"'           ...:::.....       '",
    r"            ''':::'''''       . ",
    r"            ''':::'''''       .               ,",
    r"|'-.._           ''''':::..::':          __,,-",
    r" '-.._''`---.....______________.....---''__,,-",
    r"      ''`---.....______________.....---''",
];

/// Art shown at the top of an encounter screen
pub fn alien_art(enemy_type: EnemyType) -> &'static [&'static str] {
    match enemy_type {
        EnemyType::Normal => ALIEN_NORMAL,
        EnemyType::Agile => ALIEN_AGILE,
        EnemyType::Fire => ALIEN_FIRE,
        EnemyType::Darkness => ALIEN_DARKNESS,
    }
}
