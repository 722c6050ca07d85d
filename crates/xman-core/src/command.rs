//! Text command parsing for the encounter, corpse and shop prompts
//!
//! Input is case-insensitive and whitespace-trimmed. An unrecognized
//! line parses to [`CommandError::Unknown`]; the state machine turns
//! that into a rejection message without consuming a turn.

use std::str::FromStr;

use thiserror::Error;

/// A command line the state machine could not act on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown Command, type 'help' for help!")]
    Unknown(String),

    #[error("Unknown item. Type 'help' for options.")]
    UnknownItem(String),
}

/// Commands available while an enemy is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterCommand {
    Attack,
    Run,
    Potion,
    BigPotion,
    Help,
}

impl FromStr for EncounterCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" => Ok(EncounterCommand::Attack),
            "run" => Ok(EncounterCommand::Run),
            "potion" => Ok(EncounterCommand::Potion),
            "bigpotion" => Ok(EncounterCommand::BigPotion),
            "help" => Ok(EncounterCommand::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Commands available over a corpse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpseCommand {
    Exit,
    Tbag,
    Search,
    Help,
}

impl FromStr for CorpseCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exit" => Ok(CorpseCommand::Exit),
            "tbag" => Ok(CorpseCommand::Tbag),
            "search" => Ok(CorpseCommand::Search),
            "help" => Ok(CorpseCommand::Help),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Commands available at the shop. `Buy` and `Equip` carry the raw item
/// token; the economy engine resolves it against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    Exit,
    Help,
    Buy(String),
    Equip(String),
}

impl FromStr for ShopCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "exit" => return Ok(ShopCommand::Exit),
            "help" => return Ok(ShopCommand::Help),
            _ => {}
        }
        if let Some(item) = lower.strip_prefix("buy") {
            return Ok(ShopCommand::Buy(item.trim().to_string()));
        }
        if let Some(item) = lower.strip_prefix("equip") {
            return Ok(ShopCommand::Equip(item.trim().to_string()));
        }
        Err(CommandError::Unknown(lower))
    }
}
