use crate::battle::state::{BattleAction, BattleState, Side};
use std::fmt;

/// Main error type for the Monster Battle game crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Error related to constructing or loading a monster record
    Monster(MonsterError),
    /// Error related to starting an encounter
    Encounter(EncounterError),
    /// Error related to save data (de)serialization
    SaveData(SaveDataError),
    /// Error related to loading configuration
    Config(ConfigError),
}

/// Errors raised when a monster record would be built from bad arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterError {
    /// Level must be at least 1
    InvalidLevel(u32),
    /// Sprite id is outside the shipped sprite catalog
    InvalidSpriteId(u32),
    /// Level range for random creation is empty or starts at 0
    InvalidLevelRange { lo: u32, hi: u32 },
    /// Current health exceeds maximum health
    HealthOutOfRange { hp: u32, max_hp: u32 },
}

/// Errors raised when an encounter cannot be entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncounterError {
    /// The party has no monster that can be sent out
    NoEligibleMonster,
}

/// Reasons a battle action was not applied. These are reported back to the
/// caller inside an `ActionResult`, never propagated as failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Action is not accepted in the current battle state
    InvalidAction {
        action: BattleAction,
        state: BattleState,
    },
    /// Catching is only possible in wild encounters
    CatchNotAllowed,
    /// The named side has no monster on the field
    NoActiveMonster(Side),
    /// The encounter has already been left
    EncounterOver,
}

/// Errors related to reading or writing save data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDataError {
    /// The save text could not be parsed or written
    Malformed(String),
    /// A monster entry failed validation
    InvalidMonster { index: usize, error: MonsterError },
}

/// Errors related to loading the game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file could not be read
    Io(String),
    /// The config text is not valid RON for `GameConfig`
    Malformed(String),
    /// A value is outside its allowed range
    Invalid(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Monster(err) => write!(f, "Monster error: {}", err),
            GameError::Encounter(err) => write!(f, "Encounter error: {}", err),
            GameError::SaveData(err) => write!(f, "Save data error: {}", err),
            GameError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl fmt::Display for MonsterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonsterError::InvalidLevel(level) => write!(f, "Invalid level: {} (must be at least 1)", level),
            MonsterError::InvalidSpriteId(id) => write!(f, "Invalid sprite id: {}", id),
            MonsterError::InvalidLevelRange { lo, hi } => write!(f, "Invalid level range: {}..={}", lo, hi),
            MonsterError::HealthOutOfRange { hp, max_hp } => write!(f, "Health {} exceeds maximum {}", hp, max_hp),
        }
    }
}

impl fmt::Display for EncounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncounterError::NoEligibleMonster => write!(f, "No monster in the party is able to battle"),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::InvalidAction { action, state } => {
                write!(f, "Action {:?} is not accepted during {:?}", action, state)
            }
            ActionError::CatchNotAllowed => write!(f, "Catching is only possible in wild encounters"),
            ActionError::NoActiveMonster(side) => write!(f, "No active monster on the {:?} side", side),
            ActionError::EncounterOver => write!(f, "The encounter is already over"),
        }
    }
}

impl fmt::Display for SaveDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveDataError::Malformed(details) => write!(f, "Malformed save data: {}", details),
            SaveDataError::InvalidMonster { index, error } => write!(f, "Invalid monster #{}: {}", index, error),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(details) => write!(f, "Could not read config: {}", details),
            ConfigError::Malformed(details) => write!(f, "Malformed config: {}", details),
            ConfigError::Invalid(details) => write!(f, "Invalid config value: {}", details),
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for MonsterError {}
impl std::error::Error for EncounterError {}
impl std::error::Error for ActionError {}
impl std::error::Error for SaveDataError {}
impl std::error::Error for ConfigError {}

impl From<MonsterError> for GameError {
    fn from(err: MonsterError) -> Self {
        GameError::Monster(err)
    }
}

impl From<EncounterError> for GameError {
    fn from(err: EncounterError) -> Self {
        GameError::Encounter(err)
    }
}

impl From<SaveDataError> for GameError {
    fn from(err: SaveDataError) -> Self {
        GameError::SaveData(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<serde_json::Error> for SaveDataError {
    fn from(err: serde_json::Error) -> Self {
        SaveDataError::Malformed(err.to_string())
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Malformed(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using MonsterError
pub type MonsterResult<T> = Result<T, MonsterError>;

/// Type alias for Results using EncounterError
pub type EncounterResult<T> = Result<T, EncounterError>;

/// Type alias for Results using SaveDataError
pub type SaveDataResult<T> = Result<T, SaveDataError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
