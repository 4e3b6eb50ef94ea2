// In: src/lib.rs

//! Monster Battle Engine
//!
//! A turn-based encounter engine for a small monster-collecting RPG: monster
//! records, a random monster factory, the player's bag, and the battle state
//! machine that drives one encounter from send-out to win, loss or escape.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod input;
pub mod monster;
pub mod monster_factory;
pub mod party;
pub mod presentation;
pub mod session;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BagSaveData, EncounterKind, EncounterOutcome, ItemSaveData, MonsterName, MonsterSaveData,
    SPRITE_CATALOG_SIZE,
};

// --- From this crate's modules (`src/`) ---

// Battle state machine and the records it reports.
pub use battle::encounter::Encounter;
pub use battle::state::{ActionResult, BattleAction, BattleEvent, BattleState, Dialogue, Side};

// Monsters and the bag.
pub use monster::{Monster, SpritePose};
pub use monster_factory::MonsterFactory;
pub use party::{Item, Party};

// Session wiring and configuration.
pub use config::{BattleConfig, GameConfig};
pub use session::{GameSession, SceneKind};

// Error types.
pub use errors::{
    ActionError, ConfigError, EncounterError, GameError, GameResult, MonsterError, SaveDataError,
};
