use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Number of sprite sets shipped with the game. Sprite ids run `1..=SPRITE_CATALOG_SIZE`.
pub const SPRITE_CATALOG_SIZE: u32 = 16;

/// The fixed catalog of names a randomly spawned monster can carry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum MonsterName {
    Bulbasaur,
    Charmander,
    Squirtle,
    Pikachu,
    Jigglypuff,
    Meowth,
    Psyduck,
    Machop,
    Geodude,
    Slowpoke,
    Magnemite,
    Doduo,
    Seel,
    Grimer,
    Shellder,
    Gastly,
}

impl MonsterName {
    /// Look up a catalog entry by position, in declaration order.
    pub fn from_index(index: usize) -> Option<MonsterName> {
        MonsterName::iter().nth(index)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Returns true if `sprite_id` selects one of the shipped sprite sets.
pub fn is_valid_sprite_id(sprite_id: u32) -> bool {
    (1..=SPRITE_CATALOG_SIZE).contains(&sprite_id)
}
