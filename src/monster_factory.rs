use crate::errors::{MonsterError, MonsterResult};
use crate::monster::Monster;
use rand::rngs::ThreadRng;
use rand::Rng;
use schema::{EnumCount, MonsterName, SPRITE_CATALOG_SIZE};
use std::ops::RangeInclusive;

/// Largest random bonus added to a randomly created monster's maximum health.
pub const MAX_RANDOM_HEALTH_BONUS: u32 = 10;

/// Default level range for wild spawns.
pub const DEFAULT_LEVEL_RANGE: RangeInclusive<u32> = 5..=10;

/// Builds monster records, either from explicit parameters or by drawing from
/// the name and sprite catalogs.
///
/// The factory owns one random source and every draw comes from it, so
/// consecutive calls are independent. Tests pass a seeded rng through
/// [`MonsterFactory::with_rng`].
#[derive(Debug)]
pub struct MonsterFactory<R = ThreadRng> {
    rng: R,
}

impl MonsterFactory<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for MonsterFactory<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MonsterFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The shared random source, for other draws that must come from the same stream.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Create a monster with a random name, sprite, level in `level_range`, and
    /// up to `MAX_RANDOM_HEALTH_BONUS` extra maximum health.
    pub fn create_random(&mut self, level_range: RangeInclusive<u32>) -> MonsterResult<Monster> {
        let (lo, hi) = (*level_range.start(), *level_range.end());
        if lo == 0 || lo > hi {
            return Err(MonsterError::InvalidLevelRange { lo, hi });
        }

        let level = self.rng.random_range(lo..=hi);
        let bonus = self.rng.random_range(0..=MAX_RANDOM_HEALTH_BONUS);
        let sprite_id = self.rng.random_range(1..=SPRITE_CATALOG_SIZE);
        let name = MonsterName::from_index(self.rng.random_range(0..MonsterName::COUNT))
            .unwrap_or(MonsterName::Pikachu);

        Monster::with_bonus_health(name.name(), level, sprite_id, bonus)
    }

    /// Create a monster with exactly the given identity, no random bonus.
    pub fn create(&self, name: &str, level: u32, sprite_id: u32) -> MonsterResult<Monster> {
        Monster::new(name, level, sprite_id)
    }
}
