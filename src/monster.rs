use crate::errors::{MonsterError, MonsterResult};
use schema::{is_valid_sprite_id, MonsterSaveData};
use serde::{Deserialize, Serialize};

/// Health every monster starts from before level scaling.
pub const BASE_HEALTH: u32 = 20;
/// Additional maximum health granted per level.
pub const HEALTH_PER_LEVEL: u32 = 5;

/// Which of a monster's sprite sets to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpritePose {
    Idle,
    Attack,
    Menu,
}

/// Derive the asset path for a sprite id in the given pose.
pub fn sprite_path(sprite_id: u32, pose: SpritePose) -> String {
    match pose {
        SpritePose::Idle => format!("sprites/sprite{}_idle.png", sprite_id),
        SpritePose::Attack => format!("sprites/sprite{}_attack.png", sprite_id),
        SpritePose::Menu => format!("menu_sprites/menusprite{}.png", sprite_id),
    }
}

/// Maximum health for a level before any random bonus.
pub fn max_health_for_level(level: u32) -> u32 {
    BASE_HEALTH + HEALTH_PER_LEVEL * level
}

/// One creature instance: identity plus current combat health.
///
/// Health is kept in `[0, max_health]` by every mutator; a monster at 0 health
/// is fainted.
///
/// Serializes as the persisted `MonsterSaveData` shape, and deserializing
/// runs the same checks as loading a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonsterSaveData", into = "MonsterSaveData")]
pub struct Monster {
    name: String,
    level: u32,
    max_health: u32,
    health: u32,
    sprite_id: u32,
}

impl Monster {
    /// Create a monster at full health with the level-derived maximum.
    pub fn new(name: impl Into<String>, level: u32, sprite_id: u32) -> MonsterResult<Self> {
        Self::with_bonus_health(name, level, sprite_id, 0)
    }

    /// Create a monster at full health whose maximum includes `bonus` on top of
    /// the level-derived value.
    pub fn with_bonus_health(
        name: impl Into<String>,
        level: u32,
        sprite_id: u32,
        bonus: u32,
    ) -> MonsterResult<Self> {
        if level < 1 {
            return Err(MonsterError::InvalidLevel(level));
        }
        if !is_valid_sprite_id(sprite_id) {
            return Err(MonsterError::InvalidSpriteId(sprite_id));
        }

        let max_health = max_health_for_level(level) + bonus;
        Ok(Monster {
            name: name.into(),
            level,
            max_health,
            health: max_health,
            sprite_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn sprite_id(&self) -> u32 {
        self.sprite_id
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// Apply damage, saturating at 0. Returns true if this hit fainted the monster.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_fainted = self.is_fainted();
        self.health = self.health.saturating_sub(damage);
        !was_fainted && self.is_fainted()
    }

    /// Restore health, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Set current health directly, clamped into `[0, max_health]`.
    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(self.max_health);
    }

    pub fn sprite_path(&self, pose: SpritePose) -> String {
        sprite_path(self.sprite_id, pose)
    }

    /// Fraction of health remaining, for health bars.
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health.max(1) as f32
    }

    pub fn to_save_data(&self) -> MonsterSaveData {
        MonsterSaveData {
            name: self.name.clone(),
            level: self.level,
            hp: self.health,
            max_hp: self.max_health,
            sprite_path: self.sprite_path(SpritePose::Idle),
            id: self.sprite_id,
        }
    }
}

impl TryFrom<MonsterSaveData> for Monster {
    type Error = MonsterError;

    /// `sprite_path` is not read back: it is always re-derived from `id`.
    fn try_from(data: MonsterSaveData) -> MonsterResult<Self> {
        if data.level < 1 {
            return Err(MonsterError::InvalidLevel(data.level));
        }
        if !is_valid_sprite_id(data.id) {
            return Err(MonsterError::InvalidSpriteId(data.id));
        }
        if data.hp > data.max_hp {
            return Err(MonsterError::HealthOutOfRange {
                hp: data.hp,
                max_hp: data.max_hp,
            });
        }

        Ok(Monster {
            name: data.name,
            level: data.level,
            max_health: data.max_hp,
            health: data.hp,
            sprite_id: data.id,
        })
    }
}

impl From<Monster> for MonsterSaveData {
    fn from(monster: Monster) -> Self {
        monster.to_save_data()
    }
}
