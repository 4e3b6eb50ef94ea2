use crate::battle::encounter::Encounter;
use crate::battle::state::{ActionResult, BattleAction, BattleState};
use crate::config::BattleConfig;
use crate::monster::Monster;
use crate::party::Party;
use rand::rngs::StdRng;
use rand::SeedableRng;
use schema::EncounterKind;

/// A builder for creating test monsters with common defaults.
///
/// # Example
/// ```ignore
/// let monster = TestMonsterBuilder::new("Pikachu")
///     .with_max_health(30)
///     .with_health(12)
///     .build();
/// ```
pub struct TestMonsterBuilder {
    name: String,
    level: u32,
    sprite_id: u32,
    max_health: Option<u32>,
    health: Option<u32>,
}

impl TestMonsterBuilder {
    /// Creates a new level 1 builder with sprite 1.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: 1,
            sprite_id: 1,
            max_health: None,
            health: None,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_sprite(mut self, sprite_id: u32) -> Self {
        self.sprite_id = sprite_id;
        self
    }

    /// Sets the maximum health. Must be at least the level 1 base of 25.
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    /// Sets the current health. If not set, health will be max.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn build(self) -> Monster {
        let base = crate::monster::max_health_for_level(self.level);
        let bonus = self.max_health.map_or(0, |max| max.saturating_sub(base));

        let mut monster = match Monster::with_bonus_health(&self.name, self.level, self.sprite_id, bonus) {
            Ok(monster) => monster,
            Err(err) => panic!("Failed to build test monster {}: {}", self.name, err),
        };
        if let Some(health) = self.health {
            monster.set_health(health);
        }
        monster
    }
}

/// Player monster `{hp: 30, max_hp: 30}`.
pub fn player_monster() -> Monster {
    TestMonsterBuilder::new("Pikachu").with_sprite(4).with_max_health(30).build()
}

/// Enemy monster `{hp: 25, max_hp: 25}`.
pub fn enemy_monster() -> Monster {
    TestMonsterBuilder::new("Gastly").with_sprite(16).with_max_health(25).build()
}

pub fn single_monster_party() -> Party {
    Party::with_monsters(vec![player_monster()])
}

/// A seeded rng so the player's send-out pick is reproducible.
pub fn predictable_rng() -> StdRng {
    StdRng::seed_from_u64(0xBA77_1E)
}

/// Starts a wild encounter against the standard enemy with default damage (10 / 5).
pub fn start_wild(party: &mut Party) -> Encounter<'_> {
    start_with(party, Some(enemy_monster()), EncounterKind::Wild)
}

pub fn start_with(party: &mut Party, enemy: Option<Monster>, kind: EncounterKind) -> Encounter<'_> {
    match Encounter::start(party, enemy, kind, BattleConfig::default(), &mut predictable_rng()) {
        Ok(encounter) => encounter,
        Err(err) => panic!("Expected encounter to start but got error: {}", err),
    }
}

/// Acknowledges through both send-outs, leaving the encounter in `PlayerTurn`.
pub fn send_out_both(encounter: &mut Encounter<'_>) {
    acknowledge(encounter);
    acknowledge(encounter);
    assert_eq!(encounter.state(), BattleState::PlayerTurn);
}

/// Applies an action and asserts it was accepted.
pub fn assert_applied(encounter: &mut Encounter<'_>, action: BattleAction) -> ActionResult {
    let result = encounter.apply_action(action);
    assert!(
        result.is_applied(),
        "Expected {:?} to be applied but it was rejected: {:?}",
        action,
        result.rejected
    );
    result
}

pub fn acknowledge(encounter: &mut Encounter<'_>) -> ActionResult {
    assert_applied(encounter, BattleAction::Acknowledge)
}
