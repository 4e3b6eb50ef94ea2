use crate::battle::encounter::Encounter;
use crate::config::GameConfig;
use crate::errors::{EncounterResult, MonsterResult, SaveDataResult};
use crate::monster::Monster;
use crate::monster_factory::MonsterFactory;
use crate::party::Party;
use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use schema::{EncounterKind, EncounterOutcome};
use serde::{Deserialize, Serialize};

/// The closed set of scenes the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    Menu,
    Overworld,
    Battle,
    Settings,
}

/// Running totals of how encounters ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterTally {
    pub won: u32,
    pub lost: u32,
    pub fled: u32,
}

impl EncounterTally {
    fn record(&mut self, outcome: EncounterOutcome) {
        match outcome {
            EncounterOutcome::Won => self.won += 1,
            EncounterOutcome::Lost => self.lost += 1,
            EncounterOutcome::Fled => self.fled += 1,
        }
    }
}

/// One play session: the player's party, the startup configuration, the
/// shared monster factory and the active scene.
///
/// Encounters borrow the session's party. Start one with
/// [`GameSession::start_encounter`], drive it to completion, drop it, then
/// report its outcome with [`GameSession::finish_encounter`].
#[derive(Debug)]
pub struct GameSession<R = ThreadRng> {
    config: GameConfig,
    party: Party,
    factory: MonsterFactory<R>,
    scene: SceneKind,
    /// Scene the settings overlay returns to when closed.
    settings_return: SceneKind,
    tally: EncounterTally,
}

impl GameSession<ThreadRng> {
    pub fn new(config: GameConfig, party: Party) -> Self {
        Self::with_factory(config, party, MonsterFactory::new())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_factory(config: GameConfig, party: Party, factory: MonsterFactory<R>) -> Self {
        GameSession {
            config,
            party,
            factory,
            scene: SceneKind::Menu,
            settings_return: SceneKind::Menu,
            tally: EncounterTally::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    pub fn tally(&self) -> EncounterTally {
        self.tally
    }

    pub fn factory_mut(&mut self) -> &mut MonsterFactory<R> {
        &mut self.factory
    }

    /// Leave the current scene and enter `scene`. Re-entering the current scene is a no-op.
    pub fn change_scene(&mut self, scene: SceneKind) {
        if self.scene == scene {
            return;
        }
        debug!("Exit scene {:?}", self.scene);
        self.scene = scene;
        debug!("Enter scene {:?}", scene);
    }

    /// Open the settings overlay from the menu or overworld, or close it and
    /// go back to whichever of those opened it.
    pub fn toggle_settings(&mut self) {
        match self.scene {
            SceneKind::Settings => self.change_scene(self.settings_return),
            SceneKind::Menu | SceneKind::Overworld => {
                self.settings_return = self.scene;
                self.change_scene(SceneKind::Settings);
            }
            SceneKind::Battle => debug!("Settings overlay is not available during battle"),
        }
    }

    /// Per-frame tick for everything the session owns outside of battle.
    pub fn update(&mut self, dt: f32) {
        self.party.update(dt);
    }

    /// Roll for a wild monster after an overworld step.
    pub fn roll_wild_encounter(&mut self) -> MonsterResult<Option<Monster>> {
        if self.scene != SceneKind::Overworld {
            return Ok(None);
        }
        let chance = self.config.wild_encounter_chance;
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        if !self.factory.rng_mut().random_bool(chance) {
            return Ok(None);
        }
        let levels = self.config.wild_levels();
        self.factory.create_random(levels).map(Some)
    }

    /// Enter the battle scene against `enemy`.
    ///
    /// On failure the scene is left unchanged.
    pub fn start_encounter(
        &mut self,
        enemy: Option<Monster>,
        kind: EncounterKind,
    ) -> EncounterResult<Encounter<'_>> {
        let encounter = Encounter::start(
            &mut self.party,
            enemy,
            kind,
            self.config.battle,
            self.factory.rng_mut(),
        )?;
        if self.scene != SceneKind::Battle {
            debug!("Exit scene {:?}", self.scene);
            self.scene = SceneKind::Battle;
            debug!("Enter scene {:?}", SceneKind::Battle);
        }
        Ok(encounter)
    }

    /// Return to the overworld after an encounter has been left.
    pub fn finish_encounter(&mut self, outcome: EncounterOutcome) {
        info!("Encounter finished: {}", outcome);
        self.tally.record(outcome);
        self.change_scene(SceneKind::Overworld);
    }

    pub fn save_bag(&self) -> SaveDataResult<String> {
        self.party.to_json()
    }

    /// Replace the party with one loaded from save JSON. The current party is
    /// kept if the save is invalid.
    pub fn load_bag(&mut self, json: &str) -> SaveDataResult<()> {
        self.party = Party::from_json(json).inspect_err(|e| warn!("Rejected bag save: {}", e))?;
        info!("Loaded bag with {} monsters", self.party.len());
        Ok(())
    }
}
