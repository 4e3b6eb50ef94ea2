use crate::battle::sprites::CombatantSprite;
use crate::battle::state::{
    ActionResult, BattleAction, BattleEvent, BattleState, Dialogue, EventBus, Side,
};
use crate::config::BattleConfig;
use crate::errors::{ActionError, EncounterError, EncounterResult};
use crate::monster::{Monster, SpritePose};
use crate::party::Party;
use log::{debug, info, warn};
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::{EncounterKind, EncounterOutcome};

pub const CONTINUE_HINT: &str = "Press Enter to continue";
pub const ACTION_HINT: &str = "Attack / Catch / Bag / Pokemon / Run";
pub const LEAVE_HINT: &str = "Press Enter to leave";

/// One battle between the player's party and a single enemy monster.
///
/// The encounter borrows the party for its whole lifetime: damage is applied to
/// party members in place and a caught monster is appended. Every fight gets a
/// fresh `Encounter`; once it has been left (`outcome()` is set) it ignores all
/// further input.
#[derive(Debug)]
pub struct Encounter<'p> {
    party: &'p mut Party,
    kind: EncounterKind,
    config: BattleConfig,
    player_active: Option<usize>,
    enemy_active: Option<Monster>,
    pending_player_switch: Option<usize>,
    pending_enemy_switch: Option<Monster>,
    state: BattleState,
    next_state: Option<BattleState>,
    dialogue: Dialogue,
    player_sprite: Option<CombatantSprite>,
    enemy_sprite: Option<CombatantSprite>,
    outcome: Option<EncounterOutcome>,
}

impl<'p> Encounter<'p> {
    /// Set up an encounter against `enemy`, staging both send-outs.
    ///
    /// The player's monster is drawn uniformly from the non-fainted party
    /// members. Fails if there is none.
    pub fn start<R: Rng + ?Sized>(
        party: &'p mut Party,
        enemy: Option<Monster>,
        kind: EncounterKind,
        config: BattleConfig,
        rng: &mut R,
    ) -> EncounterResult<Self> {
        let player_pick = party
            .eligible_monsters()
            .choose(rng)
            .copied()
            .ok_or(EncounterError::NoEligibleMonster)?;

        let opening = match (&enemy, kind) {
            (Some(_), EncounterKind::Wild) => "Something stirs in the tall grass!",
            (Some(_), EncounterKind::Trainer) => "A trainer wants to battle!",
            (None, _) => "Get ready to battle!",
        };

        info!(
            "Starting {} encounter against {}",
            kind,
            enemy.as_ref().map_or("nobody", Monster::name)
        );

        Ok(Encounter {
            party,
            kind,
            config,
            player_active: None,
            enemy_active: None,
            pending_player_switch: Some(player_pick),
            pending_enemy_switch: enemy,
            state: BattleState::Busy,
            next_state: None,
            dialogue: Dialogue::new(opening, Some(CONTINUE_HINT)),
            player_sprite: None,
            enemy_sprite: None,
            outcome: None,
        })
    }

    // --- Queries for the presentation layer ---

    pub fn kind(&self) -> EncounterKind {
        self.kind
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn next_state(&self) -> Option<BattleState> {
        self.next_state
    }

    pub fn dialogue(&self) -> &Dialogue {
        &self.dialogue
    }

    pub fn player_monster(&self) -> Option<&Monster> {
        self.active(Side::Player)
    }

    pub fn enemy_monster(&self) -> Option<&Monster> {
        self.active(Side::Enemy)
    }

    pub fn player_sprite(&self) -> Option<&str> {
        self.player_sprite.as_ref().map(CombatantSprite::selector)
    }

    pub fn enemy_sprite(&self) -> Option<&str> {
        self.enemy_sprite.as_ref().map(CombatantSprite::selector)
    }

    pub fn has_pending_send_out(&self) -> bool {
        self.pending_player_switch.is_some() || self.pending_enemy_switch.is_some()
    }

    pub fn party(&self) -> &Party {
        self.party
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        self.outcome
    }

    // --- Driving the state machine ---

    /// Hand one player action to the encounter.
    ///
    /// Actions that don't fit the current state are ignored and reported in
    /// `ActionResult::rejected`; nothing is mutated in that case.
    pub fn apply_action(&mut self, action: BattleAction) -> ActionResult {
        let mut bus = EventBus::new();

        let rejected = if self.outcome.is_some() {
            Some(ActionError::EncounterOver)
        } else {
            match (self.state, action) {
                (BattleState::Busy, BattleAction::Acknowledge) => {
                    self.resolve_busy(&mut bus);
                    None
                }
                (BattleState::Won | BattleState::Lost, BattleAction::Acknowledge) => {
                    self.leave(&mut bus);
                    None
                }
                (BattleState::PlayerTurn, BattleAction::Attack) => {
                    self.resolve_attack(Side::Player, &mut bus).err()
                }
                (BattleState::PlayerTurn, BattleAction::Catch) => self.catch(&mut bus).err(),
                (BattleState::PlayerTurn, BattleAction::Run) => {
                    self.flee(&mut bus);
                    None
                }
                (BattleState::PlayerTurn, BattleAction::Bag | BattleAction::Pokemon) => {
                    bus.push(BattleEvent::ActionNotWired { action });
                    None
                }
                (state, action) => Some(ActionError::InvalidAction { action, state }),
            }
        };

        if let Some(reason) = &rejected {
            debug!("Ignoring {:?}: {}", action, reason);
        }

        ActionResult {
            events: bus.into_events(),
            new_state: self.state,
            rejected,
            outcome: self.outcome,
        }
    }

    /// Per-frame tick. The enemy acts as soon as its turn is entered, so this
    /// only has work to do if the encounter was somehow left sitting in
    /// `EnemyTurn`.
    pub fn update(&mut self, _dt: f32) -> Vec<BattleEvent> {
        let mut bus = EventBus::new();
        if self.outcome.is_none() && self.state == BattleState::EnemyTurn {
            self.resolve_enemy_turn(&mut bus);
        }
        bus.into_events()
    }

    // --- Internal transitions ---

    fn transition(&mut self, to: BattleState, bus: &mut EventBus) {
        let from = self.state;
        if from != to {
            debug!("Battle state {:?} -> {:?}", from, to);
            self.state = to;
            bus.push(BattleEvent::StateChanged { from, to });
        }
    }

    fn resolve_busy(&mut self, bus: &mut EventBus) {
        // The enemy always comes out before the player's monster.
        if let Some(enemy) = self.pending_enemy_switch.take() {
            self.send_out_enemy(enemy, bus);
            if self.pending_player_switch.is_none() {
                self.next_state = None;
                self.enter_player_turn(bus);
            }
            return;
        }

        if let Some(index) = self.pending_player_switch.take() {
            self.send_out_player(index, bus);
            self.next_state = None;
            self.transition(BattleState::PlayerTurn, bus);
            return;
        }

        let next = self.next_state.take().unwrap_or(BattleState::PlayerTurn);
        self.reset_poses();
        match next {
            BattleState::PlayerTurn => self.enter_player_turn(bus),
            BattleState::EnemyTurn => {
                self.transition(BattleState::EnemyTurn, bus);
                self.resolve_enemy_turn(bus);
            }
            other => self.transition(other, bus),
        }
    }

    fn enter_player_turn(&mut self, bus: &mut EventBus) {
        let prompt = match self.player_monster() {
            Some(monster) => format!("What will {} do?", monster.name()),
            None => "What will you do?".to_string(),
        };
        self.dialogue = Dialogue::new(prompt, Some(ACTION_HINT));
        self.transition(BattleState::PlayerTurn, bus);
    }

    fn send_out_enemy(&mut self, enemy: Monster, bus: &mut EventBus) {
        let event = BattleEvent::EnemySentOut {
            kind: self.kind,
            name: enemy.name().to_string(),
        };
        if let Some(text) = event.format() {
            self.dialogue = Dialogue::new(text, Some(CONTINUE_HINT));
        }
        bus.push(event);

        self.enemy_sprite = Some(CombatantSprite::idle(&enemy));
        self.enemy_active = Some(enemy);
    }

    fn send_out_player(&mut self, index: usize, bus: &mut EventBus) {
        let Some(monster) = self.party.monster(index) else {
            warn!("Staged party slot {} no longer exists", index);
            return;
        };

        let name = monster.name().to_string();
        self.player_sprite = Some(CombatantSprite::idle(monster));
        self.player_active = Some(index);
        self.dialogue = Dialogue::new(format!("Go! {}!", name), Some(ACTION_HINT));
        bus.push(BattleEvent::PlayerSentOut { name });
    }

    fn resolve_enemy_turn(&mut self, bus: &mut EventBus) {
        if let Err(reason) = self.resolve_attack(Side::Enemy, bus) {
            // Nothing to attack with or against; hand the turn back.
            warn!("Enemy turn skipped: {}", reason);
            self.next_state = None;
            self.enter_player_turn(bus);
        }
    }

    /// One attack from `attacker` against the other side's active monster.
    fn resolve_attack(&mut self, attacker: Side, bus: &mut EventBus) -> Result<(), ActionError> {
        let damage = self.damage_for(attacker);
        let attacker_name = self
            .active(attacker)
            .ok_or(ActionError::NoActiveMonster(attacker))?
            .name()
            .to_string();

        let defender_side = attacker.opponent();
        let defender = self
            .active_mut(defender_side)
            .ok_or(ActionError::NoActiveMonster(defender_side))?;
        defender.take_damage(damage);
        let defender_name = defender.name().to_string();
        let remaining_health = defender.health();
        let fainted = defender.is_fainted();

        self.set_pose(attacker, SpritePose::Attack);
        bus.push(BattleEvent::Attacked {
            attacker_side: attacker,
            attacker: attacker_name.clone(),
            defender: defender_name.clone(),
            damage,
            remaining_health,
        });

        if fainted {
            bus.push(BattleEvent::MonsterFainted {
                side: defender_side,
                name: defender_name.clone(),
            });
            self.next_state = None;
            let (text, terminal) = match defender_side {
                Side::Enemy => (format!("{} fainted! You won!", defender_name), BattleState::Won),
                Side::Player => (format!("{} fainted! You lost...", defender_name), BattleState::Lost),
            };
            self.dialogue = Dialogue::new(text, Some(LEAVE_HINT));
            self.transition(terminal, bus);
        } else {
            self.dialogue = Dialogue::new(
                format!("{} attacked! {} took {} damage.", attacker_name, defender_name, damage),
                Some(CONTINUE_HINT),
            );
            self.next_state = Some(match attacker {
                Side::Player => BattleState::EnemyTurn,
                Side::Enemy => BattleState::PlayerTurn,
            });
            self.transition(BattleState::Busy, bus);
        }

        Ok(())
    }

    fn catch(&mut self, bus: &mut EventBus) -> Result<(), ActionError> {
        if !self.kind.allows_catch() {
            return Err(ActionError::CatchNotAllowed);
        }
        let caught = self
            .enemy_active
            .clone()
            .ok_or(ActionError::NoActiveMonster(Side::Enemy))?;

        let name = caught.name().to_string();
        self.party.add_monster(caught);
        info!("Caught {} (party size {})", name, self.party.len());

        bus.push(BattleEvent::MonsterCaught {
            name: name.clone(),
            party_size: self.party.len(),
        });
        self.next_state = None;
        self.dialogue = Dialogue::new(format!("Gotcha! {} was caught!", name), Some(LEAVE_HINT));
        self.transition(BattleState::Won, bus);
        Ok(())
    }

    fn flee(&mut self, bus: &mut EventBus) {
        info!("Fled from {} encounter", self.kind);
        bus.push(BattleEvent::Fled);
        self.dialogue = Dialogue::new("Got away safely!", None);
        self.finish(EncounterOutcome::Fled, bus);
    }

    fn leave(&mut self, bus: &mut EventBus) {
        let outcome = match self.state {
            BattleState::Lost => EncounterOutcome::Lost,
            _ => EncounterOutcome::Won,
        };
        info!("Leaving encounter: {}", outcome);
        self.finish(outcome, bus);
    }

    fn finish(&mut self, outcome: EncounterOutcome, bus: &mut EventBus) {
        self.outcome = Some(outcome);
        self.next_state = None;
        bus.push(BattleEvent::EncounterEnded { outcome });
    }

    // --- Helpers ---

    fn damage_for(&self, attacker: Side) -> u32 {
        match attacker {
            Side::Player => self.config.player_damage,
            Side::Enemy => self.config.enemy_damage,
        }
    }

    fn active(&self, side: Side) -> Option<&Monster> {
        match side {
            Side::Player => self.player_active.and_then(|index| self.party.monster(index)),
            Side::Enemy => self.enemy_active.as_ref(),
        }
    }

    fn active_mut(&mut self, side: Side) -> Option<&mut Monster> {
        match side {
            Side::Player => match self.player_active {
                Some(index) => self.party.monster_mut(index),
                None => None,
            },
            Side::Enemy => self.enemy_active.as_mut(),
        }
    }

    fn set_pose(&mut self, side: Side, pose: SpritePose) {
        let sprite = match side {
            Side::Player => self.player_sprite.as_mut(),
            Side::Enemy => self.enemy_sprite.as_mut(),
        };
        if let Some(sprite) = sprite {
            sprite.set_pose(pose);
        }
    }

    fn reset_poses(&mut self) {
        if self.enemy_active.is_some() {
            self.set_pose(Side::Enemy, SpritePose::Idle);
        }
        if self.player_active.is_some() {
            self.set_pose(Side::Player, SpritePose::Idle);
        }
    }
}
