use schema::{EncounterKind, EncounterOutcome};
use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleState {
    PlayerTurn,
    EnemyTurn,
    Busy, // A message or animation beat waiting for Acknowledge
    Won,
    Lost,
}

impl BattleState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleState::Won | BattleState::Lost)
    }
}

/// Discrete inputs the presentation layer can hand to an encounter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BattleAction {
    Attack,
    Catch,
    // Recognized during the player's turn but not wired to item use yet.
    Bag,
    // Recognized during the player's turn but not wired to switching yet.
    Pokemon,
    Run,
    Acknowledge,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// The message currently shown to the player, with an optional input hint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Dialogue {
    pub text: String,
    pub hint: Option<String>,
}

impl Dialogue {
    pub fn new(text: impl Into<String>, hint: Option<&str>) -> Self {
        Dialogue {
            text: text.into(),
            hint: hint.map(str::to_string),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    StateChanged {
        from: BattleState,
        to: BattleState,
    },
    EnemySentOut {
        kind: EncounterKind,
        name: String,
    },
    PlayerSentOut {
        name: String,
    },
    Attacked {
        attacker_side: Side,
        attacker: String,
        defender: String,
        damage: u32,
        remaining_health: u32,
    },
    MonsterFainted {
        side: Side,
        name: String,
    },
    MonsterCaught {
        name: String,
        party_size: usize,
    },
    ActionNotWired {
        action: BattleAction,
    },
    Fled,
    EncounterEnded {
        outcome: EncounterOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for bookkeeping events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::StateChanged { .. } => None,
            BattleEvent::EnemySentOut { kind, name } => match kind {
                EncounterKind::Wild => Some(format!("A wild {} appeared!", name)),
                EncounterKind::Trainer => Some(format!("The trainer sent out {}!", name)),
            },
            BattleEvent::PlayerSentOut { name } => Some(format!("Go! {}!", name)),
            BattleEvent::Attacked { attacker, defender, damage, .. } => {
                Some(format!("{} attacked! {} took {} damage.", attacker, defender, damage))
            }
            BattleEvent::MonsterFainted { name, .. } => Some(format!("{} fainted!", name)),
            BattleEvent::MonsterCaught { name, .. } => Some(format!("Gotcha! {} was caught!", name)),
            BattleEvent::ActionNotWired { action } => {
                Some(format!("{:?} isn't available yet.", action))
            }
            BattleEvent::Fled => Some("Got away safely!".to_string()),
            BattleEvent::EncounterEnded { outcome } => match outcome {
                EncounterOutcome::Won => Some("You won the battle!".to_string()),
                EncounterOutcome::Lost => Some("You lost the battle...".to_string()),
                EncounterOutcome::Fled => None, // Already reported by Fled
            },
        }
    }
}

/// Event bus for collecting the events produced by one call into an encounter.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Result of handing one action to an encounter
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    pub events: Vec<BattleEvent>,
    pub new_state: BattleState,
    /// Why the action was ignored, if it was. Ignored actions change nothing.
    pub rejected: Option<ActionError>,
    /// Set once the encounter has been left.
    pub outcome: Option<EncounterOutcome>,
}

impl ActionResult {
    pub fn is_applied(&self) -> bool {
        self.rejected.is_none()
    }

    pub fn encounter_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The user-visible lines for this result's events, in order.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }
}
