use serde::{Deserialize, Serialize};
use std::fmt;

/// Who the player is fighting. Only wild monsters can be caught.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterKind {
    Wild,
    Trainer,
}

impl EncounterKind {
    pub fn allows_catch(self) -> bool {
        matches!(self, EncounterKind::Wild)
    }
}

impl fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            EncounterKind::Wild => "wild",
            EncounterKind::Trainer => "trainer",
        };
        write!(f, "{}", display_name)
    }
}

/// How an encounter ended, reported to the owning session when it is left.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterOutcome {
    Won,
    Lost,
    Fled,
}

impl fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            EncounterOutcome::Won => "won",
            EncounterOutcome::Lost => "lost",
            EncounterOutcome::Fled => "fled",
        };
        write!(f, "{}", display_name)
    }
}
