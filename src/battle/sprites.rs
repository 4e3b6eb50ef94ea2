use crate::monster::{sprite_path, Monster, SpritePose};

/// The sprite currently shown for one side of the field.
///
/// The asset path is derived from the combatant's sprite id and pose whenever
/// either changes, so the presentation layer only ever reads `selector()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantSprite {
    sprite_id: u32,
    pose: SpritePose,
    path: String,
}

impl CombatantSprite {
    pub fn idle(monster: &Monster) -> Self {
        let sprite_id = monster.sprite_id();
        CombatantSprite {
            sprite_id,
            pose: SpritePose::Idle,
            path: sprite_path(sprite_id, SpritePose::Idle),
        }
    }

    pub fn set_pose(&mut self, pose: SpritePose) {
        if self.pose != pose {
            self.pose = pose;
            self.path = sprite_path(self.sprite_id, pose);
        }
    }

    pub fn pose(&self) -> SpritePose {
        self.pose
    }

    pub fn sprite_id(&self) -> u32 {
        self.sprite_id
    }

    pub fn selector(&self) -> &str {
        &self.path
    }
}
