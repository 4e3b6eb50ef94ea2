use serde::{Deserialize, Serialize};

/// A monster exactly as it is embedded in save files.
///
/// The field names and types are fixed by existing save data: `id` is the
/// sprite catalog index and `sprite_path` is the idle sprite derived from it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonsterSaveData {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub sprite_path: String,
    pub id: u32,
}

/// A stack of consumables as stored in the bag section of a save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemSaveData {
    pub name: String,
    pub count: u32,
    pub sprite_path: String,
}

/// The `bag` section of a save: owned monsters and items, in acquisition order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BagSaveData {
    #[serde(default)]
    pub monsters: Vec<MonsterSaveData>,
    #[serde(default)]
    pub items: Vec<ItemSaveData>,
}
