use crate::errors::{SaveDataError, SaveDataResult};
use crate::monster::Monster;
use schema::{BagSaveData, ItemSaveData};
use serde::{Deserialize, Serialize};

/// A stack of one consumable. Battles only read items; using them is not wired yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub count: u32,
    pub sprite_path: String,
}

impl Item {
    pub fn new(name: impl Into<String>, count: u32, sprite_path: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            count,
            sprite_path: sprite_path.into(),
        }
    }
}

impl From<ItemSaveData> for Item {
    fn from(data: ItemSaveData) -> Self {
        Item {
            name: data.name,
            count: data.count,
            sprite_path: data.sprite_path,
        }
    }
}

impl From<&Item> for ItemSaveData {
    fn from(item: &Item) -> Self {
        ItemSaveData {
            name: item.name.clone(),
            count: item.count,
            sprite_path: item.sprite_path.clone(),
        }
    }
}

/// The player's bag: owned monsters and items, both in acquisition order.
///
/// Entries are only ever appended or mutated in place. Indices handed out by
/// [`Party::eligible_monsters`] stay valid for the life of the party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BagSaveData", into = "BagSaveData")]
pub struct Party {
    monsters: Vec<Monster>,
    items: Vec<Item>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_monsters(monsters: Vec<Monster>) -> Self {
        Party {
            monsters,
            items: Vec::new(),
        }
    }

    pub fn add_monster(&mut self, monster: Monster) {
        self.monsters.push(monster);
    }

    /// Add an item, merging into an existing stack with the same name.
    pub fn add_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => existing.count = existing.count.saturating_add(item.count),
            None => self.items.push(item),
        }
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn monster(&self, index: usize) -> Option<&Monster> {
        self.monsters.get(index)
    }

    pub fn monster_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.monsters.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Indices of monsters that can still be sent into battle.
    pub fn eligible_monsters(&self) -> Vec<usize> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, monster)| !monster.is_fainted())
            .map(|(index, _)| index)
            .collect()
    }

    /// Per-frame hook for bag-side effects. Nothing ticks over time yet.
    pub fn update(&mut self, _dt: f32) {}

    pub fn to_save_data(&self) -> BagSaveData {
        BagSaveData {
            monsters: self.monsters.iter().map(Monster::to_save_data).collect(),
            items: self.items.iter().map(ItemSaveData::from).collect(),
        }
    }

    pub fn from_save_data(data: BagSaveData) -> SaveDataResult<Self> {
        let monsters = data
            .monsters
            .into_iter()
            .enumerate()
            .map(|(index, monster)| {
                Monster::try_from(monster).map_err(|error| SaveDataError::InvalidMonster { index, error })
            })
            .collect::<SaveDataResult<Vec<_>>>()?;

        Ok(Party {
            monsters,
            items: data.items.into_iter().map(Item::from).collect(),
        })
    }

    pub fn to_json(&self) -> SaveDataResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_save_data())?)
    }

    pub fn from_json(json: &str) -> SaveDataResult<Self> {
        let data: BagSaveData = serde_json::from_str(json)?;
        Self::from_save_data(data)
    }
}

impl TryFrom<BagSaveData> for Party {
    type Error = SaveDataError;

    fn try_from(data: BagSaveData) -> SaveDataResult<Self> {
        Party::from_save_data(data)
    }
}

impl From<Party> for BagSaveData {
    fn from(party: Party) -> Self {
        party.to_save_data()
    }
}
