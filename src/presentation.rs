//! Text rendering of battle and bag state for the terminal front end.
//!
//! Nothing here mutates game state; every function is a view over the
//! records the engine exposes.

use crate::battle::encounter::Encounter;
use crate::monster::Monster;
use crate::party::Party;

/// Number of cells in a rendered HP bar.
pub const HP_BAR_WIDTH: usize = 20;

/// Draw an HP bar of `HP_BAR_WIDTH` cells, filled in proportion to `ratio`.
pub fn hp_bar(ratio: f32) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * HP_BAR_WIDTH as f32).round() as usize).min(HP_BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(HP_BAR_WIDTH - filled))
}

/// One-line banner: name, HP bar, level and `hp/max_hp`.
pub fn monster_banner(monster: &Monster) -> String {
    format!(
        "{:<12} {} Lv{:<3} {}/{}",
        monster.name(),
        hp_bar(monster.health_ratio()),
        monster.level(),
        monster.health(),
        monster.max_health()
    )
}

pub fn render_encounter(encounter: &Encounter<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("--- {} battle ---\n", encounter.kind()));
    match encounter.enemy_monster() {
        Some(enemy) => {
            output.push_str(&format!("Foe:  {}\n", monster_banner(enemy)));
            if let Some(sprite) = encounter.enemy_sprite() {
                output.push_str(&format!("      ({})\n", sprite));
            }
        }
        None => output.push_str("Foe:  -\n"),
    }
    match encounter.player_monster() {
        Some(player) => {
            output.push_str(&format!("You:  {}\n", monster_banner(player)));
            if let Some(sprite) = encounter.player_sprite() {
                output.push_str(&format!("      ({})\n", sprite));
            }
        }
        None => output.push_str("You:  -\n"),
    }

    let dialogue = encounter.dialogue();
    output.push('\n');
    output.push_str(&dialogue.text);
    output.push('\n');
    if let Some(hint) = &dialogue.hint {
        output.push_str(&format!("> {}\n", hint));
    }

    output
}

/// Bag overview: every monster banner followed by the item stacks.
pub fn render_bag(party: &Party) -> String {
    let mut output = String::from("--- Bag ---\n");

    if party.is_empty() {
        output.push_str("No monsters yet.\n");
    }
    for (i, monster) in party.monsters().iter().enumerate() {
        let marker = if monster.is_fainted() { " (fainted)" } else { "" };
        output.push_str(&format!("{}. {}{}\n", i + 1, monster_banner(monster), marker));
    }

    if !party.items().is_empty() {
        output.push_str("Items:\n");
        for item in party.items() {
            output.push_str(&format!("  {} x{}\n", item.name, item.count));
        }
    }

    output
}
