use log::{error, info, warn};
use monster_battle::input::Command;
use monster_battle::presentation::{render_bag, render_encounter};
use monster_battle::{
    EncounterKind, EncounterOutcome, GameConfig, GameSession, Item, Monster, MonsterFactory,
    Party, SceneKind,
};
use rand::Rng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

const SAVE_PATH: &str = "bag.json";

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                println!("Could not load {}: {}", path, e);
                return Ok(());
            }
        },
        None => GameConfig::default(),
    };

    let mut session = GameSession::new(config, starting_party());
    if let Ok(json) = fs::read_to_string(SAVE_PATH) {
        match session.load_bag(&json) {
            Ok(()) => println!("Loaded your bag from {}.", SAVE_PATH),
            Err(e) => warn!("Ignoring save file {}: {}", SAVE_PATH, e),
        }
    }

    println!("=== Monster Battle ===");
    println!("Press Enter to start, 'settings' to adjust, 'quit' to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = next_line(&mut lines)? {
        let command = match Command::parse(&line, session.scene()) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Walk => walk(&mut session, &mut lines)?,
            Command::ShowBag => print!("{}", render_bag(session.party())),
            Command::Settings => {
                session.toggle_settings();
                match session.scene() {
                    SceneKind::Settings => print_settings(session.config()),
                    SceneKind::Menu => println!("Back to the menu."),
                    _ => println!("Back to the overworld."),
                }
            }
            Command::Save => save(&session),
            Command::Battle(_) => {}
        }
        session.update(0.0);
    }

    let tally = session.tally();
    println!(
        "Thanks for playing! Won {} / Lost {} / Fled {}",
        tally.won, tally.lost, tally.fled
    );
    Ok(())
}

fn starting_party() -> Party {
    let factory = MonsterFactory::new();
    let mut party = Party::new();
    match factory.create("Pikachu", 5, 4) {
        Ok(starter) => party.add_monster(starter),
        Err(e) => error!("Could not create starter: {}", e),
    }
    party.add_item(Item::new("Potion", 3, "items/potion.png"));
    party
}

fn next_line<I>(lines: &mut I) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("> ");
    io::stdout().flush()?;
    lines.next().transpose()
}

/// One step in the overworld, which may turn into a wild battle.
fn walk<R, I>(session: &mut GameSession<R>, lines: &mut I) -> io::Result<()>
where
    R: Rng,
    I: Iterator<Item = io::Result<String>>,
{
    if session.scene() == SceneKind::Menu {
        session.change_scene(SceneKind::Overworld);
        println!("You step into the tall grass. Press Enter to walk, 'bag', 'save' or 'settings'.");
        return Ok(());
    }

    let enemy = match session.roll_wild_encounter() {
        Ok(Some(enemy)) => enemy,
        Ok(None) => {
            println!("You walk on. Nothing here.");
            return Ok(());
        }
        Err(e) => {
            error!("Wild encounter roll failed: {}", e);
            return Ok(());
        }
    };

    match run_battle(session, enemy, lines)? {
        Some(outcome) => {
            session.finish_encounter(outcome);
            println!("Battle over: you {}.", outcome);
        }
        None => session.change_scene(SceneKind::Overworld),
    }
    Ok(())
}

/// Drive one encounter from the console. Returns `None` if it could not start
/// or input ran out before it was left.
fn run_battle<R, I>(
    session: &mut GameSession<R>,
    enemy: Monster,
    lines: &mut I,
) -> io::Result<Option<EncounterOutcome>>
where
    R: Rng,
    I: Iterator<Item = io::Result<String>>,
{
    let mut encounter = match session.start_encounter(Some(enemy), EncounterKind::Wild) {
        Ok(encounter) => encounter,
        Err(e) => {
            println!("{}", e);
            return Ok(None);
        }
    };

    print!("{}", render_encounter(&encounter));
    while let Some(line) = next_line(lines)? {
        let action = match Command::parse(&line, SceneKind::Battle) {
            Ok(Command::Battle(action)) => action,
            Ok(Command::Quit) => return Ok(None),
            Ok(_) => continue,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let result = encounter.apply_action(action);
        if let Some(reason) = &result.rejected {
            println!("{}", reason);
        }
        for message in result.messages() {
            info!("{}", message);
        }
        if let Some(outcome) = result.outcome {
            return Ok(Some(outcome));
        }

        encounter.update(0.0);
        print!("{}", render_encounter(&encounter));
    }

    Ok(None)
}

fn print_settings(config: &GameConfig) {
    println!("--- Settings ---");
    let muted = if config.muted { " (muted)" } else { "" };
    println!("  Volume: {:.0}%{}", config.audio_volume * 100.0, muted);
    println!("  Online: {}", if config.online { "on" } else { "off" });
    println!(
        "  Damage: you {} / foe {}",
        config.battle.player_damage, config.battle.enemy_damage
    );
    println!("Press Enter to go back.");
}

fn save(session: &GameSession<impl Rng>) {
    match session.save_bag() {
        Ok(json) => match fs::write(SAVE_PATH, json) {
            Ok(()) => println!("Saved to {}.", SAVE_PATH),
            Err(e) => println!("Could not write {}: {}", SAVE_PATH, e),
        },
        Err(e) => println!("Could not save: {}", e),
    }
}
