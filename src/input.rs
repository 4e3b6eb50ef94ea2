use crate::battle::state::BattleAction;
use crate::session::SceneKind;
use std::str::FromStr;

/// A single line of player input, resolved against the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Battle(BattleAction),
    Walk,
    ShowBag,
    Settings,
    Save,
    Quit,
}

impl FromStr for BattleAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "attack" | "a" | "fight" => Ok(BattleAction::Attack),
            "catch" | "c" => Ok(BattleAction::Catch),
            "bag" | "b" => Ok(BattleAction::Bag),
            "pokemon" | "p" => Ok(BattleAction::Pokemon),
            "run" | "r" => Ok(BattleAction::Run),
            "" | "ok" | "continue" => Ok(BattleAction::Acknowledge),
            _ => Err(format!("Unknown battle action: {}", s.trim())),
        }
    }
}

impl Command {
    /// Parse one input line. The same word can mean different things in
    /// different scenes (`bag` opens the bag in the overworld but is a battle
    /// action during an encounter).
    pub fn parse(line: &str, scene: SceneKind) -> Result<Command, String> {
        let word = line.trim().to_lowercase();
        if matches!(word.as_str(), "quit" | "q" | "exit") {
            return Ok(Command::Quit);
        }

        match scene {
            SceneKind::Battle => word.parse::<BattleAction>().map(Command::Battle),
            SceneKind::Menu => match word.as_str() {
                "" | "start" | "play" => Ok(Command::Walk),
                "settings" | "s" => Ok(Command::Settings),
                _ => Err(format!("Unknown menu option: {}", line.trim())),
            },
            SceneKind::Overworld => match word.as_str() {
                "" | "walk" | "w" => Ok(Command::Walk),
                "bag" | "b" => Ok(Command::ShowBag),
                "settings" | "s" => Ok(Command::Settings),
                "save" => Ok(Command::Save),
                _ => Err(format!("Unknown command: {}", line.trim())),
            },
            SceneKind::Settings => match word.as_str() {
                "" | "settings" | "s" | "back" => Ok(Command::Settings),
                _ => Err(format!("Unknown settings option: {}", line.trim())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("attack", BattleAction::Attack)]
    #[case("A", BattleAction::Attack)]
    #[case("  catch ", BattleAction::Catch)]
    #[case("b", BattleAction::Bag)]
    #[case("Pokemon", BattleAction::Pokemon)]
    #[case("r", BattleAction::Run)]
    #[case("", BattleAction::Acknowledge)]
    #[case("ok", BattleAction::Acknowledge)]
    fn test_battle_words(#[case] line: &str, #[case] expected: BattleAction) {
        assert_eq!(
            Command::parse(line, SceneKind::Battle),
            Ok(Command::Battle(expected))
        );
    }

    #[test]
    fn test_bag_depends_on_scene() {
        assert_eq!(
            Command::parse("bag", SceneKind::Overworld),
            Ok(Command::ShowBag)
        );
        assert_eq!(
            Command::parse("bag", SceneKind::Battle),
            Ok(Command::Battle(BattleAction::Bag))
        );
    }

    #[rstest]
    #[case(SceneKind::Menu)]
    #[case(SceneKind::Overworld)]
    #[case(SceneKind::Battle)]
    #[case(SceneKind::Settings)]
    fn test_quit_everywhere(#[case] scene: SceneKind) {
        assert_eq!(Command::parse("quit", scene), Ok(Command::Quit));
    }

    #[test]
    fn test_overworld_commands() {
        assert_eq!(Command::parse("", SceneKind::Overworld), Ok(Command::Walk));
        assert_eq!(Command::parse("save", SceneKind::Overworld), Ok(Command::Save));
        assert_eq!(
            Command::parse("s", SceneKind::Overworld),
            Ok(Command::Settings)
        );
    }

    #[test]
    fn test_unknown_words_are_errors() {
        assert!(Command::parse("dance", SceneKind::Battle).is_err());
        assert!(Command::parse("attack", SceneKind::Overworld).is_err());
        assert!(Command::parse("save", SceneKind::Settings).is_err());
    }
}
