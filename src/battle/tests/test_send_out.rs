#[cfg(test)]
mod tests {
    use crate::battle::encounter::{Encounter, ACTION_HINT, CONTINUE_HINT};
    use crate::battle::state::{BattleEvent, BattleState};
    use crate::battle::tests::common::{
        acknowledge, enemy_monster, player_monster, single_monster_party, start_wild, start_with,
        TestMonsterBuilder,
    };
    use crate::config::BattleConfig;
    use crate::errors::EncounterError;
    use crate::party::Party;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use schema::EncounterKind;

    #[test]
    fn test_encounter_starts_busy_with_both_send_outs_pending() {
        let mut party = single_monster_party();
        let encounter = start_wild(&mut party);

        assert_eq!(encounter.state(), BattleState::Busy);
        assert_eq!(encounter.next_state(), None);
        assert!(encounter.has_pending_send_out());
        assert!(encounter.player_monster().is_none());
        assert!(encounter.enemy_monster().is_none());
        assert_eq!(encounter.dialogue().hint.as_deref(), Some(CONTINUE_HINT));
        assert!(!encounter.is_over());
    }

    #[test]
    fn test_enemy_is_sent_out_before_player() {
        let mut party = single_monster_party();
        let mut encounter = start_wild(&mut party);

        let first = acknowledge(&mut encounter);
        assert_eq!(
            first.events,
            vec![BattleEvent::EnemySentOut {
                kind: EncounterKind::Wild,
                name: "Gastly".to_string()
            }]
        );
        assert_eq!(first.new_state, BattleState::Busy);
        assert_eq!(encounter.enemy_monster(), Some(&enemy_monster()));
        assert!(encounter.player_monster().is_none());
        assert_eq!(encounter.dialogue().text, "A wild Gastly appeared!");

        let second = acknowledge(&mut encounter);
        assert_eq!(
            second.events,
            vec![
                BattleEvent::PlayerSentOut {
                    name: "Pikachu".to_string()
                },
                BattleEvent::StateChanged {
                    from: BattleState::Busy,
                    to: BattleState::PlayerTurn
                },
            ]
        );
        assert_eq!(encounter.player_monster(), Some(&player_monster()));
        assert_eq!(encounter.dialogue().text, "Go! Pikachu!");
        assert_eq!(encounter.dialogue().hint.as_deref(), Some(ACTION_HINT));
        assert!(!encounter.has_pending_send_out());
    }

    #[test]
    fn test_send_out_order_holds_for_every_seed() {
        for seed in 0..32 {
            let mut party = Party::with_monsters(vec![player_monster(), player_monster(), player_monster()]);
            let mut encounter = Encounter::start(
                &mut party,
                Some(enemy_monster()),
                EncounterKind::Wild,
                BattleConfig::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

            let mut events = Vec::new();
            while encounter.state() == BattleState::Busy {
                events.extend(acknowledge(&mut encounter).events);
            }

            let enemy_at = events
                .iter()
                .position(|e| matches!(e, BattleEvent::EnemySentOut { .. }))
                .expect("enemy should be sent out");
            let player_at = events
                .iter()
                .position(|e| matches!(e, BattleEvent::PlayerSentOut { .. }))
                .expect("player should be sent out");
            assert!(enemy_at < player_at, "seed {} sent the player out first", seed);
        }
    }

    #[test]
    fn test_trainer_send_out_message() {
        let mut party = single_monster_party();
        let mut encounter = start_with(&mut party, Some(enemy_monster()), EncounterKind::Trainer);

        acknowledge(&mut encounter);
        assert_eq!(encounter.dialogue().text, "The trainer sent out Gastly!");
    }

    #[test]
    fn test_without_enemy_only_player_is_sent_out() {
        let mut party = single_monster_party();
        let mut encounter = start_with(&mut party, None, EncounterKind::Wild);

        let result = acknowledge(&mut encounter);
        assert_eq!(result.new_state, BattleState::PlayerTurn);
        assert!(encounter.enemy_monster().is_none());
        assert!(encounter.player_monster().is_some());
    }

    #[test]
    fn test_empty_party_cannot_start() {
        let mut party = Party::new();
        let result = Encounter::start(
            &mut party,
            Some(enemy_monster()),
            EncounterKind::Wild,
            BattleConfig::default(),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(result.err(), Some(EncounterError::NoEligibleMonster));
    }

    #[test]
    fn test_all_fainted_party_cannot_start() {
        let fainted = TestMonsterBuilder::new("Down").with_health(0).build();
        let mut party = Party::with_monsters(vec![fainted.clone(), fainted]);
        let result = Encounter::start(
            &mut party,
            Some(enemy_monster()),
            EncounterKind::Trainer,
            BattleConfig::default(),
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(result.err(), Some(EncounterError::NoEligibleMonster));
    }

    #[test]
    fn test_only_non_fainted_members_are_sent_out() {
        for seed in 0..32 {
            let fainted = TestMonsterBuilder::new("Down").with_health(0).build();
            let healthy = TestMonsterBuilder::new("Up").build();
            let mut party = Party::with_monsters(vec![fainted.clone(), healthy, fainted]);

            let mut encounter = Encounter::start(
                &mut party,
                Some(enemy_monster()),
                EncounterKind::Wild,
                BattleConfig::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
            acknowledge(&mut encounter);
            acknowledge(&mut encounter);

            assert_eq!(encounter.player_monster().map(|m| m.name()), Some("Up"));
        }
    }
}
