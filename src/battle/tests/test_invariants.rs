use crate::battle::encounter::Encounter;
use crate::battle::state::{BattleAction, BattleState};
use crate::battle::tests::common::{predictable_rng, TestMonsterBuilder};
use crate::config::BattleConfig;
use crate::monster::Monster;
use crate::party::Party;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use schema::EncounterKind;

const ALL_ACTIONS: [BattleAction; 6] = [
    BattleAction::Attack,
    BattleAction::Catch,
    BattleAction::Bag,
    BattleAction::Pokemon,
    BattleAction::Run,
    BattleAction::Acknowledge,
];

fn assert_health_in_bounds(monster: &Monster) {
    assert!(
        monster.health() <= monster.max_health(),
        "{} has {} of {} health",
        monster.name(),
        monster.health(),
        monster.max_health()
    );
}

fn health_snapshot(encounter: &Encounter<'_>) -> (Vec<u32>, Option<u32>) {
    (
        encounter.party().monsters().iter().map(Monster::health).collect(),
        encounter.enemy_monster().map(Monster::health),
    )
}

#[rstest]
#[case(10, 5, EncounterKind::Wild)]
#[case(1, 40, EncounterKind::Trainer)]
#[case(500, 500, EncounterKind::Wild)]
#[case(7, 3, EncounterKind::Trainer)]
fn test_health_stays_in_bounds_for_any_input_sequence(
    #[case] player_damage: u32,
    #[case] enemy_damage: u32,
    #[case] kind: EncounterKind,
) {
    for seed in 0..16 {
        let mut input = StdRng::seed_from_u64(seed);
        let mut party = Party::with_monsters(vec![
            TestMonsterBuilder::new("Pikachu").with_level(3).build(),
            TestMonsterBuilder::new("Seel").with_level(2).with_health(4).build(),
        ]);
        let enemy = TestMonsterBuilder::new("Gastly").with_level(4).build();
        let config = BattleConfig {
            player_damage,
            enemy_damage,
        };
        let mut encounter =
            Encounter::start(&mut party, Some(enemy), kind, config, &mut predictable_rng()).unwrap();

        let mut terminal_snapshot = None;
        for _ in 0..60 {
            let action = ALL_ACTIONS[input.random_range(0..ALL_ACTIONS.len())];
            let result = encounter.apply_action(action);

            encounter.party().monsters().iter().for_each(assert_health_in_bounds);
            if let Some(enemy) = encounter.enemy_monster() {
                assert_health_in_bounds(enemy);
            }

            // Once the battle is decided, nothing may change health again.
            if result.new_state.is_terminal() || encounter.is_over() {
                let snapshot = health_snapshot(&encounter);
                match &terminal_snapshot {
                    None => terminal_snapshot = Some(snapshot),
                    Some(previous) => assert_eq!(previous, &snapshot),
                }
            }
            assert_ne!(encounter.state(), BattleState::EnemyTurn);
        }
    }
}

#[test]
fn test_catch_grows_party_by_exactly_one_for_any_follow_up() {
    for seed in 0..16 {
        let mut input = StdRng::seed_from_u64(seed);
        let mut party = Party::with_monsters(vec![TestMonsterBuilder::new("Pikachu").build()]);
        let enemy = TestMonsterBuilder::new("Gastly").build();
        let mut encounter = Encounter::start(
            &mut party,
            Some(enemy),
            EncounterKind::Wild,
            BattleConfig::default(),
            &mut predictable_rng(),
        )
        .unwrap();
        encounter.apply_action(BattleAction::Acknowledge);
        encounter.apply_action(BattleAction::Acknowledge);
        encounter.apply_action(BattleAction::Catch);
        assert_eq!(encounter.state(), BattleState::Won);

        for _ in 0..20 {
            let action = ALL_ACTIONS[input.random_range(0..ALL_ACTIONS.len())];
            encounter.apply_action(action);
            assert_eq!(encounter.party().len(), 2);
        }
    }
}
