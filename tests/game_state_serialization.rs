use naval_duel::{
    Coordinate, EngineError, GameState, GameStatus, Orientation, PlayerSlot, TurnEngine,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn played_engine(seed: u64) -> TurnEngine<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine =
        TurnEngine::with_random_placement("alice".to_string(), "bob".to_string(), &mut rng).unwrap();
    let shots = rng.random_range(0..60);
    for _ in 0..shots {
        if engine.status().is_terminal() {
            break;
        }
        let target = Coordinate::new(rng.random_range(0..10), rng.random_range(0..10)).unwrap();
        let _ = engine.submit_shot(engine.turn(), &target.to_string());
    }
    if rng.random_bool(0.3) {
        let _ = engine.request_cancel(PlayerSlot::Two);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn game_state_roundtrip(seed in any::<u64>()) {
        let engine = played_engine(seed);
        let state = engine.state();
        let bytes = state.to_bytes().unwrap();
        let decoded: GameState<String> = GameState::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&decoded, &state);

        let restored = TurnEngine::from_state(decoded).unwrap();
        prop_assert_eq!(restored.state(), state);
        prop_assert_eq!(restored.turn(), engine.turn());
        prop_assert_eq!(restored.get_view(PlayerSlot::One, true), engine.get_view(PlayerSlot::One, true));
    }
}

#[test]
fn test_restored_engine_keeps_playing() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = TurnEngine::with_random_placement(1u32, 2u32, &mut rng).unwrap();
    engine.submit_shot(PlayerSlot::One, "a1").unwrap();

    let mut restored = TurnEngine::from_state(engine.state()).unwrap();
    assert_eq!(restored.turn(), PlayerSlot::Two);
    assert_eq!(
        restored.submit_shot(PlayerSlot::One, "b2"),
        Err(EngineError::NotYourTurn)
    );
    restored.submit_shot(PlayerSlot::Two, "a1").unwrap();
    assert_eq!(restored.moves(), 2);
}

#[test]
fn test_inconsistent_snapshot_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let engine = TurnEngine::with_random_placement(1u32, 2u32, &mut rng).unwrap();

    let mut state = engine.state();
    state.status = GameStatus::Finished { winner: PlayerSlot::One };
    assert!(matches!(
        TurnEngine::from_state(state),
        Err(EngineError::CorruptSnapshot)
    ));

    let mut state = engine.state();
    state.moves = 4;
    assert!(matches!(
        TurnEngine::from_state(state),
        Err(EngineError::CorruptSnapshot)
    ));

    let mut state = engine.state();
    state.boards[0].ships.push(state.boards[0].ships[0]);
    assert!(matches!(
        TurnEngine::from_state(state),
        Err(EngineError::CorruptSnapshot)
    ));
}

/// Player one sinks player two's fleet while player two sweeps the grid in
/// row-major order.
fn finished_engine() -> TurnEngine<u32> {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut engine = TurnEngine::with_random_placement(1u32, 2u32, &mut rng).unwrap();
    let targets: Vec<Coordinate> = engine
        .board(PlayerSlot::Two)
        .ship_map()
        .iter_set_bits()
        .map(|(r, c)| Coordinate::new(r, c).unwrap())
        .collect();
    let mut sweep = Coordinate::all();
    for target in targets {
        engine.submit_shot(PlayerSlot::One, &target.to_string()).unwrap();
        if engine.status().is_terminal() {
            break;
        }
        let reply = sweep.next().unwrap();
        engine.submit_shot(PlayerSlot::Two, &reply.to_string()).unwrap();
    }
    engine
}

fn assert_corrupt<P>(state: GameState<P>) {
    assert!(matches!(
        TurnEngine::from_state(state),
        Err(EngineError::CorruptSnapshot)
    ));
}

#[test]
fn test_origin_past_usize_range_rejected() {
    let engine = played_engine(5);
    let mut state = engine.state();
    state.boards[0].ships[0].row = usize::MAX;
    state.boards[0].ships[0].orientation = Orientation::Vertical;

    let decoded: GameState<String> = GameState::from_bytes(&state.to_bytes().unwrap()).unwrap();
    assert_corrupt(decoded);

    let mut state = engine.state();
    state.boards[1].ships[0].col = usize::MAX;
    state.boards[1].ships[0].orientation = Orientation::Horizontal;
    assert_corrupt(state);
}

#[test]
fn test_turn_must_follow_move_count() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = TurnEngine::with_random_placement(1u32, 2u32, &mut rng).unwrap();

    let mut state = engine.state();
    state.turn = PlayerSlot::Two;
    assert_corrupt(state);

    engine.submit_shot(PlayerSlot::One, "a1").unwrap();
    let mut state = engine.state();
    state.turn = PlayerSlot::One;
    assert_corrupt(state);

    let mut setup = TurnEngine::new(1u32, 2u32).state();
    setup.turn = PlayerSlot::Two;
    assert_corrupt(setup);
}

#[test]
fn test_finished_turn_belongs_to_loser() {
    let engine = finished_engine();
    assert_eq!(engine.winner(), Some(PlayerSlot::One));
    assert_eq!(engine.turn(), PlayerSlot::Two);
    assert!(TurnEngine::from_state(engine.state()).is_ok());

    let mut state = engine.state();
    state.turn = PlayerSlot::One;
    assert_corrupt(state);

    let mut state = engine.state();
    state.players[0].approves_cancel = true;
    state.players[1].approves_cancel = true;
    assert_corrupt(state);
}

#[test]
fn test_both_cancel_flags_need_cancelled_status() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut engine = TurnEngine::with_random_placement(1u32, 2u32, &mut rng).unwrap();
    engine.request_cancel(PlayerSlot::One).unwrap();
    assert!(TurnEngine::from_state(engine.state()).is_ok());

    let mut state = engine.state();
    state.players[1].approves_cancel = true;
    assert_eq!(state.status, GameStatus::InProgress);
    assert_corrupt(state);

    let mut setup = TurnEngine::new(1u32, 2u32).state();
    setup.players[0].approves_cancel = true;
    setup.players[1].approves_cancel = true;
    assert_corrupt(setup);

    engine.request_cancel(PlayerSlot::Two).unwrap();
    let restored = TurnEngine::from_state(engine.state()).unwrap();
    assert_eq!(restored.status(), GameStatus::Cancelled);
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    assert!(GameState::<String>::from_bytes(&[0xff, 0x01]).is_err());
}
