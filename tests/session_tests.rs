use naval_duel::{
    EngineError, GameApi, GameHandle, GameStatus, Orientation, PlayerSlot, TurnEngine, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_handle(seed: u64) -> GameHandle<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let engine =
        TurnEngine::with_random_placement("alice".to_string(), "bob".to_string(), &mut rng).unwrap();
    GameHandle::new(engine)
}

#[tokio::test]
async fn test_actions_by_identity() {
    let handle = random_handle(1);
    let alice = "alice".to_string();
    let bob = "bob".to_string();
    let carol = "carol".to_string();

    assert_eq!(handle.submit_shot(&bob, "a1").await, Err(EngineError::NotYourTurn));
    assert_eq!(handle.submit_shot(&carol, "a1").await, Err(EngineError::UnknownPlayer));

    let report = handle.submit_shot(&alice, "a1").await.unwrap();
    assert_eq!(report.shooter, PlayerSlot::One);
    assert_eq!(handle.with_engine(|e| e.turn()).await, PlayerSlot::Two);

    let target = handle.target_view(&alice).await.unwrap();
    let bobs_board = handle.view(&bob, false).await.unwrap();
    assert_eq!(target, bobs_board);
}

#[tokio::test]
async fn test_placement_through_handle() {
    let handle = GameHandle::new(TurnEngine::new("alice".to_string(), "bob".to_string()));
    let alice = "alice".to_string();
    let bob = "bob".to_string();

    assert_eq!(
        handle
            .submit_placement(&alice, "Carrier", "z99", Orientation::Horizontal)
            .await,
        Err(EngineError::InvalidCoordinate)
    );
    for (who, column) in [(&alice, 1), (&bob, 6)] {
        for (i, def) in SHIPS.iter().enumerate() {
            let row = (b'a' + 2 * i as u8) as char;
            let origin = format!("{}{}", row, column);
            handle
                .submit_placement(who, def.name(), &origin, Orientation::Horizontal)
                .await
                .unwrap();
        }
    }
    assert_eq!(handle.status().await, GameStatus::InProgress);
}

#[tokio::test]
async fn test_cancel_through_handle() {
    let handle = random_handle(2);
    let alice = "alice".to_string();
    let bob = "bob".to_string();

    assert!(!handle.request_cancel(&bob).await.unwrap().both_approved);
    assert_eq!(handle.status().await, GameStatus::InProgress);
    assert!(handle.request_cancel(&alice).await.unwrap().both_approved);
    assert_eq!(handle.status().await, GameStatus::Cancelled);
    assert_eq!(handle.submit_shot(&alice, "a1").await, Err(EngineError::GameOver));

    let snapshot = handle.snapshot().await;
    assert!(snapshot.players.iter().all(|p| p.approves_cancel));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shots_resolve_one_per_turn() {
    let handle = random_handle(3);

    // Both players race to fire at every cell; only the player on turn may
    // land each shot, so the turn pointer serialises the game.
    let mut tasks = Vec::new();
    for who in ["alice", "bob"] {
        for token in ["a1", "b2", "c3", "d4", "e5"] {
            let handle = handle.clone();
            let who = who.to_string();
            tasks.push(tokio::spawn(async move {
                handle.submit_shot(&who, token).await
            }));
        }
    }

    let mut accepted = Vec::new();
    for task in tasks {
        if let Ok(report) = task.await.unwrap() {
            accepted.push(report);
        }
    }

    let moves = handle.with_engine(|e| e.moves()).await;
    assert_eq!(moves, accepted.len());
    assert!(moves >= 1);
    let ones = accepted.iter().filter(|r| r.shooter == PlayerSlot::One).count();
    let twos = accepted.len() - ones;
    // Strict alternation starting with player one.
    assert!(ones == twos || ones == twos + 1);

    let state = handle.snapshot().await;
    let shots_at = |i: usize| state.boards[i].hits.count_ones() + state.boards[i].misses.count_ones();
    assert_eq!(shots_at(1), ones);
    assert_eq!(shots_at(0), twos);
}
