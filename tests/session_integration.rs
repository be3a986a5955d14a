/// Integration tests for the async session actor
///
/// All tests run under a paused Tokio clock so countdown behavior is
/// deterministic: sleeps auto-advance whenever the test task is idle.
use std::time::Duration;

use charades::{GameSession, GameState, SessionConfig, SessionError, Team, WordProvider};
use tokio::sync::watch;

fn fast_config() -> SessionConfig {
    SessionConfig {
        turn_duration_secs: 3,
        total_rounds: 2,
        time_up_pause_secs: 2,
    }
}

/// Wait until the published snapshot satisfies the predicate.
async fn wait_for(
    snapshots: &mut watch::Receiver<GameState>,
    predicate: impl Fn(&GameState) -> bool,
) -> GameState {
    loop {
        if predicate(&snapshots.borrow()) {
            return snapshots.borrow().clone();
        }
        snapshots.changed().await.expect("session dropped");
    }
}

#[tokio::test(start_paused = true)]
async fn test_select_start_and_score() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(1));

    session.select_category(1).await.unwrap();
    session.start().await.unwrap();
    session.correct_answer().await.unwrap();

    let state = session.state().await.unwrap();
    assert_eq!(state.team1_score, 1);
    assert_eq!(state.current_team, Team::Two);
    assert!(state.is_active);
    assert_eq!(state.time_remaining, 3);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unknown_category_is_ignored() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(1));

    session.select_category(42).await.unwrap();

    let state = session.state().await.unwrap();
    assert!(state.category.is_none());
    assert_eq!(
        state,
        GameState {
            time_remaining: 3,
            total_rounds: 2,
            ..GameState::default()
        }
    );

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_countdown_expires_into_time_up_then_next_turn() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(2));
    let mut snapshots = session.subscribe();

    session.select_category(1).await.unwrap();
    session.start().await.unwrap();

    // Team 1 lets the whole turn run out.
    let state = wait_for(&mut snapshots, |state| state.is_time_up).await;
    assert_eq!(state.time_remaining, 0);
    assert!(state.team1_played_this_round);
    assert_eq!(state.current_team, Team::One);

    // After the observation pause the other team's turn goes live.
    let state = wait_for(&mut snapshots, |state| !state.is_time_up).await;
    assert_eq!(state.current_team, Team::Two);
    assert_eq!(state.time_remaining, 3);
    assert!(state.is_active);
    assert_eq!(state.round_number, 1);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_pause_freezes_the_countdown() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(3));
    let mut snapshots = session.subscribe();

    session.select_category(2).await.unwrap();
    session.start().await.unwrap();

    wait_for(&mut snapshots, |state| state.time_remaining < 3).await;
    session.pause_resume().await.unwrap();

    let paused = session.state().await.unwrap();
    assert!(!paused.is_active);

    // Let plenty of virtual time pass; the frozen countdown must not
    // move even if a tick was already in flight when we paused.
    tokio::time::sleep(Duration::from_secs(30)).await;
    let state = session.state().await.unwrap();
    assert_eq!(state.time_remaining, paused.time_remaining);
    assert!(!state.is_active);
    assert!(!state.is_time_up);

    // Resuming picks the countdown back up from the preserved value.
    session.pause_resume().await.unwrap();
    let state = wait_for(&mut snapshots, |state| {
        state.is_active && state.time_remaining < paused.time_remaining
    })
    .await;
    assert!(state.time_remaining < paused.time_remaining);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_full_game_runs_to_finish() {
    let config = SessionConfig {
        turn_duration_secs: 2,
        total_rounds: 1,
        time_up_pause_secs: 1,
    };
    let (session, _task) = GameSession::spawn_with_words(config, WordProvider::seeded(4));
    let mut snapshots = session.subscribe();

    session.select_category(5).await.unwrap();
    session.start().await.unwrap();

    // Team 1 scores; team 2 runs out of time, completing the only round.
    session.correct_answer().await.unwrap();
    let state = wait_for(&mut snapshots, |state| state.is_finished).await;

    assert!(!state.is_active);
    assert_eq!(state.team1_score, 1);
    assert_eq!(state.team2_score, 0);
    assert_eq!(state.winner(), Some(Team::One));

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_reset_to_menu_from_mid_game() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(5));
    let mut snapshots = session.subscribe();

    session.select_category(3).await.unwrap();
    session.start().await.unwrap();
    session.skip_word().await.unwrap();
    wait_for(&mut snapshots, |state| state.team1_played_this_round).await;

    session.reset_to_menu().await.unwrap();
    let state = session.state().await.unwrap();
    assert_eq!(
        state,
        GameState {
            time_remaining: 3,
            total_rounds: 2,
            ..GameState::default()
        }
    );

    // No stale tick may reanimate the cancelled countdown.
    tokio::time::sleep(Duration::from_secs(10)).await;
    let state = session.state().await.unwrap();
    assert!(!state.is_active);
    assert_eq!(state.time_remaining, 3);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_restart_keeps_category() {
    let (session, _task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(6));

    session.select_category(4).await.unwrap();
    session.start().await.unwrap();
    session.correct_answer().await.unwrap();
    session.restart().await.unwrap();

    let state = session.state().await.unwrap();
    assert_eq!(state.category.map(|c| c.id), Some(4));
    assert_eq!(state.team1_score, 0);
    assert_eq!(state.current_team, Team::One);
    assert_eq!(state.round_number, 1);
    assert!(!state.is_active);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_handle_errors_after_close() {
    let (session, task) = GameSession::spawn_with_words(fast_config(), WordProvider::seeded(7));

    session.close().await.unwrap();
    task.await.unwrap();

    assert_eq!(session.start().await, Err(SessionError::Closed));
    assert_eq!(session.state().await, Err(SessionError::Closed));
}
