//! Cancellable countdown timer.
//!
//! At most one timer task is outstanding per session. Every armed task
//! is tagged with a generation; cancelling (or re-arming, which cancels
//! first) bumps the generation, so messages a dying task already queued
//! into the actor's inbox are recognizably stale.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};

use super::messages::SessionMessage;

#[derive(Debug)]
pub(super) struct Countdown {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Countdown {
    pub(super) fn new() -> Self {
        Self {
            generation: 0,
            task: None,
        }
    }

    /// Cancel any outstanding task and arm a fresh per-second countdown.
    pub(super) fn arm(&mut self, intents: mpsc::Sender<SessionMessage>) {
        self.cancel();
        let generation = self.generation;
        self.task = Some(tokio::spawn(async move {
            loop {
                sleep(Duration::from_secs(1)).await;
                let tick = SessionMessage::Tick { generation };
                if intents.send(tick).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancel any outstanding task and arm the one-shot observation
    /// pause that follows a turn expiry.
    pub(super) fn arm_time_up_pause(
        &mut self,
        intents: mpsc::Sender<SessionMessage>,
        pause: Duration,
    ) {
        self.cancel();
        let generation = self.generation;
        self.task = Some(tokio::spawn(async move {
            sleep(pause).await;
            let _ = intents
                .send(SessionMessage::TimeUpElapsed { generation })
                .await;
        }));
    }

    /// Stop the outstanding task, if any. Idempotent. Bumps the
    /// generation so already-queued messages from the stopped task are
    /// dropped by the actor.
    pub(super) fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.generation += 1;
    }

    /// Whether a timer message belongs to the currently armed task.
    pub(super) fn is_current(&self, generation: u64) -> bool {
        self.task.is_some() && self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_armed_countdown_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut countdown = Countdown::new();
        countdown.arm(tx);

        for _ in 0..3 {
            match rx.recv().await {
                Some(SessionMessage::Tick { generation }) => {
                    assert!(countdown.is_current(generation));
                }
                other => panic!("expected tick, got {other:?}"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_idempotent_and_staleizes_ticks() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut countdown = Countdown::new();
        countdown.arm(tx);

        let generation = match rx.recv().await {
            Some(SessionMessage::Tick { generation }) => generation,
            other => panic!("expected tick, got {other:?}"),
        };

        countdown.cancel();
        countdown.cancel();
        assert!(!countdown.is_current(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_invalidates_previous_generation() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut countdown = Countdown::new();

        countdown.arm(tx.clone());
        let first = match rx.recv().await {
            Some(SessionMessage::Tick { generation }) => generation,
            other => panic!("expected tick, got {other:?}"),
        };

        countdown.arm(tx);
        let second = match rx.recv().await {
            Some(SessionMessage::Tick { generation }) => generation,
            other => panic!("expected tick, got {other:?}"),
        };

        assert!(!countdown.is_current(first));
        assert!(countdown.is_current(second));
    }
}
