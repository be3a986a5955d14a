//! Session actor implementation with async message handling.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};

use super::{
    config::SessionConfig,
    errors::SessionError,
    messages::SessionMessage,
    timer::Countdown,
};
use crate::{
    game::{GameEngine, GameState, TimerDirective},
    words::{CategoryId, WordProvider, catalog},
};

const INBOX_CAPACITY: usize = 64;

/// Session handle for sending intents and observing state.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    snapshot: watch::Receiver<GameState>,
}

impl SessionHandle {
    /// Select a category by id. Unknown ids are logged and ignored.
    pub async fn select_category(&self, category_id: CategoryId) -> Result<(), SessionError> {
        self.send(SessionMessage::SelectCategory { category_id })
            .await
    }

    /// Begin counting down the current turn.
    pub async fn start(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Start).await
    }

    /// Toggle between paused and running.
    pub async fn pause_resume(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::PauseResume).await
    }

    /// The acting team guessed the word.
    pub async fn correct_answer(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Correct).await
    }

    /// Give up on the current word and cede the turn.
    pub async fn skip_word(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Skip).await
    }

    /// End the game immediately.
    pub async fn finish(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Finish).await
    }

    /// Start over with the same category.
    pub async fn restart(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Restart).await
    }

    /// Return to the category menu.
    pub async fn reset_to_menu(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::ResetToMenu).await
    }

    /// Shut the session down.
    pub async fn close(&self) -> Result<(), SessionError> {
        self.send(SessionMessage::Close).await
    }

    /// Get the state snapshot as of all intents sent so far on this
    /// handle.
    pub async fn state(&self) -> Result<GameState, SessionError> {
        let (response, receiver) = oneshot::channel();
        self.send(SessionMessage::GetState { response }).await?;
        receiver.await.map_err(|_| SessionError::Closed)
    }

    /// Subscribe to state snapshots. The receiver always holds the
    /// latest published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshot.clone()
    }

    async fn send(&self, message: SessionMessage) -> Result<(), SessionError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

/// Session actor owning the game engine and the countdown.
pub struct GameSession {
    engine: GameEngine,
    config: SessionConfig,
    inbox: mpsc::Receiver<SessionMessage>,
    /// Sender cloned into countdown tasks so their ticks flow through
    /// the same inbox as user intents.
    intents: mpsc::Sender<SessionMessage>,
    snapshot: watch::Sender<GameState>,
    countdown: Countdown,
}

impl GameSession {
    /// Spawn a session with an OS-seeded word provider.
    pub fn spawn(config: SessionConfig) -> (SessionHandle, JoinHandle<()>) {
        Self::spawn_with_words(config, WordProvider::new())
    }

    /// Spawn a session with the given word provider (seed it for
    /// deterministic word draws).
    pub fn spawn_with_words(
        config: SessionConfig,
        words: WordProvider,
    ) -> (SessionHandle, JoinHandle<()>) {
        let engine = GameEngine::with_rules(words, config.turn_duration_secs, config.total_rounds);
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let (snapshot, snapshot_rx) = watch::channel(engine.state().clone());

        let actor = Self {
            engine,
            config,
            inbox,
            intents: sender.clone(),
            snapshot,
            countdown: Countdown::new(),
        };
        let handle = SessionHandle {
            sender,
            snapshot: snapshot_rx,
        };

        (handle, tokio::spawn(actor.run()))
    }

    /// Run the session actor event loop.
    async fn run(mut self) {
        info!("charades session started");

        while let Some(message) = self.inbox.recv().await {
            match message {
                SessionMessage::SelectCategory { category_id } => {
                    match catalog::get(category_id) {
                        Some(category) => {
                            debug!("category selected: {}", category.name);
                            let directive = self.engine.select_category(category);
                            self.apply(directive);
                        }
                        None => warn!("ignoring unknown category id {category_id}"),
                    }
                }
                SessionMessage::Start => {
                    let directive = self.engine.start_game();
                    self.apply(directive);
                }
                SessionMessage::PauseResume => {
                    let directive = self.engine.pause_resume();
                    self.apply(directive);
                }
                SessionMessage::Correct => {
                    let directive = self.engine.correct_answer();
                    self.apply(directive);
                }
                SessionMessage::Skip => {
                    let directive = self.engine.skip_word();
                    self.apply(directive);
                }
                SessionMessage::Finish => {
                    let directive = self.engine.finish_game();
                    self.apply(directive);
                }
                SessionMessage::Restart => {
                    let directive = self.engine.restart_game();
                    self.apply(directive);
                }
                SessionMessage::ResetToMenu => {
                    let directive = self.engine.reset_to_menu();
                    self.apply(directive);
                }
                SessionMessage::GetState { response } => {
                    let _ = response.send(self.engine.state().clone());
                }
                SessionMessage::Tick { generation } => {
                    if !self.countdown.is_current(generation) {
                        debug!("dropping stale tick (generation {generation})");
                        continue;
                    }
                    let directive = self.engine.tick();
                    self.apply(directive);
                }
                SessionMessage::TimeUpElapsed { generation } => {
                    if !self.countdown.is_current(generation) {
                        debug!("dropping stale time-up advance (generation {generation})");
                        continue;
                    }
                    let directive = self.engine.advance_after_time_up();
                    self.apply(directive);
                }
                SessionMessage::Close => break,
            }
        }

        self.countdown.cancel();
        info!("charades session closed");
    }

    /// Execute a timer directive and publish the snapshot if it changed.
    fn apply(&mut self, directive: TimerDirective) {
        match directive {
            TimerDirective::None => {}
            TimerDirective::Restart => self.countdown.arm(self.intents.clone()),
            TimerDirective::PauseThenAdvance => self.countdown.arm_time_up_pause(
                self.intents.clone(),
                Duration::from_secs(self.config.time_up_pause_secs),
            ),
            TimerDirective::Cancel => self.countdown.cancel(),
        }
        let state = self.engine.state();
        self.snapshot.send_if_modified(|current| {
            if current == state {
                false
            } else {
                *current = state.clone();
                true
            }
        });
    }
}
