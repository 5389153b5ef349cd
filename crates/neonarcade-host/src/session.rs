use std::time::Duration;

use neonarcade_core::{ArcadeGame, GameEvent, InputQueue, TickGate, Viewport};

/// What the action key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An idle round began running.
    Started,
    /// A finished round was replaced by a fresh one (scores kept) and started.
    Restarted,
    /// The round was already running.
    Ignored,
}

/// One game in progress: the current state snapshot plus the input buffer and
/// rate gate that feed it.
pub struct Session<G: ArcadeGame> {
    game: G,
    viewport: Viewport,
    state: G::State,
    queue: InputQueue<G::Intent>,
    gate: TickGate,
    /// Events from the action key, handed out by the next `frame`.
    pending_events: Vec<GameEvent>,
}

impl<G: ArcadeGame> Session<G> {
    pub fn new(game: G, viewport: Viewport) -> Self {
        let state = game.create_state(viewport);
        let gate = TickGate::new(game.tick_mode());
        tracing::info!(
            game = %game.metadata().name,
            width = viewport.width,
            height = viewport.height,
            "Session created"
        );
        Self {
            game,
            viewport,
            state,
            queue: InputQueue::new(),
            gate,
            pending_events: Vec::new(),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }

    /// Buffer an intent for the next tick if the game accepts it now.
    pub fn queue_intent(&mut self, intent: G::Intent) -> bool {
        if self.game.accepts_intent(&self.state, &intent) {
            self.queue.push(intent);
            true
        } else {
            tracing::debug!(?intent, "Intent rejected at queue time");
            false
        }
    }

    /// The action key: restart after game over, otherwise start if idle.
    pub fn action(&mut self) -> Action {
        if self.game.is_game_over(&self.state) {
            self.reset(true);
            self.start_round();
            tracing::info!(scores = ?self.game.scores(&self.state), "Round restarted");
            Action::Restarted
        } else if !self.game.is_running(&self.state) {
            self.start_round();
            tracing::info!("Round started");
            Action::Started
        } else {
            Action::Ignored
        }
    }

    fn start_round(&mut self) {
        let started = self.game.start(&self.state);
        self.pending_events.extend(self.game.diff(&self.state, &started));
        self.state = started;
    }

    /// Replace the state with a fresh round for the current viewport.
    pub fn reset(&mut self, keep_scores: bool) {
        self.state = self.game.reset(&self.state, self.viewport, keep_scores);
        self.queue.clear();
        self.gate.reset();
        self.pending_events.clear();
    }

    /// Adopt a new viewport. Dimensions are only read at round creation, so
    /// this discards the round and its scores.
    pub fn resize(&mut self, viewport: Viewport) {
        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "Viewport resized, resetting"
        );
        self.viewport = viewport;
        self.reset(false);
    }

    /// Run one display frame. When the gate opens, the whole input queue is
    /// drained into the state and the game ticks once. Returns what changed,
    /// including any round start from the action key since the last frame.
    pub fn frame(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        if !self.gate.advance(elapsed) {
            return events;
        }
        let intents = self.queue.drain();
        let steered = self.game.apply_intents(&self.state, &intents);
        let next = self.game.tick(&steered);
        events.extend(self.game.diff(&self.state, &next));
        self.state = next;
        events
    }
}
