use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Viewport;
use crate::time::TickMode;

/// Index of a controllable entity (cycle or paddle) within a state.
pub type EntityIndex = usize;

/// Result of a finished round: a concrete winner or an explicit draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    Winner(T),
    Draw,
}

impl<T: Copy> Outcome<T> {
    pub fn winner(&self) -> Option<T> {
        match self {
            Outcome::Winner(w) => Some(*w),
            Outcome::Draw => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Winner(w) => Outcome::Winner(f(w)),
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Core trait that both arcade simulations implement.
///
/// Every state transition takes the previous state by shared reference and
/// returns a fresh value, so the host may keep the old snapshot around for
/// change detection. The host owns input buffering and timing; the game only
/// validates intents and advances the simulation.
pub trait ArcadeGame {
    type State: Clone + PartialEq + fmt::Debug;
    type Intent: Copy + fmt::Debug;

    /// Display metadata for menus and logs.
    fn metadata(&self) -> GameMetadata;

    /// How the host should schedule `tick` relative to display refreshes.
    fn tick_mode(&self) -> TickMode;

    /// Build the initial state for a round from the host viewport.
    fn create_state(&self, viewport: Viewport) -> Self::State;

    /// Queue-time validation: whether the intent may enter the input queue.
    fn accepts_intent(&self, state: &Self::State, intent: &Self::Intent) -> bool;

    /// Apply a drained batch of intents in arrival order. Each intent is
    /// re-validated against the state as updated by the earlier ones; invalid
    /// intents are dropped silently.
    fn apply_intents(&self, state: &Self::State, intents: &[Self::Intent]) -> Self::State;

    /// Advance the simulation by one step. A no-op unless running and not over.
    fn tick(&self, state: &Self::State) -> Self::State;

    /// Describe what changed between two consecutive snapshots.
    fn diff(&self, before: &Self::State, after: &Self::State) -> Vec<GameEvent>;

    /// Result of the round, `None` while undecided.
    fn outcome(&self, state: &Self::State) -> Option<Outcome<EntityIndex>>;

    /// Start or resume: returns the state with `running = true`.
    fn start(&self, state: &Self::State) -> Self::State;

    fn is_running(&self, state: &Self::State) -> bool;

    /// Cumulative per-side scores.
    fn scores(&self, state: &Self::State) -> [u32; 2];

    /// Replace the cumulative scores of a state.
    fn with_scores(&self, state: Self::State, scores: [u32; 2]) -> Self::State;

    fn is_game_over(&self, state: &Self::State) -> bool {
        self.outcome(state).is_some()
    }

    /// Re-create the state for a new round, optionally carrying scores over.
    fn reset(&self, previous: &Self::State, viewport: Viewport, keep_scores: bool) -> Self::State {
        let fresh = self.create_state(viewport);
        if keep_scores {
            let scores = self.scores(previous);
            self.with_scores(fresh, scores)
        } else {
            fresh
        }
    }
}

/// Game metadata for the host's menu and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub min_players: u8,
    pub max_players: u8,
}

/// Change notifications derived by diffing two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    Eliminated { entity: EntityIndex },
    PointScored { side: EntityIndex, scores: [u32; 2] },
    RoundComplete { outcome: Outcome<EntityIndex> },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted => write!(f, "round started"),
            Self::Eliminated { entity } => write!(f, "player {} eliminated", entity + 1),
            Self::PointScored { side, scores } => {
                write!(f, "point to side {} ({}-{})", side + 1, scores[0], scores[1])
            },
            Self::RoundComplete {
                outcome: Outcome::Winner(w),
            } => write!(f, "round won by side {}", w + 1),
            Self::RoundComplete {
                outcome: Outcome::Draw,
            } => write!(f, "round drawn"),
        }
    }
}

/// Generates the `ArcadeGame` lifecycle methods that are identical across games:
/// `start`, `is_running`, `scores`, `with_scores`.
///
/// Requires `$StateType` to have `running: bool` and `scores: [u32; 2]` fields.
#[macro_export]
macro_rules! arcade_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn start(&self, state: &$StateType) -> $StateType {
            let mut next = state.clone();
            next.running = true;
            next
        }

        fn is_running(&self, state: &$StateType) -> bool {
            state.running
        }

        fn scores(&self, state: &$StateType) -> [u32; 2] {
            state.scores
        }

        fn with_scores(&self, mut state: $StateType, scores: [u32; 2]) -> $StateType {
            state.scores = scores;
            state
        }
    };
}
