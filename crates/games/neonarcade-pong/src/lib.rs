pub mod config;
pub mod engine;
pub mod physics;
pub mod scoring;

use serde::{Deserialize, Serialize};

use neonarcade_core::arcade_game_boilerplate;
use neonarcade_core::{
    ArcadeGame, EntityIndex, GameEvent, GameMetadata, Intent, Outcome, Rgb, TickMode, Viewport,
};

use config::PongConfig;

/// A player's half of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Side> {
        match index {
            0 => Some(Side::Left),
            1 => Some(Side::Right),
            _ => None,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical paddle intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    Up,
    #[default]
    Idle,
    Down,
}

impl Steer {
    /// Screen-space y delta: up is negative.
    pub fn dy(self) -> f32 {
        match self {
            Steer::Up => -1.0,
            Steer::Idle => 0.0,
            Steer::Down => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// Paddle rectangle; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub steer: Steer,
    pub color: Rgb,
}

/// Complete pong match state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    pub ball: Ball,
    /// Indexed by `Side::index`.
    pub paddles: [Paddle; 2],
    pub scores: [u32; 2],
    pub width: f32,
    pub height: f32,
    pub running: bool,
    pub outcome: Option<Outcome<Side>>,
    pub win_score: u32,
    /// Seed for the next serve's random vertical speed.
    pub serve_seed: u64,
    pub tick_count: u64,
}

impl PongState {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The pong game.
pub struct Pong {
    config: PongConfig,
}

impl Pong {
    pub fn new() -> Self {
        Self::with_config(PongConfig::load())
    }

    pub fn with_config(config: PongConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }
}

impl Default for Pong {
    fn default() -> Self {
        Self::with_config(PongConfig::default())
    }
}

impl ArcadeGame for Pong {
    type State = PongState;
    type Intent = Intent<Steer>;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Pong".to_string(),
            description: format!("First to {} points.", self.config.win_score),
            min_players: 2,
            max_players: 2,
        }
    }

    fn tick_mode(&self) -> TickMode {
        TickMode::EveryFrame
    }

    fn create_state(&self, viewport: Viewport) -> PongState {
        engine::create_state(viewport, &self.config)
    }

    fn accepts_intent(&self, _state: &PongState, intent: &Intent<Steer>) -> bool {
        Side::from_index(intent.entity).is_some()
    }

    fn apply_intents(&self, state: &PongState, intents: &[Intent<Steer>]) -> PongState {
        let mut next = state.clone();
        for intent in intents {
            match next.paddles.get_mut(intent.entity) {
                Some(paddle) => paddle.steer = intent.action,
                None => tracing::debug!(entity = intent.entity, "Dropped intent for unknown paddle"),
            }
        }
        next
    }

    fn tick(&self, state: &PongState) -> PongState {
        engine::tick(state, &self.config)
    }

    fn diff(&self, before: &PongState, after: &PongState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !before.running && after.running && after.outcome.is_none() {
            events.push(GameEvent::RoundStarted);
        }
        for side in 0..2 {
            if after.scores[side] > before.scores[side] {
                events.push(GameEvent::PointScored {
                    side,
                    scores: after.scores,
                });
            }
        }
        if before.outcome.is_none()
            && let Some(outcome) = after.outcome
        {
            events.push(GameEvent::RoundComplete {
                outcome: outcome.map(Side::index),
            });
        }
        events
    }

    fn outcome(&self, state: &PongState) -> Option<Outcome<EntityIndex>> {
        state.outcome.map(|o| o.map(Side::index))
    }

    arcade_game_boilerplate!(state_type: PongState);
}
