pub mod arena;
pub mod collision;
pub mod config;
pub mod engine;
pub mod scoring;
pub mod steering;

use serde::{Deserialize, Serialize};

use neonarcade_core::arcade_game_boilerplate;
use neonarcade_core::{
    ArcadeGame, Direction, EntityIndex, GameEvent, GameMetadata, GridPos, Intent, Outcome, Rgb,
    TickMode, Viewport,
};

use collision::Crash;
use config::LightCycleConfig;

pub use engine::{create_state, tick};
pub use steering::{apply_intents, can_steer};

/// One of the two sides of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Starts on the left, facing right.
    Cyan,
    /// Starts on the right, facing left.
    Orange,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::Cyan => 0,
            Team::Orange => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Team> {
        match index {
            0 => Some(Team::Cyan),
            1 => Some(Team::Orange),
            _ => None,
        }
    }
}

/// State of a single light cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub pos: GridPos,
    pub direction: Direction,
    /// Cells previously occupied, oldest first. Grows by one per tick survived.
    pub trail: Vec<GridPos>,
    pub alive: bool,
    pub team: Team,
    pub color: Rgb,
    /// How the cycle died; `None` while alive.
    pub crash: Option<Crash>,
}

/// Complete light cycle round state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCycleState {
    pub grid_width: u32,
    pub grid_height: u32,
    pub cell_size: u32,
    pub cycles: Vec<Cycle>,
    /// Rounds won, indexed by `Team::index`.
    pub scores: [u32; 2],
    pub running: bool,
    /// `None` while the round is undecided.
    pub outcome: Option<Outcome<Team>>,
    pub tick_rate_hz: f32,
    pub tick_count: u64,
}

impl LightCycleState {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// The light cycles game.
pub struct LightCycles {
    config: LightCycleConfig,
}

impl LightCycles {
    pub fn new() -> Self {
        Self::with_config(LightCycleConfig::load())
    }

    pub fn with_config(config: LightCycleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LightCycleConfig {
        &self.config
    }
}

impl Default for LightCycles {
    fn default() -> Self {
        Self::with_config(LightCycleConfig::default())
    }
}

impl ArcadeGame for LightCycles {
    type State = LightCycleState;
    type Intent = Intent<Direction>;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Light Cycles".to_string(),
            description: "Leave a wall behind you. Outlast the other team.".to_string(),
            min_players: 2,
            max_players: self.config.variant.player_count() as u8,
        }
    }

    fn tick_mode(&self) -> TickMode {
        TickMode::FixedRate {
            hz: self.config.tick_rate_hz,
        }
    }

    fn create_state(&self, viewport: Viewport) -> LightCycleState {
        engine::create_state(viewport, &self.config)
    }

    fn accepts_intent(&self, state: &LightCycleState, intent: &Intent<Direction>) -> bool {
        steering::can_steer(state, intent.entity, intent.action)
    }

    fn apply_intents(
        &self,
        state: &LightCycleState,
        intents: &[Intent<Direction>],
    ) -> LightCycleState {
        steering::apply_intents(state, intents)
    }

    fn tick(&self, state: &LightCycleState) -> LightCycleState {
        engine::tick(state)
    }

    fn diff(&self, before: &LightCycleState, after: &LightCycleState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !before.running && after.running && after.outcome.is_none() {
            events.push(GameEvent::RoundStarted);
        }
        for (entity, (b, a)) in before.cycles.iter().zip(&after.cycles).enumerate() {
            if b.alive && !a.alive {
                events.push(GameEvent::Eliminated { entity });
            }
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
                outcome: outcome.map(Team::index),
            });
        }
        events
    }

    fn outcome(&self, state: &LightCycleState) -> Option<Outcome<EntityIndex>> {
        state.outcome.map(|o| o.map(Team::index))
    }

    arcade_game_boilerplate!(state_type: LightCycleState);
}
