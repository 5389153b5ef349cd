use serde::Serialize;
use tokio::time::{Instant, MissedTickBehavior};

use neonarcade_core::{ArcadeGame, GameEvent, Intent, Outcome};
use neonarcade_lightcycles::LightCycles;
use neonarcade_pong::{Pong, Steer};

use crate::config::HostConfig;
use crate::keymap::{
    ACTION_KEY, DirectionKeys, KeyState, PONG_KEYS, direction_intent, lightcycle_keys, paddle_steer,
};
use crate::script::{InputScript, KeyEdge};
use crate::session::Session;

/// Turns keyboard activity into intents for one game.
pub trait Controls<G: ArcadeGame> {
    /// A key went down this frame (not an auto-repeat).
    fn key_pressed(&mut self, code: &str, session: &mut Session<G>);

    /// Called once per frame, after key events and before the frame steps.
    fn before_frame(&mut self, keys: &KeyState, session: &mut Session<G>);
}

/// Discrete steering: each key press queues one direction change.
pub struct LightCycleControls {
    bindings: Vec<DirectionKeys>,
}

impl LightCycleControls {
    pub fn for_game(game: &LightCycles) -> Self {
        Self {
            bindings: lightcycle_keys(game.config().variant),
        }
    }
}

impl Controls<LightCycles> for LightCycleControls {
    fn key_pressed(&mut self, code: &str, session: &mut Session<LightCycles>) {
        if let Some(intent) = direction_intent(&self.bindings, code) {
            session.queue_intent(intent);
        }
    }

    fn before_frame(&mut self, _keys: &KeyState, _session: &mut Session<LightCycles>) {}
}

/// Held-key paddles: both paddles are re-read from the keyboard every frame.
#[derive(Default)]
pub struct PongControls;

impl Controls<Pong> for PongControls {
    fn key_pressed(&mut self, _code: &str, _session: &mut Session<Pong>) {}

    fn before_frame(&mut self, keys: &KeyState, session: &mut Session<Pong>) {
        for (paddle, binding) in PONG_KEYS.iter().enumerate() {
            session.queue_intent(Intent::<Steer>::new(paddle, paddle_steer(keys, binding)));
        }
    }
}

/// One finished round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round: u32,
    pub outcome: Outcome<usize>,
    /// Cumulative scores after the round.
    pub scores: [u32; 2],
    pub frame: u64,
}

/// Result of a whole match, printed as JSON by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub game: String,
    pub rounds: Vec<RoundSummary>,
    pub final_scores: [u32; 2],
    pub frames: u64,
    /// False when the frame budget ran out before the last round ended.
    pub completed: bool,
}

/// Drive a session frame by frame until `config.rounds` rounds have finished
/// or the frame budget is spent.
///
/// In realtime mode a tokio interval stands in for the display refresh
/// callback; missed frames are skipped, not replayed.
pub async fn run_match<G, C>(
    session: &mut Session<G>,
    controls: &mut C,
    script: &InputScript,
    config: &HostConfig,
) -> MatchSummary
where
    G: ArcadeGame,
    C: Controls<G>,
{
    let frame_interval = config.frame_interval();
    let mut interval = tokio::time::interval(frame_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut keys = KeyState::new();
    let mut player = script.player();
    let mut rounds: Vec<RoundSummary> = Vec::new();
    let mut needs_start = config.auto_start;
    let mut last = Instant::now();
    let mut frame: u64 = 0;

    while frame < config.max_frames && (rounds.len() as u32) < config.rounds {
        let elapsed = if config.realtime {
            let now = interval.tick().await;
            let elapsed = now.duration_since(last);
            last = now;
            elapsed
        } else {
            frame_interval
        };

        if needs_start {
            session.action();
            needs_start = false;
        }

        for event in player.due(frame) {
            match event.edge {
                KeyEdge::Down => press(&event.key, &mut keys, session, controls),
                KeyEdge::Up => keys.on_key_up(&event.key),
                KeyEdge::Press => {
                    press(&event.key, &mut keys, session, controls);
                    keys.on_key_up(&event.key);
                },
            }
        }
        controls.before_frame(&keys, session);

        for event in session.frame(elapsed) {
            tracing::debug!(frame, %event, "Game event");
            if let GameEvent::RoundComplete { outcome } = event {
                let scores = session.game().scores(session.state());
                let round = rounds.len() as u32 + 1;
                tracing::info!(round, ?outcome, ?scores, frame, "Round finished");
                rounds.push(RoundSummary {
                    round,
                    outcome,
                    scores,
                    frame,
                });
                needs_start = config.auto_start;
            }
        }

        frame += 1;
    }

    let completed = rounds.len() as u32 >= config.rounds;
    if !completed {
        tracing::warn!(frames = frame, played = rounds.len(), "Frame budget exhausted");
    }
    MatchSummary {
        game: session.game().metadata().name,
        final_scores: session.game().scores(session.state()),
        rounds,
        frames: frame,
        completed,
    }
}

fn press<G: ArcadeGame, C: Controls<G>>(
    code: &str,
    keys: &mut KeyState,
    session: &mut Session<G>,
    controls: &mut C,
) {
    if !keys.on_key_down(code) {
        return;
    }
    if code == ACTION_KEY {
        session.action();
    } else {
        controls.key_pressed(code, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonarcade_core::Viewport;
    use neonarcade_lightcycles::config::LightCycleConfig;

    fn fast(rounds: u32) -> HostConfig {
        HostConfig {
            realtime: false,
            rounds,
            max_frames: 10_000,
            ..HostConfig::default()
        }
    }

    #[tokio::test]
    async fn symmetric_teams_draw_every_round() {
        let game = LightCycles::with_config(LightCycleConfig::default());
        let mut controls = LightCycleControls::for_game(&game);
        let mut session = Session::new(game, Viewport::new(1280, 720));

        let summary = run_match(&mut session, &mut controls, &InputScript::default(), &fast(2)).await;
        assert!(summary.completed);
        assert_eq!(summary.rounds.len(), 2);
        assert!(summary.rounds.iter().all(|r| r.outcome == Outcome::Draw));
        assert_eq!(summary.final_scores, [0, 0]);
        assert_eq!(summary.game, "Light Cycles");
    }

    #[tokio::test]
    async fn nothing_happens_without_start() {
        let game = LightCycles::with_config(LightCycleConfig::duel());
        let mut controls = LightCycleControls::for_game(&game);
        let mut session = Session::new(game, Viewport::new(1280, 720));
        let config = HostConfig {
            auto_start: false,
            max_frames: 50,
            ..fast(1)
        };

        let summary = run_match(&mut session, &mut controls, &InputScript::default(), &config).await;
        assert!(!summary.completed);
        assert_eq!(summary.frames, 50);
        assert_eq!(session.state().tick_count, 0);
    }
}
