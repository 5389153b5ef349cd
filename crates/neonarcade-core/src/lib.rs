pub mod color;
pub mod config;
pub mod direction;
pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod render;
pub mod time;

pub use color::Rgb;
pub use direction::{Direction, is_opposite};
pub use game_trait::{ArcadeGame, EntityIndex, GameEvent, GameMetadata, Outcome};
pub use geometry::{GridPos, Viewport};
pub use input::{InputQueue, Intent};
pub use time::{TickGate, TickMode, rate_interval};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::ArcadeGame;
    use crate::geometry::Viewport;

    /// Advance `state` by `n` ticks with no input.
    pub fn run_ticks<G: ArcadeGame>(game: &G, state: &G::State, n: usize) -> G::State {
        let mut current = state.clone();
        for _ in 0..n {
            current = game.tick(&current);
        }
        current
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Every ArcadeGame implementation must pass these. Game crates call them
    // from their own #[cfg(test)] modules with a concrete game instance.

    /// A freshly created state is idle: not running, no outcome, zero scores.
    pub fn contract_create_state_is_idle<G: ArcadeGame>(game: &G, viewport: Viewport) {
        let state = game.create_state(viewport);
        assert!(!game.is_running(&state), "new state must not be running");
        assert!(!game.is_game_over(&state), "new state must not be over");
        assert_eq!(game.scores(&state), [0, 0], "new state must have zero scores");
    }

    /// tick() on a state that was never started returns an equal state.
    pub fn contract_tick_noop_when_not_running<G: ArcadeGame>(game: &G, viewport: Viewport) {
        let state = game.create_state(viewport);
        let next = game.tick(&state);
        assert_eq!(state, next, "tick must be a no-op before start");
    }

    /// start() sets running and leaves the input untouched.
    pub fn contract_start_sets_running<G: ArcadeGame>(game: &G, viewport: Viewport) {
        let state = game.create_state(viewport);
        let before = state.clone();
        let started = game.start(&state);
        assert!(game.is_running(&started), "start must set running");
        assert_eq!(state, before, "start must not mutate its input");
    }

    /// tick() is a pure function: equal inputs give equal outputs and the
    /// input snapshot is left untouched.
    pub fn contract_tick_is_deterministic<G: ArcadeGame>(game: &G, viewport: Viewport, ticks: usize) {
        let started = game.start(&game.create_state(viewport));
        let mut a = started.clone();
        let mut b = started;
        for _ in 0..ticks {
            let snapshot = a.clone();
            let next_a = game.tick(&a);
            assert_eq!(a, snapshot, "tick must not mutate its input");
            a = next_a;
            b = game.tick(&b);
            assert_eq!(a, b, "tick must be deterministic");
        }
    }

    /// Once the round is over, further ticks are no-ops.
    pub fn contract_game_over_is_terminal<G: ArcadeGame>(game: &G, finished: &G::State) {
        assert!(game.is_game_over(finished), "precondition: state is finished");
        let next = game.tick(finished);
        assert_eq!(&next, finished, "tick after game over must be a no-op");
        let started = game.start(finished);
        assert_eq!(
            game.tick(&started),
            started,
            "tick after game over must be a no-op even when running"
        );
    }

    /// reset(keep_scores) carries scores forward; reset(false) zeroes them.
    pub fn contract_reset_scores<G: ArcadeGame>(game: &G, viewport: Viewport) {
        let state = game.with_scores(game.create_state(viewport), [3, 5]);
        let kept = game.reset(&state, viewport, true);
        assert_eq!(game.scores(&kept), [3, 5], "reset(true) must keep scores");
        assert!(!game.is_game_over(&kept));
        let cleared = game.reset(&state, viewport, false);
        assert_eq!(game.scores(&cleared), [0, 0], "reset(false) must zero scores");
    }

    /// Running with no input must eventually finish the round.
    pub fn contract_round_eventually_completes<G: ArcadeGame>(
        game: &G,
        viewport: Viewport,
        max_ticks: usize,
    ) {
        let mut state = game.start(&game.create_state(viewport));
        for _ in 0..max_ticks {
            if game.is_game_over(&state) {
                return;
            }
            state = game.tick(&state);
        }
        assert!(
            game.is_game_over(&state),
            "round did not complete within {max_ticks} ticks"
        );
    }
}
