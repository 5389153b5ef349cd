use rand::Rng;

use neonarcade_core::geometry::WallContact;
use neonarcade_core::{Rgb, Viewport};

use crate::config::PongConfig;
use crate::physics::{bounce_walls, move_paddle, paddle_hit, step_ball};
use crate::scoring::{check_winner, scoring_side, serve};
use crate::{Ball, Paddle, PongState, Side, Steer};

/// Build the initial match state for a viewport: ball centred on the
/// opening serve, paddles centred vertically at their insets.
pub fn create_state(viewport: Viewport, config: &PongConfig) -> PongState {
    let width = viewport.width as f32;
    let height = viewport.height as f32;
    let paddle_y = height / 2.0 - config.paddle_height / 2.0;
    let paddle = |x: f32, color: Rgb| Paddle {
        x,
        y: paddle_y,
        width: config.paddle_width,
        height: config.paddle_height,
        steer: Steer::Idle,
        color,
    };

    PongState {
        ball: Ball {
            x: width / 2.0,
            y: height / 2.0,
            vx: config.ball_speed,
            vy: config.ball_speed * config.serve_vy_factor,
            radius: config.ball_radius,
        },
        paddles: [
            paddle(config.paddle_inset, Rgb::CYAN),
            paddle(width - config.paddle_inset - config.paddle_width, Rgb::ORANGE),
        ],
        scores: [0, 0],
        width,
        height,
        running: false,
        outcome: None,
        win_score: config.win_score,
        serve_seed: config.seed.unwrap_or_else(|| rand::rng().random()),
        tick_count: 0,
    }
}

/// Advance the match by one frame.
pub fn tick(state: &PongState, config: &PongConfig) -> PongState {
    if !state.running || state.outcome.is_some() {
        return state.clone();
    }

    let mut next = state.clone();
    next.tick_count += 1;
    let (width, height) = (next.width, next.height);

    for paddle in &mut next.paddles {
        move_paddle(paddle, height, config.paddle_speed);
    }

    step_ball(&mut next.ball);
    let wall = bounce_walls(&mut next.ball, height);
    if wall != WallContact::None {
        tracing::trace!(?wall, vy = next.ball.vy, "Wall bounce");
    }

    for (side, paddle) in [Side::Left, Side::Right].into_iter().zip(&next.paddles) {
        if paddle_hit(&mut next.ball, paddle, side, config) {
            tracing::trace!(?side, vx = next.ball.vx, vy = next.ball.vy, "Paddle hit");
        }
    }

    if let Some(scorer) = scoring_side(&next.ball, width) {
        next.scores[scorer.index()] += 1;
        tracing::debug!(?scorer, scores = ?next.scores, "Point scored");
        next.serve_seed = serve(
            &mut next.ball,
            width,
            height,
            scorer.opponent(),
            next.serve_seed,
            config,
        );
    }

    if let Some(outcome) = check_winner(next.scores, next.win_score) {
        next.outcome = Some(outcome);
        next.running = false;
        tracing::info!(?outcome, scores = ?next.scores, ticks = next.tick_count, "Pong match complete");
    }

    next
}
