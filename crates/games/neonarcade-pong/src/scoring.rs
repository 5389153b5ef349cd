use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use neonarcade_core::Outcome;

use crate::config::PongConfig;
use crate::{Ball, Side};

/// Which side scores, if the ball has left the table horizontally.
pub fn scoring_side(ball: &Ball, width: f32) -> Option<Side> {
    if ball.x < 0.0 {
        Some(Side::Right)
    } else if ball.x > width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Re-serve from the centre toward `toward` with a random vertical speed in
/// `[-0.5, 0.5) · ball_speed`. Returns the seed for the next serve.
pub fn serve(
    ball: &mut Ball,
    width: f32,
    height: f32,
    toward: Side,
    seed: u64,
    config: &PongConfig,
) -> u64 {
    let mut rng = StdRng::seed_from_u64(seed);
    ball.x = width / 2.0;
    ball.y = height / 2.0;
    ball.vx = match toward {
        Side::Left => -config.ball_speed,
        Side::Right => config.ball_speed,
    };
    ball.vy = rng.random_range(-0.5f32..0.5) * config.ball_speed;
    rng.random::<u64>()
}

/// The first side at or above the win score, if any.
pub fn check_winner(scores: [u32; 2], win_score: u32) -> Option<Outcome<Side>> {
    [Side::Left, Side::Right]
        .into_iter()
        .find(|side| scores[side.index()] >= win_score)
        .map(Outcome::Winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32) -> Ball {
        Ball {
            x,
            y: 50.0,
            vx: 5.0,
            vy: 0.0,
            radius: 8.0,
        }
    }

    #[test]
    fn scoring_sides() {
        assert_eq!(scoring_side(&ball_at(-0.1), 600.0), Some(Side::Right));
        assert_eq!(scoring_side(&ball_at(600.1), 600.0), Some(Side::Left));
        assert_eq!(scoring_side(&ball_at(0.0), 600.0), None);
        assert_eq!(scoring_side(&ball_at(600.0), 600.0), None);
    }

    #[test]
    fn serve_heads_toward_conceding_side() {
        let cfg = PongConfig::default();
        let mut ball = ball_at(-3.0);
        serve(&mut ball, 600.0, 400.0, Side::Left, 7, &cfg);
        assert_eq!((ball.x, ball.y), (300.0, 200.0));
        assert_eq!(ball.vx, -5.0);
        assert!((-2.5..2.5).contains(&ball.vy));

        serve(&mut ball, 600.0, 400.0, Side::Right, 7, &cfg);
        assert_eq!(ball.vx, 5.0);
    }

    #[test]
    fn serve_is_reproducible() {
        let cfg = PongConfig::default();
        let mut a = ball_at(0.0);
        let mut b = ball_at(0.0);
        let next_a = serve(&mut a, 600.0, 400.0, Side::Left, 99, &cfg);
        let next_b = serve(&mut b, 600.0, 400.0, Side::Left, 99, &cfg);
        assert_eq!(a, b);
        assert_eq!(next_a, next_b);
        assert_ne!(next_a, 99);
    }

    #[test]
    fn winner_at_threshold() {
        assert_eq!(check_winner([6, 3], 7), None);
        assert_eq!(check_winner([7, 3], 7), Some(Outcome::Winner(Side::Left)));
        assert_eq!(check_winner([2, 9], 7), Some(Outcome::Winner(Side::Right)));
    }
}
