use neonarcade_core::geometry::{WallContact, clamp_span, reflect_between, spans_overlap};

use crate::config::PongConfig;
use crate::{Ball, Paddle, Side};

/// Move a paddle by its steer and keep it fully inside `[0, height]`.
pub fn move_paddle(paddle: &mut Paddle, height: f32, speed: f32) {
    paddle.y = clamp_span(
        paddle.y + paddle.steer.dy() * speed,
        paddle.height,
        0.0,
        height,
    );
}

/// One Euler step, no substepping.
pub fn step_ball(ball: &mut Ball) {
    ball.x += ball.vx;
    ball.y += ball.vy;
}

/// Bounce off the top and bottom walls. Returns the wall touched, if any.
pub fn bounce_walls(ball: &mut Ball, height: f32) -> WallContact {
    let (y, vy, contact) = reflect_between(ball.y, ball.vy, ball.radius, 0.0, height);
    ball.y = y;
    ball.vy = vy;
    contact
}

/// Return the ball off `paddle` if they touch.
///
/// The ball is sent away from the paddle's side with a vertical speed set by
/// where it struck the face, sped up by `acceleration`, and snapped just
/// outside the face so the same hit cannot trigger again next tick.
pub fn paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side, config: &PongConfig) -> bool {
    let touching = spans_overlap(
        ball.x - ball.radius,
        ball.x + ball.radius,
        paddle.x,
        paddle.x + paddle.width,
    ) && ball.y >= paddle.y
        && ball.y <= paddle.y + paddle.height;
    if !touching {
        return false;
    }

    let away = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    let hit_offset = (ball.y - paddle.y) / paddle.height - 0.5;
    ball.vy = hit_offset * config.ball_speed * config.spin;
    ball.vx = away * cap_speed(ball.vx.abs() * config.acceleration, config.max_ball_speed);
    ball.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
    true
}

fn cap_speed(speed: f32, max: f32) -> f32 {
    if max > 0.0 { speed.min(max) } else { speed }
}
