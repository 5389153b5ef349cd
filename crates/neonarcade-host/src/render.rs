use std::fmt::Write;

use neonarcade_core::render::Renderer;
use neonarcade_lightcycles::LightCycleState;
use neonarcade_pong::PongState;

const TRAIL_GLYPHS: [char; 4] = ['a', 'b', 'c', 'd'];
const HEAD_GLYPHS: [char; 4] = ['1', '2', '3', '4'];

/// Draws states as plain text, one character per cell.
#[derive(Debug)]
pub struct AsciiRenderer {
    /// Pong table size in characters; the grid game draws at grid size.
    pub columns: usize,
    pub rows: usize,
    frame: String,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(64, 20)
    }
}

impl AsciiRenderer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(2),
            rows: rows.max(2),
            frame: String::new(),
        }
    }

    /// The last frame drawn.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    fn flush(&mut self, header: String, canvas: Vec<Vec<char>>) {
        self.frame.clear();
        self.frame.push_str(&header);
        self.frame.push('\n');
        for row in canvas {
            self.frame.extend(row);
            self.frame.push('\n');
        }
    }
}

impl Renderer<LightCycleState> for AsciiRenderer {
    fn draw(&mut self, state: &LightCycleState) {
        let (w, h) = (state.grid_width as usize, state.grid_height as usize);
        let mut canvas = vec![vec!['.'; w]; h];
        let mut plot = |x: i32, y: i32, c: char| {
            if x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h {
                canvas[y as usize][x as usize] = c;
            }
        };
        for (idx, cycle) in state.cycles.iter().enumerate() {
            let slot = idx % TRAIL_GLYPHS.len();
            for cell in &cycle.trail {
                plot(cell.x, cell.y, TRAIL_GLYPHS[slot]);
            }
            let head = if cycle.alive { HEAD_GLYPHS[slot] } else { 'X' };
            plot(cycle.pos.x, cycle.pos.y, head);
        }

        let mut header = format!("cyan {} : {} orange", state.scores[0], state.scores[1]);
        if let Some(outcome) = state.outcome {
            let _ = write!(header, "  [{outcome:?}]");
        } else if !state.running {
            header.push_str("  [press space]");
        }
        self.flush(header, canvas);
    }
}

impl Renderer<PongState> for AsciiRenderer {
    fn draw(&mut self, state: &PongState) {
        let (cols, rows) = (self.columns, self.rows);
        let sx = cols as f32 / state.width.max(1.0);
        let sy = rows as f32 / state.height.max(1.0);
        let col = |x: f32| ((x * sx) as usize).min(cols - 1);
        let row = |y: f32| ((y * sy) as usize).min(rows - 1);

        let mut canvas = vec![vec![' '; cols]; rows];
        for line in canvas.iter_mut() {
            line[cols / 2] = ':';
        }
        for paddle in &state.paddles {
            let c = col(paddle.x.max(0.0));
            let top = row(paddle.y.max(0.0));
            let bottom = row((paddle.y + paddle.height).max(0.0));
            for line in canvas.iter_mut().take(bottom + 1).skip(top) {
                line[c] = '|';
            }
        }
        let ball = &state.ball;
        if ball.x >= 0.0 && ball.y >= 0.0 {
            canvas[row(ball.y)][col(ball.x)] = 'o';
        }

        let mut header = format!("{:>3} : {:<3}", state.scores[0], state.scores[1]);
        if let Some(outcome) = state.outcome {
            let _ = write!(header, "  [{outcome:?}]");
        } else if !state.running {
            header.push_str("  [press space]");
        }
        self.flush(header, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonarcade_core::{ArcadeGame, Viewport};
    use neonarcade_lightcycles::LightCycles;
    use neonarcade_lightcycles::config::LightCycleConfig;
    use neonarcade_pong::Pong;
    use neonarcade_pong::config::PongConfig;

    #[test]
    fn lightcycle_grid_shows_heads_and_trails() {
        let game = LightCycles::with_config(LightCycleConfig::duel());
        let state = game.start(&game.create_state(Viewport::new(160, 80)));
        let state = game.tick(&game.tick(&state));

        let mut renderer = AsciiRenderer::default();
        renderer.draw(&state);
        let lines: Vec<&str> = renderer.frame().lines().collect();
        assert_eq!(lines[0], "cyan 0 : 0 orange");
        assert_eq!(lines.len(), 1 + 10);
        // Duel spawns at (4,5) and (16,5) on a 20x10 grid.
        assert_eq!(&lines[1 + 5][4..7], "aa1");
        assert_eq!(&lines[1 + 5][14..17], "2bb");
    }

    #[test]
    fn idle_state_prompts_for_start() {
        let game = LightCycles::default();
        let state = game.create_state(Viewport::new(160, 160));
        let mut renderer = AsciiRenderer::default();
        renderer.draw(&state);
        assert!(renderer.frame().lines().next().unwrap().ends_with("[press space]"));
    }

    #[test]
    fn pong_table_has_paddles_and_ball() {
        let game = Pong::with_config(PongConfig::with_seed(1));
        let state = game.create_state(Viewport::new(640, 200));
        let mut renderer = AsciiRenderer::new(64, 20);
        renderer.draw(&state);
        let lines: Vec<&str> = renderer.frame().lines().collect();
        assert_eq!(lines.len(), 21);
        let body = &lines[1..];
        assert_eq!(body[10].chars().nth(32), Some('o'));
        assert!(body.iter().filter(|l| l.chars().nth(3) == Some('|')).count() >= 8);
        assert!(body.iter().all(|l| l.chars().nth(60) != Some('o')));
    }
}
