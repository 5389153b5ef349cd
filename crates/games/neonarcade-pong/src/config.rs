use serde::{Deserialize, Serialize};

use neonarcade_core::config::{ConfigError, load_or_default, parse_toml};

/// Data-driven configuration for pong. Distances are in viewport pixels,
/// speeds in pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongConfig {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall.
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    /// Horizontal speed of a fresh serve.
    pub ball_speed: f32,
    pub ball_radius: f32,
    /// Vertical share of `ball_speed` on the opening serve.
    pub serve_vy_factor: f32,
    /// Scale applied to the paddle hit offset to get the return's vertical speed.
    pub spin: f32,
    /// Horizontal speed multiplier on every paddle hit.
    pub acceleration: f32,
    /// Upper bound on horizontal speed. Zero or less disables the cap.
    pub max_ball_speed: f32,
    pub win_score: u32,
    /// Fixed serve seed for reproducible matches; random when unset.
    pub seed: Option<u64>,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            paddle_width: 12.0,
            paddle_height: 80.0,
            paddle_inset: 30.0,
            paddle_speed: 7.0,
            ball_speed: 5.0,
            ball_radius: 8.0,
            serve_vy_factor: 0.6,
            spin: 1.5,
            acceleration: 1.03,
            max_ball_speed: 20.0,
            win_score: 7,
            seed: None,
        }
    }
}

impl PongConfig {
    /// Load config from `NEONARCADE_PONG_CONFIG` or `config/pong.toml`,
    /// falling back to defaults.
    pub fn load() -> Self {
        load_or_default("NEONARCADE_PONG_CONFIG", "config/pong.toml")
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_toml(contents, "pong config")
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_table() {
        let cfg = PongConfig::default();
        assert_eq!(cfg.paddle_width, 12.0);
        assert_eq!(cfg.paddle_height, 80.0);
        assert_eq!(cfg.paddle_speed, 7.0);
        assert_eq!(cfg.ball_speed, 5.0);
        assert_eq!(cfg.ball_radius, 8.0);
        assert_eq!(cfg.win_score, 7);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = PongConfig::from_toml_str(
            r#"
            win_score = 11
            max_ball_speed = 0.0
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(cfg.win_score, 11);
        assert_eq!(cfg.max_ball_speed, 0.0);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.ball_speed, 5.0);
    }

    #[test]
    fn wrong_type_is_parse_error() {
        assert!(PongConfig::from_toml_str("win_score = \"seven\"").is_err());
    }
}
