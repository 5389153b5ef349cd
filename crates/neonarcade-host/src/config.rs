use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use neonarcade_core::{Viewport, rate_interval};
use neonarcade_core::config::{ConfigError, load_or_default, parse_toml};

/// Which game the host runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    /// Light cycles, two teams of two.
    #[default]
    Lightcycles,
    /// Light cycles, one against one.
    Duel,
    Pong,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lightcycles => write!(f, "lightcycles"),
            Self::Duel => write!(f, "duel"),
            Self::Pong => write!(f, "pong"),
        }
    }
}

impl FromStr for GameKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lightcycles" | "teams" => Ok(Self::Lightcycles),
            "duel" => Ok(Self::Duel),
            "pong" => Ok(Self::Pong),
            other => Err(ConfigError::Invalid {
                field: "game",
                message: format!("unknown game '{other}' (expected lightcycles, duel or pong)"),
            }),
        }
    }
}

/// Host configuration, loaded from `config/neonarcade.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub width: u32,
    pub height: u32,
    /// Display refresh rate the frame loop emulates.
    pub refresh_hz: f32,
    pub game: GameKind,
    /// Rounds to play before the match ends.
    pub rounds: u32,
    /// Hard frame budget; the match stops here even if rounds remain.
    pub max_frames: u64,
    /// Press the action key at the start and after every round.
    pub auto_start: bool,
    /// Pace frames on the wall clock. When false, frames run back to back
    /// with a nominal elapsed time of one refresh interval.
    pub realtime: bool,
    /// TOML file of timed key events to replay.
    pub script: Option<PathBuf>,
    /// Print the final frame as text.
    pub render_final: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            refresh_hz: 60.0,
            game: GameKind::Lightcycles,
            rounds: 3,
            max_frames: 60 * 60 * 5,
            auto_start: true,
            realtime: true,
            script: None,
            render_final: true,
        }
    }
}

impl HostConfig {
    /// Load config from `NEONARCADE_CONFIG` or `config/neonarcade.toml`, then
    /// apply env var overrides.
    pub fn load() -> Self {
        let mut config: Self = load_or_default("NEONARCADE_CONFIG", "config/neonarcade.toml");

        if let Ok(game) = std::env::var("NEONARCADE_GAME")
            && !game.is_empty()
        {
            match game.parse() {
                Ok(kind) => config.game = kind,
                Err(e) => tracing::warn!("NEONARCADE_GAME ignored: {e}"),
            }
        }
        if let Ok(val) = std::env::var("NEONARCADE_ROUNDS")
            && let Ok(n) = val.parse::<u32>()
        {
            config.rounds = n;
        }

        config
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_toml(contents, "host config")
    }

    /// Apply `--key=value` command line overrides.
    pub fn apply_args<I>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        for arg in args {
            if let Some(v) = arg.strip_prefix("--game=") {
                self.game = v.parse()?;
            } else if let Some(v) = arg.strip_prefix("--rounds=") {
                self.rounds = parse_arg("rounds", v)?;
            } else if let Some(v) = arg.strip_prefix("--max-frames=") {
                self.max_frames = parse_arg("max_frames", v)?;
            } else if let Some(v) = arg.strip_prefix("--width=") {
                self.width = parse_arg("width", v)?;
            } else if let Some(v) = arg.strip_prefix("--height=") {
                self.height = parse_arg("height", v)?;
            } else if let Some(v) = arg.strip_prefix("--script=") {
                self.script = Some(PathBuf::from(v));
            } else if arg == "--fast" {
                self.realtime = false;
            } else if arg == "--no-render" {
                self.render_final = false;
            } else {
                return Err(ConfigError::Invalid {
                    field: "argument",
                    message: format!("unrecognized argument '{arg}'"),
                });
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid {
                field: "viewport",
                message: format!("{}x{} has no area", self.width, self.height),
            });
        }
        if rate_interval(self.refresh_hz).is_none() {
            return Err(ConfigError::Invalid {
                field: "refresh_hz",
                message: format!("{} is not a usable rate", self.refresh_hz),
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::Invalid {
                field: "rounds",
                message: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// One refresh period. An unusable `refresh_hz` falls back to 60 Hz.
    pub fn frame_interval(&self) -> Duration {
        rate_interval(self.refresh_hz).unwrap_or(Duration::from_nanos(16_666_667))
    }
}

fn parse_arg<T: FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        field,
        message: format!("'{value}' is not a valid number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HostConfig::default();
        assert_eq!(cfg.viewport(), Viewport::new(1280, 720));
        assert_eq!(cfg.game, GameKind::Lightcycles);
        assert_eq!(cfg.rounds, 3);
        assert!(cfg.script.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_minimal_toml() {
        let cfg = HostConfig::from_toml_str(
            r#"
game = "pong"
rounds = 1
script = "scripts/serve.toml"
"#,
        )
        .unwrap();
        assert_eq!(cfg.game, GameKind::Pong);
        assert_eq!(cfg.rounds, 1);
        assert_eq!(cfg.script, Some(PathBuf::from("scripts/serve.toml")));
        assert_eq!(cfg.width, 1280);
    }

    #[test]
    fn args_override_fields() {
        let mut cfg = HostConfig::default();
        cfg.apply_args(
            ["--game=duel", "--rounds=5", "--fast", "--width=640"]
                .into_iter()
                .map(String::from),
        )
        .unwrap();
        assert_eq!(cfg.game, GameKind::Duel);
        assert_eq!(cfg.rounds, 5);
        assert!(!cfg.realtime);
        assert_eq!(cfg.width, 640);
    }

    #[test]
    fn bad_args_rejected() {
        let mut cfg = HostConfig::default();
        assert!(cfg.apply_args(["--game=chess".to_string()]).is_err());
        assert!(cfg.apply_args(["--rounds=many".to_string()]).is_err());
        assert!(cfg.apply_args(["--verbose".to_string()]).is_err());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let cfg = HostConfig {
            width: 0,
            ..HostConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = HostConfig {
            refresh_hz: 0.0,
            ..HostConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = HostConfig {
            rounds: 0,
            ..HostConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn vanishing_refresh_rate_is_rejected_without_panicking() {
        let cfg = HostConfig {
            refresh_hz: 1e-20,
            ..HostConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid { field: "refresh_hz", .. })
        ));
        assert_eq!(cfg.frame_interval(), Duration::from_nanos(16_666_667));
    }

    #[test]
    fn game_kind_display_roundtrips() {
        for kind in [GameKind::Lightcycles, GameKind::Duel, GameKind::Pong] {
            assert_eq!(kind.to_string().parse::<GameKind>().unwrap(), kind);
        }
    }
}
