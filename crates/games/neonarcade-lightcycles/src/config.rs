use serde::{Deserialize, Serialize};

use neonarcade_core::config::{ConfigError, load_or_default, parse_toml};

/// Which roster the arena is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Two players, one per team.
    Duel,
    /// Four players in two teams of two.
    #[default]
    Teams,
}

impl Variant {
    pub fn player_count(self) -> usize {
        match self {
            Variant::Duel => 2,
            Variant::Teams => 4,
        }
    }
}

/// Fractional spawn coordinates, as shares of the grid size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnLayout {
    /// Column of the team facing right.
    pub left_column: f64,
    /// Column of the team facing left.
    pub right_column: f64,
    /// Rows of the two members of each team in the team variant.
    pub team_rows: [f64; 2],
    /// Row of both players in the duel variant.
    pub duel_row: f64,
}

impl Default for SpawnLayout {
    fn default() -> Self {
        Self {
            left_column: 0.2,
            right_column: 0.8,
            team_rows: [0.35, 0.65],
            duel_row: 0.5,
        }
    }
}

/// Data-driven configuration for the light cycles game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightCycleConfig {
    /// Pixels per grid cell; the grid is the viewport divided by this.
    pub cell_size: u32,
    /// Simulation steps per second.
    pub tick_rate_hz: f32,
    pub variant: Variant,
    pub spawn: SpawnLayout,
}

impl Default for LightCycleConfig {
    fn default() -> Self {
        Self {
            cell_size: 8,
            tick_rate_hz: 60.0,
            variant: Variant::Teams,
            spawn: SpawnLayout::default(),
        }
    }
}

impl LightCycleConfig {
    /// Load config from `NEONARCADE_LIGHTCYCLES_CONFIG` or
    /// `config/lightcycles.toml`, falling back to defaults.
    pub fn load() -> Self {
        load_or_default("NEONARCADE_LIGHTCYCLES_CONFIG", "config/lightcycles.toml")
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_toml(contents, "lightcycles config")
    }

    pub fn duel() -> Self {
        Self {
            variant: Variant::Duel,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_arena() {
        let cfg = LightCycleConfig::default();
        assert_eq!(cfg.cell_size, 8);
        assert_eq!(cfg.tick_rate_hz, 60.0);
        assert_eq!(cfg.variant, Variant::Teams);
        assert_eq!(cfg.variant.player_count(), 4);
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = LightCycleConfig::from_toml_str(
            r#"
            variant = "duel"
            tick_rate_hz = 30.0

            [spawn]
            duel_row = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.variant, Variant::Duel);
        assert_eq!(cfg.tick_rate_hz, 30.0);
        assert_eq!(cfg.cell_size, 8);
        assert_eq!(cfg.spawn.duel_row, 0.25);
        assert_eq!(cfg.spawn.left_column, 0.2);
    }

    #[test]
    fn bad_variant_is_parse_error() {
        assert!(LightCycleConfig::from_toml_str("variant = \"free_for_all\"").is_err());
    }
}
