use std::path::Path;

use serde::{Deserialize, Serialize};

use neonarcade_core::config::{ConfigError, parse_toml, read_toml};

/// How a scripted key event touches the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEdge {
    /// Down and up within the same frame.
    #[default]
    Press,
    Down,
    Up,
}

/// One key event, fired at the start of `frame`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: String,
    #[serde(default)]
    pub edge: KeyEdge,
}

/// Timed key events replayed in place of a keyboard.
///
/// ```toml
/// [[keys]]
/// frame = 30
/// key = "KeyW"
/// edge = "down"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputScript {
    pub keys: Vec<ScriptedKey>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_toml::<Self>(path).map(Self::sorted)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_toml::<Self>(contents, "input script").map(Self::sorted)
    }

    pub fn from_keys(keys: Vec<ScriptedKey>) -> Self {
        Self { keys }.sorted()
    }

    // Stable, so events sharing a frame keep file order.
    fn sorted(mut self) -> Self {
        self.keys.sort_by_key(|k| k.frame);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn player(&self) -> ScriptPlayer<'_> {
        ScriptPlayer {
            keys: &self.keys,
            next: 0,
        }
    }
}

/// Cursor handing out the events due at each frame.
pub struct ScriptPlayer<'a> {
    keys: &'a [ScriptedKey],
    next: usize,
}

impl<'a> ScriptPlayer<'a> {
    /// Events scheduled at or before `frame` that have not been handed out.
    pub fn due(&mut self, frame: u64) -> &'a [ScriptedKey] {
        let start = self.next;
        while self.next < self.keys.len() && self.keys[self.next].frame <= frame {
            self.next += 1;
        }
        &self.keys[start..self.next]
    }
}
