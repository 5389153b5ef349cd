use std::collections::HashSet;

use neonarcade_core::{Direction, Intent};
use neonarcade_lightcycles::config::Variant;
use neonarcade_pong::Steer;

/// Key that starts, resumes, or restarts a round.
pub const ACTION_KEY: &str = "Space";

/// Held keys, updated from key events.
#[derive(Debug, Default)]
pub struct KeyState {
    down: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key down event. Returns false for auto-repeat of a held key.
    pub fn on_key_down(&mut self, code: &str) -> bool {
        self.down.insert(code.to_string())
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.down.remove(code);
    }

    pub fn is_down(&self, code: &str) -> bool {
        self.down.contains(code)
    }
}

/// Four keys steering one light cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: &'static str,
    pub down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl DirectionKeys {
    pub fn direction(&self, code: &str) -> Option<Direction> {
        if code == self.up {
            Some(Direction::Up)
        } else if code == self.down {
            Some(Direction::Down)
        } else if code == self.left {
            Some(Direction::Left)
        } else if code == self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

pub const WASD: DirectionKeys = DirectionKeys {
    up: "KeyW",
    down: "KeyS",
    left: "KeyA",
    right: "KeyD",
};

pub const IJKL: DirectionKeys = DirectionKeys {
    up: "KeyI",
    down: "KeyK",
    left: "KeyJ",
    right: "KeyL",
};

pub const ARROWS: DirectionKeys = DirectionKeys {
    up: "ArrowUp",
    down: "ArrowDown",
    left: "ArrowLeft",
    right: "ArrowRight",
};

pub const NUMPAD: DirectionKeys = DirectionKeys {
    up: "Numpad8",
    down: "Numpad5",
    left: "Numpad4",
    right: "Numpad6",
};

/// Per-player bindings, indexed like the state's cycles.
pub fn lightcycle_keys(variant: Variant) -> Vec<DirectionKeys> {
    match variant {
        Variant::Duel => vec![WASD, ARROWS],
        Variant::Teams => vec![WASD, IJKL, ARROWS, NUMPAD],
    }
}

/// The steering intent a key press produces, if any player owns the key.
pub fn direction_intent(bindings: &[DirectionKeys], code: &str) -> Option<Intent<Direction>> {
    bindings
        .iter()
        .enumerate()
        .find_map(|(player, keys)| keys.direction(code).map(|dir| Intent::new(player, dir)))
}

/// Two held keys moving one paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: &'static str,
    pub down: &'static str,
}

pub const PONG_KEYS: [PaddleKeys; 2] = [
    PaddleKeys {
        up: "KeyW",
        down: "KeyS",
    },
    PaddleKeys {
        up: "ArrowUp",
        down: "ArrowDown",
    },
];

/// Paddle steer from held keys. Up wins when both are held.
pub fn paddle_steer(keys: &KeyState, binding: &PaddleKeys) -> Steer {
    if keys.is_down(binding.up) {
        Steer::Up
    } else if keys.is_down(binding.down) {
        Steer::Down
    } else {
        Steer::Idle
    }
}
