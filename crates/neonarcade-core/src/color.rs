use serde::{Deserialize, Serialize};

/// Display color attached to an entity. The core never reads it; renderers do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::CYAN
    }
}

impl Rgb {
    pub const CYAN: Rgb = Rgb {
        r: 0,
        g: 229,
        b: 255,
    };
    pub const MINT: Rgb = Rgb {
        r: 0,
        g: 229,
        b: 160,
    };
    pub const ORANGE: Rgb = Rgb {
        r: 255,
        g: 109,
        b: 0,
    };
    pub const ROSE: Rgb = Rgb {
        r: 255,
        g: 45,
        b: 109,
    };
}
