pub mod config;
pub mod keymap;
pub mod render;
pub mod runner;
pub mod script;
pub mod session;

pub use config::{GameKind, HostConfig};
pub use runner::{Controls, LightCycleControls, MatchSummary, PongControls, RoundSummary, run_match};
pub use script::InputScript;
pub use session::{Action, Session};
