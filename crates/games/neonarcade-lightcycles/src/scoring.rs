use neonarcade_core::Outcome;

use crate::{Cycle, Team};

/// Decide the round from the cycles' liveness after a tick.
///
/// Returns `None` while both teams still have a live member. A lone surviving
/// team wins; when neither survives the round is a draw.
pub fn resolve_round(cycles: &[Cycle]) -> Option<Outcome<Team>> {
    let alive = |team: Team| cycles.iter().any(|c| c.team == team && c.alive);
    match (alive(Team::Cyan), alive(Team::Orange)) {
        (true, true) => None,
        (true, false) => Some(Outcome::Winner(Team::Cyan)),
        (false, true) => Some(Outcome::Winner(Team::Orange)),
        (false, false) => Some(Outcome::Draw),
    }
}

/// Award the round: the winning team gains one point, a draw awards nothing.
pub fn award(scores: &mut [u32; 2], outcome: Outcome<Team>) {
    if let Outcome::Winner(team) = outcome {
        scores[team.index()] += 1;
    }
}
