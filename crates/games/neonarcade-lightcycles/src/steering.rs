use neonarcade_core::{Direction, EntityIndex, Intent, is_opposite};

use crate::LightCycleState;

/// A direction change is accepted iff the cycle exists, is alive, and the new
/// direction does not reverse its current one. Repeating the current
/// direction is accepted and has no effect.
pub fn can_steer(state: &LightCycleState, entity: EntityIndex, dir: Direction) -> bool {
    state
        .cycles
        .get(entity)
        .is_some_and(|c| c.alive && !is_opposite(c.direction, dir))
}

/// Apply a drained batch of direction intents in arrival order. Each intent is
/// validated against the direction left by earlier intents in the batch.
pub fn apply_intents(state: &LightCycleState, intents: &[Intent<Direction>]) -> LightCycleState {
    let mut next = state.clone();
    for intent in intents {
        if can_steer(&next, intent.entity, intent.action) {
            next.cycles[intent.entity].direction = intent.action;
        } else {
            tracing::debug!(
                entity = intent.entity,
                direction = ?intent.action,
                "Dropped invalid steering intent"
            );
        }
    }
    next
}
