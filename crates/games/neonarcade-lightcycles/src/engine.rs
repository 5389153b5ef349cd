use neonarcade_core::Viewport;

use crate::arena::{create_arena, grid_size};
use crate::collision::{Crash, TrailField, check_head, head_on_collisions};
use crate::config::LightCycleConfig;
use crate::scoring::{award, resolve_round};
use crate::{Cycle, LightCycleState};

/// Build the initial round state for a viewport.
pub fn create_state(viewport: Viewport, config: &LightCycleConfig) -> LightCycleState {
    let (grid_width, grid_height) = grid_size(viewport, config.cell_size);
    let arena = create_arena(grid_width, grid_height, config.variant, &config.spawn);

    let cycles = arena
        .spawn_points
        .into_iter()
        .map(|sp| Cycle {
            pos: sp.pos,
            direction: sp.direction,
            trail: Vec::new(),
            alive: true,
            team: sp.team,
            color: sp.color,
            crash: None,
        })
        .collect();

    LightCycleState {
        grid_width,
        grid_height,
        cell_size: config.cell_size.max(1),
        cycles,
        scores: [0, 0],
        running: false,
        outcome: None,
        tick_rate_hz: config.tick_rate_hz,
        tick_count: 0,
    }
}

/// Advance the round by one step. All cycles move simultaneously; iteration
/// order never affects who survives.
pub fn tick(state: &LightCycleState) -> LightCycleState {
    if !state.running || state.outcome.is_some() {
        return state.clone();
    }

    let mut next = state.clone();
    next.tick_count += 1;
    let (width, height) = (next.grid_width, next.grid_height);

    // Trail append happens before the move, so the new head is in no trail yet.
    for cycle in next.cycles.iter_mut().filter(|c| c.alive) {
        cycle.trail.push(cycle.pos);
        cycle.pos = cycle.pos.step(cycle.direction);
    }

    let field = TrailField::from_cycles(&next.cycles, width, height);
    for (idx, cycle) in next.cycles.iter_mut().enumerate() {
        if !cycle.alive {
            continue;
        }
        if let Some(crash) = check_head(cycle.pos, &field, width, height) {
            tracing::debug!(cycle = idx, ?crash, pos = ?cycle.pos, "Cycle crashed");
            cycle.alive = false;
            cycle.crash = Some(crash);
        }
    }

    for idx in head_on_collisions(&next.cycles) {
        tracing::debug!(cycle = idx, pos = ?next.cycles[idx].pos, "Head-on collision");
        next.cycles[idx].alive = false;
        next.cycles[idx].crash = Some(Crash::HeadOn);
    }

    if let Some(outcome) = resolve_round(&next.cycles) {
        award(&mut next.scores, outcome);
        next.outcome = Some(outcome);
        tracing::info!(
            ?outcome,
            scores = ?next.scores,
            ticks = next.tick_count,
            "Light cycle round complete"
        );
    }

    next
}
