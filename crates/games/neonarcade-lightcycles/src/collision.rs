use serde::{Deserialize, Serialize};

use neonarcade_core::{EntityIndex, GridPos};

use crate::Cycle;

/// Why a cycle crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    /// Left the grid.
    Boundary,
    /// Ran into a trail cell; `owner` may be the crashed cycle itself.
    Trail { owner: EntityIndex },
    /// Shared its new cell with one or more other cycles.
    HeadOn,
}

/// Occupancy grid built from the union of every cycle's trail.
pub struct TrailField {
    width: u32,
    height: u32,
    owners: Vec<Option<EntityIndex>>,
}

impl TrailField {
    pub fn from_cycles(cycles: &[Cycle], width: u32, height: u32) -> Self {
        let mut owners = vec![None; width as usize * height as usize];
        for (idx, cycle) in cycles.iter().enumerate() {
            for cell in &cycle.trail {
                if cell.in_bounds(width, height) {
                    owners[cell.index(width)] = Some(idx);
                }
            }
        }
        Self {
            width,
            height,
            owners,
        }
    }

    /// Owner of the trail occupying `cell`, if any.
    pub fn owner_at(&self, cell: GridPos) -> Option<EntityIndex> {
        if !cell.in_bounds(self.width, self.height) {
            return None;
        }
        self.owners[cell.index(self.width)]
    }

    pub fn contains(&self, cell: GridPos) -> bool {
        self.owner_at(cell).is_some()
    }
}

/// Check a cycle's new head against the grid bounds, then the trail field.
/// The boundary check short-circuits the trail check.
pub fn check_head(head: GridPos, field: &TrailField, width: u32, height: u32) -> Option<Crash> {
    if !head.in_bounds(width, height) {
        return Some(Crash::Boundary);
    }
    field.owner_at(head).map(|owner| Crash::Trail { owner })
}

/// Indices of alive cycles that share their cell with another alive cycle.
/// Every occupant of a contested cell is included, regardless of team.
pub fn head_on_collisions(cycles: &[Cycle]) -> Vec<EntityIndex> {
    let alive: Vec<EntityIndex> = cycles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.alive)
        .map(|(i, _)| i)
        .collect();

    let mut hit = vec![false; cycles.len()];
    for (n, &i) in alive.iter().enumerate() {
        for &j in &alive[n + 1..] {
            if cycles[i].pos == cycles[j].pos {
                hit[i] = true;
                hit[j] = true;
            }
        }
    }

    hit.iter()
        .enumerate()
        .filter(|(_, h)| **h)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Team;
    use neonarcade_core::{Direction, Rgb};

    fn cycle_at(x: i32, y: i32, trail: &[(i32, i32)]) -> Cycle {
        Cycle {
            pos: GridPos::new(x, y),
            direction: Direction::Right,
            trail: trail.iter().map(|&(x, y)| GridPos::new(x, y)).collect(),
            alive: true,
            team: Team::Cyan,
            color: Rgb::CYAN,
            crash: None,
        }
    }

    #[test]
    fn field_records_owners() {
        let cycles = vec![cycle_at(3, 0, &[(1, 0), (2, 0)]), cycle_at(0, 5, &[(0, 4)])];
        let field = TrailField::from_cycles(&cycles, 10, 10);
        assert_eq!(field.owner_at(GridPos::new(2, 0)), Some(0));
        assert_eq!(field.owner_at(GridPos::new(0, 4)), Some(1));
        assert!(!field.contains(GridPos::new(3, 0)), "heads are not trail");
        assert!(!field.contains(GridPos::new(-1, 0)));
    }

    #[test]
    fn boundary_short_circuits() {
        let field = TrailField::from_cycles(&[], 10, 10);
        assert_eq!(
            check_head(GridPos::new(10, 3), &field, 10, 10),
            Some(Crash::Boundary)
        );
        assert_eq!(
            check_head(GridPos::new(3, -1), &field, 10, 10),
            Some(Crash::Boundary)
        );
        assert_eq!(check_head(GridPos::new(3, 3), &field, 10, 10), None);
    }

    #[test]
    fn own_trail_is_fatal() {
        let cycles = vec![cycle_at(1, 1, &[(1, 1), (2, 1)])];
        let field = TrailField::from_cycles(&cycles, 10, 10);
        assert_eq!(
            check_head(GridPos::new(2, 1), &field, 10, 10),
            Some(Crash::Trail { owner: 0 })
        );
    }

    #[test]
    fn three_way_head_on_hits_everyone() {
        let mut cycles = vec![cycle_at(5, 5, &[]), cycle_at(5, 5, &[]), cycle_at(5, 5, &[])];
        cycles.push(cycle_at(1, 1, &[]));
        assert_eq!(head_on_collisions(&cycles), vec![0, 1, 2]);
    }

    #[test]
    fn dead_cycles_do_not_collide_head_on() {
        let mut cycles = vec![cycle_at(5, 5, &[]), cycle_at(5, 5, &[])];
        cycles[1].alive = false;
        assert!(head_on_collisions(&cycles).is_empty());
    }
}
