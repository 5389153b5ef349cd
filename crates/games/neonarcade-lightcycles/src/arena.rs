use neonarcade_core::{Direction, GridPos, Rgb, Viewport};

use crate::Team;
use crate::config::{SpawnLayout, Variant};

/// A spawn cell with starting direction and team.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnPoint {
    pub pos: GridPos,
    pub direction: Direction,
    pub team: Team,
    pub color: Rgb,
}

/// Arena definition: grid size plus one spawn point per player.
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
    pub spawn_points: Vec<SpawnPoint>,
}

/// Grid dimensions for a viewport: `floor(width / cell) × floor(height / cell)`.
pub fn grid_size(viewport: Viewport, cell_size: u32) -> (u32, u32) {
    let cell = cell_size.max(1);
    (viewport.width / cell, viewport.height / cell)
}

fn fraction(extent: u32, share: f64) -> i32 {
    (extent as f64 * share).floor() as i32
}

/// Lay out the arena. The team facing right starts on the left column, the
/// team facing left mirrors it on the right column.
pub fn create_arena(width: u32, height: u32, variant: Variant, layout: &SpawnLayout) -> Arena {
    let left = fraction(width, layout.left_column);
    let right = fraction(width, layout.right_column);

    let spawn_points = match variant {
        Variant::Duel => {
            let row = fraction(height, layout.duel_row);
            vec![
                SpawnPoint {
                    pos: GridPos::new(left, row),
                    direction: Direction::Right,
                    team: Team::Cyan,
                    color: Rgb::CYAN,
                },
                SpawnPoint {
                    pos: GridPos::new(right, row),
                    direction: Direction::Left,
                    team: Team::Orange,
                    color: Rgb::ORANGE,
                },
            ]
        },
        Variant::Teams => {
            let top = fraction(height, layout.team_rows[0]);
            let bottom = fraction(height, layout.team_rows[1]);
            vec![
                SpawnPoint {
                    pos: GridPos::new(left, top),
                    direction: Direction::Right,
                    team: Team::Cyan,
                    color: Rgb::CYAN,
                },
                SpawnPoint {
                    pos: GridPos::new(left, bottom),
                    direction: Direction::Right,
                    team: Team::Cyan,
                    color: Rgb::MINT,
                },
                SpawnPoint {
                    pos: GridPos::new(right, top),
                    direction: Direction::Left,
                    team: Team::Orange,
                    color: Rgb::ORANGE,
                },
                SpawnPoint {
                    pos: GridPos::new(right, bottom),
                    direction: Direction::Left,
                    team: Team::Orange,
                    color: Rgb::ROSE,
                },
            ]
        },
    };

    Arena {
        width,
        height,
        spawn_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_floors() {
        assert_eq!(grid_size(Viewport::new(1280, 720), 8), (160, 90));
        assert_eq!(grid_size(Viewport::new(1285, 727), 8), (160, 90));
        assert_eq!(grid_size(Viewport::new(100, 100), 0), (100, 100));
    }

    #[test]
    fn teams_layout_positions() {
        let arena = create_arena(160, 90, Variant::Teams, &SpawnLayout::default());
        let cells: Vec<GridPos> = arena.spawn_points.iter().map(|s| s.pos).collect();
        assert_eq!(
            cells,
            vec![
                GridPos::new(32, 31),
                GridPos::new(32, 58),
                GridPos::new(128, 31),
                GridPos::new(128, 58),
            ]
        );
        assert_eq!(arena.spawn_points[0].team, Team::Cyan);
        assert_eq!(arena.spawn_points[1].team, Team::Cyan);
        assert_eq!(arena.spawn_points[2].team, Team::Orange);
        assert_eq!(arena.spawn_points[3].team, Team::Orange);
    }

    #[test]
    fn duel_layout_is_mirrored() {
        let arena = create_arena(100, 50, Variant::Duel, &SpawnLayout::default());
        assert_eq!(arena.spawn_points.len(), 2);
        let a = &arena.spawn_points[0];
        let b = &arena.spawn_points[1];
        assert_eq!(a.pos, GridPos::new(20, 25));
        assert_eq!(b.pos, GridPos::new(80, 25));
        assert_eq!(a.direction, Direction::Right);
        assert_eq!(b.direction, Direction::Left);
        assert_ne!(a.team, b.team);
    }

    #[test]
    fn spawn_points_face_each_other() {
        for variant in [Variant::Duel, Variant::Teams] {
            let arena = create_arena(200, 120, variant, &SpawnLayout::default());
            for sp in &arena.spawn_points {
                let facing_center = match sp.direction {
                    Direction::Right => sp.pos.x < 100,
                    Direction::Left => sp.pos.x > 100,
                    _ => false,
                };
                assert!(facing_center, "{sp:?} does not face the center");
                assert!(sp.pos.in_bounds(arena.width, arena.height));
            }
        }
    }
}
