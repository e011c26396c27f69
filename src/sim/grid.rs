//! Grid geometry: cells, directions and toroidal wrap
//!
//! The grid is `GRID_SIZE` x `GRID_SIZE` with (0, 0) in the top-left corner
//! and y growing downward. Leaving one edge re-enters from the opposite one.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIZE;

/// One grid square, `0 <= x, y < GRID_SIZE`
pub type Cell = IVec2;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    #[cfg(test)]
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180-degree turn from this direction
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// Unit offset of one step in this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Next direction clockwise (Up -> Right -> Down -> Left)
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

/// Wrap a cell onto the grid on both axes
#[inline]
pub fn wrap(cell: Cell) -> Cell {
    cell.rem_euclid(IVec2::splat(GRID_SIZE))
}

/// Cell one step from `cell` in `direction`, wrapped
#[inline]
pub fn step(cell: Cell, direction: Direction) -> Cell {
    wrap(cell + direction.delta())
}

/// Center of the grid (snake spawn/reset cell)
#[inline]
pub fn center() -> Cell {
    IVec2::splat(GRID_SIZE / 2)
}

/// True if the cell lies on the grid
#[inline]
pub fn in_bounds(cell: Cell) -> bool {
    (0..GRID_SIZE).contains(&cell.x) && (0..GRID_SIZE).contains(&cell.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::Down.delta(), IVec2::new(0, 1));
        assert_eq!(Direction::Left.delta(), IVec2::new(-1, 0));
        assert_eq!(Direction::Right.delta(), IVec2::new(1, 0));
    }

    #[test]
    fn test_wrap_edges() {
        let last = GRID_SIZE - 1;
        assert_eq!(step(IVec2::new(last, 3), Direction::Right), IVec2::new(0, 3));
        assert_eq!(step(IVec2::new(0, 3), Direction::Left), IVec2::new(last, 3));
        assert_eq!(step(IVec2::new(7, 0), Direction::Up), IVec2::new(7, last));
        assert_eq!(step(IVec2::new(7, last), Direction::Down), IVec2::new(7, 0));
    }

    #[test]
    fn test_center_in_bounds() {
        assert_eq!(center(), IVec2::new(12, 12));
        assert!(in_bounds(center()));
        assert!(!in_bounds(IVec2::new(GRID_SIZE, 0)));
        assert!(!in_bounds(IVec2::new(0, -1)));
    }

    #[test]
    fn test_turn_right_cycles() {
        let mut d = Direction::Up;
        for _ in 0..4 {
            d = d.turn_right();
        }
        assert_eq!(d, Direction::Up);
        assert_eq!(Direction::Up.turn_right(), Direction::Right);
    }
}
