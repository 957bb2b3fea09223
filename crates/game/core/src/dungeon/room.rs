use rand::Rng;

use crate::state::Position;

/// Axis-aligned room used while carving a floor.
///
/// `(x1, y1)` and `(x2, y2)` are the wall corners; the walkable interior is
/// inset by one tile on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Walkable tiles of the room.
    pub fn inner(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y1 + 1..self.y2)
            .flat_map(move |y| (self.x1 + 1..self.x2).map(move |x| Position::new(x, y)))
    }

    pub fn contains_inner(&self, position: Position) -> bool {
        position.x > self.x1 && position.x < self.x2 && position.y > self.y1 && position.y < self.y2
    }

    /// Inclusive overlap test: rooms that share a wall also intersect.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Uniform random interior tile.
    pub fn random_inner<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(self.x1 + 1..self.x2),
            rng.gen_range(self.y1 + 1..self.y2),
        )
    }
}

/// Tiles of an L-shaped corridor from `start` to `end`, both included.
///
/// With `horizontal_first` the corridor runs along `start.y` to the elbow at
/// `(end.x, start.y)`, otherwise along `start.x` to `(start.x, end.y)`.
pub fn tunnel_between(start: Position, end: Position, horizontal_first: bool) -> Vec<Position> {
    let corner = if horizontal_first {
        Position::new(end.x, start.y)
    } else {
        Position::new(start.x, end.y)
    };
    let mut tiles = straight_line(start, corner);
    tiles.extend(straight_line(corner, end).into_iter().skip(1));
    tiles
}

/// Axis-aligned segment between two points sharing a row or column.
fn straight_line(from: Position, to: Position) -> Vec<Position> {
    debug_assert!(from.x == to.x || from.y == to.y);
    let steps = from.chebyshev_distance(to) as i32;
    let (dx, dy) = ((to.x - from.x).signum(), (to.y - from.y).signum());
    (0..=steps).map(|i| from.offset(dx * i, dy * i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_is_inset_by_one() {
        let room = RectangularRoom::new(2, 3, 4, 3);
        let inner: Vec<Position> = room.inner().collect();
        assert_eq!(inner.len(), 3 * 2);
        assert!(inner.iter().all(|p| room.contains_inner(*p)));
        assert!(!room.contains_inner(Position::new(2, 3)));
        assert_eq!(room.center(), Position::new(4, 4));
    }

    #[test]
    fn shared_walls_intersect() {
        let a = RectangularRoom::new(0, 0, 5, 5);
        let touching = RectangularRoom::new(5, 0, 5, 5);
        let apart = RectangularRoom::new(6, 0, 5, 5);
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(apart.intersects(&touching));
    }

    #[test]
    fn tunnels_are_connected_l_shapes() {
        let start = Position::new(1, 1);
        let end = Position::new(4, 6);
        for horizontal_first in [true, false] {
            let tiles = tunnel_between(start, end, horizontal_first);
            assert_eq!(tiles.first(), Some(&start));
            assert_eq!(tiles.last(), Some(&end));
            assert_eq!(tiles.len(), 3 + 5 + 1);
            for pair in tiles.windows(2) {
                let dx = (pair[0].x - pair[1].x).abs();
                let dy = (pair[0].y - pair[1].y).abs();
                assert_eq!(dx + dy, 1);
            }
        }
        let elbow = tunnel_between(start, end, true);
        assert!(elbow.contains(&Position::new(4, 1)));
    }
}
