//! Symmetric shadowcasting.
//!
//! Scans the four quadrants around the origin row by row, tracking the pair
//! of slopes that bound the still-lit wedge. Slopes are exact fractions so
//! results do not depend on float rounding. A floor tile is revealed only if
//! its center lies inside the wedge, which makes visibility symmetric: if A
//! sees B then B sees A.
//!
//! Algorithm described at <https://www.albertford.com/shadowcasting/>.

use crate::state::Position;

/// Exact slope `num / den` with a positive denominator.
#[derive(Clone, Copy, Debug)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// Slope through the left edge of the tile at `col` in a row at `depth`.
    const fn of_tile(depth: i32, col: i32) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Clone, Copy, Debug)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    fn transform(self, origin: Position, depth: i32, col: i32) -> Position {
        match self {
            Self::North => Position::new(origin.x + col, origin.y - depth),
            Self::South => Position::new(origin.x + col, origin.y + depth),
            Self::East => Position::new(origin.x + depth, origin.y + col),
            Self::West => Position::new(origin.x - depth, origin.y + col),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    /// First column touched by the wedge (ties round up).
    fn min_col(&self) -> i32 {
        floor_div(2 * self.depth * self.start.num + self.start.den, 2 * self.start.den)
    }

    /// Last column touched by the wedge (ties round down).
    fn max_col(&self) -> i32 {
        -floor_div(self.end.den - 2 * self.depth * self.end.num, 2 * self.end.den)
    }

    fn next(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Whether the center of the tile at `col` lies inside this row's wedge.
    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Computes the tiles visible from `origin` within `radius`.
///
/// `is_opaque` must return `true` for tiles outside the map. `reveal` is
/// invoked for every visible tile (possibly more than once for the same tile).
/// Tiles farther than `radius` in Euclidean distance are never revealed.
pub fn compute_fov<O, R>(origin: Position, radius: u32, mut is_opaque: O, mut reveal: R)
where
    O: FnMut(Position) -> bool,
    R: FnMut(Position),
{
    reveal(origin);
    let radius = radius as i32;
    let radius_sq = radius * radius;

    for quadrant in Quadrant::ALL {
        let mut rows = vec![Row {
            depth: 1,
            start: Slope::new(-1, 1),
            end: Slope::new(1, 1),
        }];

        while let Some(mut row) = rows.pop() {
            if row.depth > radius {
                continue;
            }
            let mut prev_opaque: Option<bool> = None;

            for col in row.min_col()..=row.max_col() {
                let position = quadrant.transform(origin, row.depth, col);
                let opaque = is_opaque(position);
                let within_radius = row.depth * row.depth + col * col <= radius_sq;

                if within_radius && (opaque || row.is_symmetric(col)) {
                    reveal(position);
                }
                if prev_opaque == Some(true) && !opaque {
                    row.start = Slope::of_tile(row.depth, col);
                }
                if prev_opaque == Some(false) && opaque {
                    let mut next = row.next();
                    next.end = Slope::of_tile(row.depth, col);
                    rows.push(next);
                }
                prev_opaque = Some(opaque);
            }

            if prev_opaque == Some(false) {
                rows.push(row.next());
            }
        }
    }
}
