use std::fmt::{self, Display, Formatter};

/// Length of a path or a lower bound on it, in slides.
pub type Dist = u32;

/// Heuristic value for cells from which the goal can't be reached at all.
pub const UNREACHABLE: Dist = Dist::max_value();

/// Boards are indexed by `u8` so they can't be any larger.
pub const MAX_SIZE: usize = 255;

/// `x` is the column, `y` is the row - `(0, 0)` is the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub fn new(x: u8, y: u8) -> Pos {
        Pos { x, y }
    }

    /// The neighboring cell in `dir` or `None` when it would be off a `size`×`size` board.
    pub(crate) fn step(self, dir: Dir, size: u8) -> Option<Pos> {
        let (dx, dy) = dir.offset();
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if x < 0 || y < 0 || x >= i32::from(size) || y >= i32::from(size) {
            None
        } else {
            Some(Pos::new(x as u8, y as u8))
        }
    }

    pub(crate) fn dir_to(self, other: Pos) -> Option<Dir> {
        use std::cmp::Ordering::*;

        match (other.x.cmp(&self.x), other.y.cmp(&self.y)) {
            (Equal, Less) => Some(Dir::North),
            (Greater, Equal) => Some(Dir::East),
            (Equal, Greater) => Some(Dir::South),
            (Less, Equal) => Some(Dir::West),
            _ => None,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

/// Order in which successors are generated - changing it changes which of equally good paths is found.
pub const DIRECTIONS: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

impl Dir {
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::North => (0, -1),
            Dir::East => (1, 0),
            Dir::South => (0, 1),
            Dir::West => (-1, 0),
        }
    }

    pub fn inverse(self) -> Dir {
        match self {
            Dir::North => Dir::South,
            Dir::East => Dir::West,
            Dir::South => Dir::North,
            Dir::West => Dir::East,
        }
    }

    pub(crate) fn bit(self) -> u8 {
        match self {
            Dir::North => 1,
            Dir::East => 2,
            Dir::South => 4,
            Dir::West => 8,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::North => write!(f, "north"),
            Dir::East => write!(f, "east"),
            Dir::South => write!(f, "south"),
            Dir::West => write!(f, "west"),
        }
    }
}
