use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::data::{Dir, Dist, Pos, DIRECTIONS, MAX_SIZE, UNREACHABLE};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErr {
    EmptyBoard,
    TooLarge,
    GoalOutside(Pos),
    WallOutside(Pos),
    NoRobots,
    RobotOutside(usize, Pos),
    RobotsOverlap(usize, usize),
    TargetIndex(usize),
    TooManyRobots(usize),
}

impl Display for ModelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ModelErr::EmptyBoard => write!(f, "Board size must be at least 1"),
            ModelErr::TooLarge => write!(f, "Board larger than {}x{}", MAX_SIZE, MAX_SIZE),
            ModelErr::GoalOutside(pos) => write!(f, "Goal {} is outside the board", pos),
            ModelErr::WallOutside(pos) => write!(f, "Wall at {} is outside the board", pos),
            ModelErr::NoRobots => write!(f, "No robots"),
            ModelErr::RobotOutside(i, pos) => {
                write!(f, "Robot {} at {} is outside the board", i, pos)
            }
            ModelErr::RobotsOverlap(i, j) => write!(f, "Robots {} and {} are on the same cell", i, j),
            ModelErr::TargetIndex(i) => write!(f, "Target robot {} doesn't exist", i),
            ModelErr::TooManyRobots(cnt) => write!(f, "{} robots don't fit on the board", cnt),
        }
    }
}

impl Error for ModelErr {}

/// The static part of a puzzle - everything except robot positions.
///
/// Walls are directed edges: `(pos, dir)` only stops robots leaving `pos` toward `dir`.
/// A wall between two cells needs both edges, see `reciprocal_walls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    blocked: Vec2d<u8>,
    walls: Vec<(Pos, Dir)>,
    goal: Pos,
    target: usize,
}

impl Grid {
    pub fn new<I>(size: usize, walls: I, goal: Pos, target: usize) -> Result<Grid, ModelErr>
    where
        I: IntoIterator<Item = (Pos, Dir)>,
    {
        if size == 0 {
            return Err(ModelErr::EmptyBoard);
        }
        if size > MAX_SIZE {
            return Err(ModelErr::TooLarge);
        }
        let size = size as u8;
        if !Self::on_board(size, goal) {
            return Err(ModelErr::GoalOutside(goal));
        }

        let mut blocked = Vec2d::new(size, 0);
        let mut wall_list = Vec::new();
        for (pos, dir) in walls {
            if !Self::on_board(size, pos) {
                return Err(ModelErr::WallOutside(pos));
            }
            if blocked[pos] & dir.bit() == 0 {
                blocked[pos] |= dir.bit();
                wall_list.push((pos, dir));
            }
        }
        wall_list.sort();

        Ok(Grid {
            size,
            blocked,
            walls: wall_list,
            goal,
            target,
        })
    }

    fn on_board(size: u8, pos: Pos) -> bool {
        pos.x < size && pos.y < size
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Deduplicated and sorted.
    pub fn walls(&self) -> &[(Pos, Dir)] {
        &self.walls
    }

    pub fn contains(&self, pos: Pos) -> bool {
        Self::on_board(self.size, pos)
    }

    /// Cells outside the board have no walls.
    pub fn is_blocked(&self, pos: Pos, dir: Dir) -> bool {
        self.contains(pos) && self.blocked[pos] & dir.bit() != 0
    }

    /// Where a robot starting at `from` stops when sliding toward `dir`.
    ///
    /// `robots` are obstacles - the moving robot may be among them,
    /// it never returns to its starting cell so it can't block itself.
    /// Returns `from` if the robot can't move at all or isn't on the board.
    pub fn slide(&self, from: Pos, dir: Dir, robots: &[Pos]) -> Pos {
        if !self.contains(from) {
            return from;
        }
        let mut cur = from;
        loop {
            if self.is_blocked(cur, dir) {
                return cur;
            }
            let next = match cur.step(dir, self.size) {
                Some(next) => next,
                None => return cur,
            };
            if robots.contains(&next) {
                return cur;
            }
            cur = next;
        }
    }

    /// Minimum number of slides to get a lone robot from `from` to the goal.
    ///
    /// Walls still apply but there are no other robots to stop against.
    pub fn relaxed_distance(&self, from: Pos) -> Dist {
        if !self.contains(from) {
            return UNREACHABLE;
        }
        let mut visited = self.blocked.create_scratchpad(false);
        visited[from] = true;

        let mut to_visit = VecDeque::new();
        to_visit.push_back((from, 0));

        while let Some((cur, dist)) = to_visit.pop_front() {
            if cur == self.goal {
                return dist;
            }
            for &dir in &DIRECTIONS {
                let next = self.slide(cur, dir, &[]);
                if !visited[next] {
                    visited[next] = true;
                    to_visit.push_back((next, dist + 1));
                }
            }
        }

        UNREACHABLE
    }

    /// `relaxed_distance` for every cell of the board.
    #[inline(never)] // this is called only once and this way it's easier to see in callgrind
    pub(crate) fn relaxed_distances(&self) -> Vec2d<Dist> {
        let mut dists = self.blocked.create_scratchpad(UNREACHABLE);
        for pos in self.blocked.positions() {
            dists[pos] = self.relaxed_distance(pos);
        }
        dists
    }
}

/// Adds the opposite edge for every wall so it blocks movement from both sides.
///
/// Edges pointing off the board have no opposite and are kept as they are.
pub fn reciprocal_walls(size: usize, walls: &[(Pos, Dir)]) -> Vec<(Pos, Dir)> {
    let size = size.min(MAX_SIZE) as u8;
    let mut ret = walls.to_vec();
    for &(pos, dir) in walls {
        if let Some(other) = pos.step(dir, size) {
            ret.push((other, dir.inverse()));
        }
    }
    ret.sort();
    ret.dedup();
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(size: usize, goal: Pos) -> Grid {
        Grid::new(size, vec![], goal, 0).unwrap()
    }

    #[test]
    fn invalid_grids() {
        let goal = Pos::new(0, 0);
        assert_eq!(Grid::new(0, vec![], goal, 0).unwrap_err(), ModelErr::EmptyBoard);
        assert_eq!(Grid::new(256, vec![], goal, 0).unwrap_err(), ModelErr::TooLarge);
        assert_eq!(
            Grid::new(3, vec![], Pos::new(3, 0), 0).unwrap_err(),
            ModelErr::GoalOutside(Pos::new(3, 0))
        );
        assert_eq!(
            Grid::new(3, vec![(Pos::new(1, 5), Dir::North)], goal, 0).unwrap_err(),
            ModelErr::WallOutside(Pos::new(1, 5))
        );
    }

    #[test]
    fn slides_stop_at_board_edge() {
        let grid = open_grid(5, Pos::new(4, 4));
        let from = Pos::new(2, 2);
        assert_eq!(grid.slide(from, Dir::North, &[from]), Pos::new(2, 0));
        assert_eq!(grid.slide(from, Dir::East, &[from]), Pos::new(4, 2));
        assert_eq!(grid.slide(from, Dir::South, &[from]), Pos::new(2, 4));
        assert_eq!(grid.slide(from, Dir::West, &[from]), Pos::new(0, 2));

        let corner = Pos::new(0, 0);
        assert_eq!(grid.slide(corner, Dir::North, &[]), corner);
        assert_eq!(grid.slide(corner, Dir::West, &[]), corner);
    }

    #[test]
    fn slides_stop_before_robots() {
        let grid = open_grid(5, Pos::new(4, 4));
        let robots = [Pos::new(0, 0), Pos::new(4, 0), Pos::new(1, 0)];
        assert_eq!(grid.slide(robots[0], Dir::East, &robots), robots[0]);
        assert_eq!(grid.slide(robots[2], Dir::East, &robots), Pos::new(3, 0));
        assert_eq!(grid.slide(robots[1], Dir::West, &robots), Pos::new(2, 0));
    }

    #[test]
    fn off_board_positions() {
        let grid = Grid::new(5, vec![(Pos::new(4, 0), Dir::East)], Pos::new(4, 4), 0).unwrap();
        // (7, 0) would alias (2, 1) and (0, 9) is past the end of the storage
        for &pos in &[Pos::new(7, 0), Pos::new(0, 9), Pos::new(255, 255)] {
            assert!(!grid.contains(pos));
            for &dir in &DIRECTIONS {
                assert!(!grid.is_blocked(pos, dir));
                assert_eq!(grid.slide(pos, dir, &[]), pos);
            }
            assert_eq!(grid.relaxed_distance(pos), UNREACHABLE);
        }
        // off-board robots don't stop anyone
        assert_eq!(grid.slide(Pos::new(0, 0), Dir::East, &[Pos::new(9, 0)]), Pos::new(4, 0));
    }

    #[test]
    fn walls_are_directed() {
        // only leaving (2, 0) eastward is blocked, not entering it from the east
        let grid = Grid::new(5, vec![(Pos::new(2, 0), Dir::East)], Pos::new(4, 4), 0).unwrap();
        assert_eq!(grid.slide(Pos::new(0, 0), Dir::East, &[]), Pos::new(2, 0));
        assert_eq!(grid.slide(Pos::new(2, 0), Dir::East, &[]), Pos::new(2, 0));
        assert_eq!(grid.slide(Pos::new(4, 0), Dir::West, &[]), Pos::new(0, 0));

        let walls = reciprocal_walls(5, grid.walls());
        let grid = Grid::new(5, walls, Pos::new(4, 4), 0).unwrap();
        assert_eq!(grid.slide(Pos::new(4, 0), Dir::West, &[]), Pos::new(3, 0));
    }

    #[test]
    fn reciprocal_walls_on_the_edge() {
        let walls = [(Pos::new(0, 0), Dir::North), (Pos::new(1, 1), Dir::South)];
        assert_eq!(
            reciprocal_walls(3, &walls),
            vec![
                (Pos::new(0, 0), Dir::North),
                (Pos::new(1, 1), Dir::South),
                (Pos::new(1, 2), Dir::North),
            ]
        );
    }

    #[test]
    fn duplicate_walls() {
        let wall = (Pos::new(1, 1), Dir::West);
        let grid = Grid::new(3, vec![wall, wall], Pos::new(0, 0), 0).unwrap();
        assert_eq!(grid.walls(), &[wall]);
    }

    #[test]
    fn relaxed_distance_open_board() {
        let grid = open_grid(3, Pos::new(2, 2));
        assert_eq!(grid.relaxed_distance(Pos::new(2, 2)), 0);
        assert_eq!(grid.relaxed_distance(Pos::new(2, 0)), 1);
        assert_eq!(grid.relaxed_distance(Pos::new(0, 2)), 1);
        assert_eq!(grid.relaxed_distance(Pos::new(0, 0)), 2);
        assert_eq!(grid.relaxed_distance(Pos::new(1, 1)), 2);

        let center = open_grid(3, Pos::new(1, 1));
        assert_eq!(center.relaxed_distance(Pos::new(0, 0)), UNREACHABLE);
    }

    #[test]
    fn relaxed_distance_walled_off_goal() {
        let goal = Pos::new(1, 1);
        let walls: Vec<_> = DIRECTIONS.iter().map(|&dir| (goal, dir)).collect();
        let grid = Grid::new(3, reciprocal_walls(3, &walls), goal, 0).unwrap();
        let dists = grid.relaxed_distances();
        for pos in dists.positions() {
            if pos == goal {
                assert_eq!(dists[pos], 0);
            } else {
                assert_eq!(dists[pos], UNREACHABLE);
            }
        }
    }

    #[test]
    fn relaxed_distances_match() {
        let walls = reciprocal_walls(
            5,
            &[
                (Pos::new(4, 3), Dir::South),
                (Pos::new(2, 2), Dir::East),
                (Pos::new(1, 3), Dir::North),
            ],
        );
        let grid = Grid::new(5, walls, Pos::new(4, 4), 0).unwrap();
        let dists = grid.relaxed_distances();
        for pos in dists.positions() {
            assert_eq!(dists[pos], grid.relaxed_distance(pos));
        }
        assert_eq!(dists[Pos::new(0, 0)], 2);
        assert_eq!(dists[Pos::new(4, 0)], 3);
    }
}
