use std::fmt;
use std::fmt::{Display, Formatter};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Dir, Pos, DIRECTIONS, MAX_SIZE};
use crate::grid::{reciprocal_walls, Grid, ModelErr};
use crate::state::State;

/// A grid together with where the robots start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub state: State,
}

impl Puzzle {
    pub fn new(grid: Grid, state: State) -> Result<Self, ModelErr> {
        if state.robots.is_empty() {
            return Err(ModelErr::NoRobots);
        }
        for (i, &pos) in state.robots.iter().enumerate() {
            if !grid.contains(pos) {
                return Err(ModelErr::RobotOutside(i, pos));
            }
            if let Some(j) = state.robots[..i].iter().position(|&other| other == pos) {
                return Err(ModelErr::RobotsOverlap(j, i));
            }
        }
        if grid.target() >= state.robots.len() {
            return Err(ModelErr::TargetIndex(grid.target()));
        }
        Ok(Puzzle { grid, state })
    }

    /// 5x5 board with two robots, the target starts in the north-west corner
    /// and the goal in the south-east corner can't be entered from the north.
    pub fn demo() -> Result<Self, ModelErr> {
        let walls = reciprocal_walls(
            5,
            &[(Pos::new(4, 3), Dir::South), (Pos::new(2, 2), Dir::East)],
        );
        let grid = Grid::new(5, walls, Pos::new(4, 4), 0)?;
        let state = State::new(vec![Pos::new(0, 0), Pos::new(4, 0)]);
        Puzzle::new(grid, state)
    }

    /// Random board with `wall_cnt` walls between neighbouring cells (blocking both ways),
    /// `robot_cnt` robots on distinct cells and the goal anywhere except under robot 0,
    /// which is the target.
    ///
    /// The same arguments always give the same puzzle.
    /// Asking for more walls than the board has room for gives a board with every wall.
    pub fn random(
        size: usize,
        wall_cnt: usize,
        robot_cnt: usize,
        seed: u64,
    ) -> Result<Self, ModelErr> {
        if size == 0 {
            return Err(ModelErr::EmptyBoard);
        }
        if size > MAX_SIZE {
            return Err(ModelErr::TooLarge);
        }
        if robot_cnt == 0 {
            return Err(ModelErr::NoRobots);
        }
        if robot_cnt > size * size {
            return Err(ModelErr::TooManyRobots(robot_cnt));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let size_u8 = size as u8;
        let random_pos =
            |rng: &mut StdRng| Pos::new(rng.gen_range(0..size_u8), rng.gen_range(0..size_u8));

        let wall_cnt = wall_cnt.min(2 * size * (size - 1));
        let mut walls = Vec::with_capacity(wall_cnt);
        while walls.len() < wall_cnt {
            let pos = random_pos(&mut rng);
            let dir = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
            // the edge of the board is already a wall
            let other = match pos.step(dir, size_u8) {
                Some(other) => other,
                None => continue,
            };
            // each wall is stored as the edge going east or south
            let wall = match dir {
                Dir::East | Dir::South => (pos, dir),
                Dir::North | Dir::West => (other, dir.inverse()),
            };
            if !walls.contains(&wall) {
                walls.push(wall);
            }
        }

        let mut robots = Vec::with_capacity(robot_cnt);
        while robots.len() < robot_cnt {
            let pos = random_pos(&mut rng);
            if !robots.contains(&pos) {
                robots.push(pos);
            }
        }

        let goal = if size == 1 {
            robots[0]
        } else {
            loop {
                let pos = random_pos(&mut rng);
                if pos != robots[0] {
                    break pos;
                }
            }
        };

        let grid = Grid::new(size, reciprocal_walls(size, &walls), goal, 0)?;
        Puzzle::new(grid, State::new(robots))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}x{}", self.grid.size(), self.grid.size())?;
        writeln!(f, "Goal: {}", self.grid.goal())?;
        writeln!(f, "Target robot: {}", self.grid.target())?;
        write!(f, "Walls:")?;
        for &(pos, dir) in self.grid.walls() {
            write!(f, " {} {}", pos, dir)?;
        }
        writeln!(f)?;
        writeln!(f, "Robots: {}", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(target: usize) -> Grid {
        Grid::new(4, vec![], Pos::new(3, 3), target).unwrap()
    }

    #[test]
    fn invalid_puzzles() {
        assert_eq!(
            Puzzle::new(grid(0), State::new(vec![])).unwrap_err(),
            ModelErr::NoRobots
        );
        assert_eq!(
            Puzzle::new(grid(0), State::new(vec![Pos::new(0, 0), Pos::new(0, 4)])).unwrap_err(),
            ModelErr::RobotOutside(1, Pos::new(0, 4))
        );
        assert_eq!(
            Puzzle::new(
                grid(0),
                State::new(vec![Pos::new(1, 1), Pos::new(0, 0), Pos::new(1, 1)])
            )
            .unwrap_err(),
            ModelErr::RobotsOverlap(0, 2)
        );
        assert_eq!(
            Puzzle::new(grid(2), State::new(vec![Pos::new(1, 1), Pos::new(0, 0)])).unwrap_err(),
            ModelErr::TargetIndex(2)
        );
        assert!(Puzzle::new(grid(1), State::new(vec![Pos::new(1, 1), Pos::new(0, 0)])).is_ok());
    }

    #[test]
    fn random_puzzles() {
        let mut distinct = Vec::new();
        for seed in 0..20 {
            let puzzle = Puzzle::random(6, 8, 3, seed).unwrap();
            assert_eq!(puzzle, Puzzle::random(6, 8, 3, seed).unwrap());

            assert_eq!(puzzle.grid.size(), 6);
            assert_eq!(puzzle.grid.target(), 0);
            assert_eq!(puzzle.state.robots.len(), 3);
            assert_ne!(puzzle.grid.goal(), puzzle.state.robots[0]);
            // no wall is on the edge so every one of them has both sides
            assert_eq!(puzzle.grid.walls().len(), 16);
            assert_eq!(reciprocal_walls(6, puzzle.grid.walls()), puzzle.grid.walls());

            if !distinct.contains(&puzzle) {
                distinct.push(puzzle);
            }
        }
        assert!(distinct.len() > 1);
    }

    #[test]
    fn random_puzzle_limits() {
        // 3x3 has 12 pairs of neighbours
        let full = Puzzle::random(3, 100, 1, 7).unwrap();
        assert_eq!(full.grid.walls().len(), 24);

        let tiny = Puzzle::random(1, 5, 1, 0).unwrap();
        assert!(tiny.grid.walls().is_empty());
        assert_eq!(tiny.grid.goal(), tiny.state.robots[0]);

        let crowded = Puzzle::random(2, 0, 4, 0).unwrap();
        assert_eq!(crowded.state.robots.len(), 4);

        assert_eq!(Puzzle::random(0, 0, 1, 0).unwrap_err(), ModelErr::EmptyBoard);
        assert_eq!(Puzzle::random(300, 0, 1, 0).unwrap_err(), ModelErr::TooLarge);
        assert_eq!(Puzzle::random(3, 0, 0, 0).unwrap_err(), ModelErr::NoRobots);
        assert_eq!(Puzzle::random(2, 0, 5, 0).unwrap_err(), ModelErr::TooManyRobots(5));
    }

    #[test]
    fn formatting_puzzle() {
        let puzzle = Puzzle::demo().unwrap();
        let expected = "\
Size: 5x5
Goal: (4, 4)
Target robot: 0
Walls: (2, 2) east (3, 2) west (4, 3) south (4, 4) north
Robots: [(0, 0), (4, 0)]
";
        assert_eq!(puzzle.to_string(), expected);
    }
}
