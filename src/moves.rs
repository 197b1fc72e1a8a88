use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::state::State;

/// One slide of one robot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub robot: usize,
    pub dir: Dir,
}

impl Move {
    pub fn new(robot: usize, dir: Dir) -> Self {
        Move { robot, dir }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "r{} {}", self.robot, self.dir)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    /// The slides between consecutive states of a path.
    ///
    /// `None` if some step isn't exactly one robot moving in a straight line.
    pub fn from_path(path: &[State]) -> Option<Moves> {
        let mut moves = Moves::default();
        for pair in path.windows(2) {
            let (old, new) = (&pair[0], &pair[1]);
            if old.robots.len() != new.robots.len() {
                return None;
            }

            let mut changed = old
                .robots
                .iter()
                .zip(&new.robots)
                .enumerate()
                .filter(|(_, (old_pos, new_pos))| old_pos != new_pos);
            let (robot, (&old_pos, &new_pos)) = changed.next()?;
            if changed.next().is_some() {
                return None;
            }
            moves.add(Move::new(robot, old_pos.dir_to(new_pos)?));
        }
        Some(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    /// How many times a given robot moved.
    pub fn robot_move_cnt(&self, robot: usize) -> usize {
        self.0.iter().filter(|m| m.robot == robot).count()
    }

    pub(crate) fn add(&mut self, mov: Move) {
        self.0.push(mov);
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, mov) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
