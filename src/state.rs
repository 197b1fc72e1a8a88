use std::fmt::{self, Display, Formatter};

use crate::data::Pos;

/// Positions of all robots - the order matters, two robots swapping places is a different state.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub robots: Vec<Pos>,
}

impl State {
    pub fn new(robots: Vec<Pos>) -> State {
        State { robots }
    }

    /// Copy of this state with one robot moved.
    pub(crate) fn with_robot(&self, index: usize, pos: Pos) -> State {
        let mut robots = self.robots.clone();
        robots[index] = pos;
        State { robots }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.robots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pos)?;
        }
        write!(f, "]")
    }
}
