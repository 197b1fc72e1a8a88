use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// BFS distance of the target robot alone, walls included.
    Relaxed,
    /// Always 0 - plain uniform-cost search.
    Blind,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Relaxed => write!(f, "relaxed"),
            Heuristic::Blind => write!(f, "blind"),
        }
    }
}
