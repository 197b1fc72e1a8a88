use crate::data::{Dist, DIRECTIONS, UNREACHABLE};
use crate::grid::Grid;
use crate::solver::a_star::Model;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Sliding robots on a `Grid` as a search problem.
///
/// Read-only after creation, one instance can serve any number of searches.
#[derive(Debug, Clone)]
pub struct RicochetModel<'a> {
    grid: &'a Grid,
    relaxed_dists: Vec2d<Dist>,
}

impl<'a> RicochetModel<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        // the relaxed distance only depends on where the target is
        // so it's computed for all cells up front instead of once per state
        let relaxed_dists = grid.relaxed_distances();
        RicochetModel {
            grid,
            relaxed_dists,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Slides needed to get the target robot to the goal if the other robots weren't there.
    ///
    /// Never more than the real number when the target can reach the goal on its own.
    /// Returns `UNREACHABLE` when it can't.
    pub fn heuristic_distance(&self, state: &State) -> Dist {
        match state.robots.get(self.grid.target()) {
            Some(&pos) if self.grid.contains(pos) => self.relaxed_dists[pos],
            _ => UNREACHABLE,
        }
    }
}

impl Model for RicochetModel<'_> {
    type State = State;

    /// A state with a robot outside the board has no successors.
    fn transitions(&self, state: &State) -> Vec<(State, Dist)> {
        let mut new_states = Vec::new();
        if !state.robots.iter().all(|&pos| self.grid.contains(pos)) {
            return new_states;
        }
        for (i, &pos) in state.robots.iter().enumerate() {
            for &dir in &DIRECTIONS {
                let dest = self.grid.slide(pos, dir, &state.robots);
                // not moving is not a move
                if dest != pos {
                    new_states.push((state.with_robot(i, dest), 1));
                }
            }
        }
        new_states
    }

    fn is_goal(&self, state: &State) -> bool {
        state.robots.get(self.grid.target()) == Some(&self.grid.goal())
    }
}
