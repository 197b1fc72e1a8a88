pub mod a_star;
mod model;

use log::debug;

use crate::config::Heuristic;
use crate::puzzle::Puzzle;
use crate::state::State;
use crate::Solve;

pub use self::a_star::{AStar, Model, NoSolution, Solution, Stats};
pub use self::model::RicochetModel;

impl Solve for Puzzle {
    fn solve(&self, heuristic: Heuristic) -> Result<Solution<State>, NoSolution> {
        solve(self, heuristic)
    }
}

fn solve(puzzle: &Puzzle, heuristic: Heuristic) -> Result<Solution<State>, NoSolution> {
    debug!("Processing puzzle...");
    let model = RicochetModel::new(&puzzle.grid);
    debug!("Processed puzzle");
    match heuristic {
        Heuristic::Relaxed => {
            AStar::new(&model, |state: &State| model.heuristic_distance(state))
                .solve(&puzzle.state)
        }
        Heuristic::Blind => AStar::new(&model, |_: &State| 0).solve(&puzzle.state),
    }
}
