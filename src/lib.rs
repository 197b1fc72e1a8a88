// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod grid;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod solver;
pub mod state;

mod vec2d;

use crate::config::Heuristic;
use crate::solver::{NoSolution, Solution};
use crate::state::State;

pub trait Solve {
    fn solve(&self, heuristic: Heuristic) -> Result<Solution<State>, NoSolution>;
}
