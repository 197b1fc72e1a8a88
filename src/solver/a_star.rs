use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::time::{Duration, Instant};

use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, trace};
use prettytable::{cell, format, row, Table};
use separator::Separatable;
use typed_arena::Arena;

use crate::data::Dist;

/// Anything A* can search - states, their successors and the goal test.
pub trait Model {
    type State: Clone + Eq + Hash;

    /// Successor states together with the cost of getting to each of them.
    ///
    /// Must be deterministic - the order decides which of equally good paths is found.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::State, Dist)>;

    fn is_goal(&self, state: &Self::State) -> bool;
}

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    peak_working_set: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
            peak_working_set: 0,
        }
    }

    /// Nodes pushed to the frontier, not counting the initial one.
    pub fn generated(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// States closed and expanded - each state is expanded at most once.
    pub fn expanded(&self) -> usize {
        self.visited_states.iter().sum()
    }

    /// Popped nodes thrown away because their state was already closed.
    pub fn duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Largest frontier + closed set size seen during the search.
    pub fn peak_working_set(&self) -> usize {
        self.peak_working_set
    }

    fn add_created<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    fn add_visited<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    fn add_duplicate<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn update_peak(&mut self, working_set: usize) {
        self.peak_working_set = self.peak_working_set.max(working_set);
    }

    fn add<S>(counts: &mut Vec<usize>, node: &SearchNode<'_, S>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped - e.g. the initial state is never created
        while node.depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.depth] += 1;
        ret
    }

    fn get(counts: &[usize], depth: usize) -> u64 {
        counts.get(depth).cloned().unwrap_or(0) as u64
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", (self.generated() as u64).separated_string())?;
        writeln!(f, "total reached duplicates: {}", (self.duplicates() as u64).separated_string())?;
        writeln!(f, "total visited: {}", (self.expanded() as u64).separated_string())?;
        writeln!(f, "peak working set: {}", (self.peak_working_set as u64).separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States generated total: {}", (self.generated() as u64).separated_string())?;
        writeln!(f, "States expanded total: {}", (self.expanded() as u64).separated_string())?;
        writeln!(f, "Reached duplicates total: {}", (self.duplicates() as u64).separated_string())?;
        writeln!(f, "Peak working set: {}", (self.peak_working_set as u64).separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(row!["Depth", "Generated", "Expanded", "Duplicates"]);
        let depths = self
            .created_states
            .len()
            .max(self.visited_states.len())
            .max(self.duplicate_states.len());
        for depth in 0..depths {
            table.add_row(row![
                r->format!("{}:", depth),
                r->Self::get(&self.created_states, depth).separated_string(),
                r->Self::get(&self.visited_states, depth).separated_string(),
                r->Self::get(&self.duplicate_states, depth).separated_string()
            ]);
        }
        write!(f, "{}", table)
    }
}

/// Nodes are never changed after creation, a cheaper path to a state means a new node.
#[derive(Debug)]
pub(crate) struct SearchNode<'a, S> {
    pub(crate) state: &'a S,
    pub(crate) prev: Option<usize>,
    /// Number of transitions from the initial state.
    pub(crate) depth: usize,
    /// Cost of the path so far (g).
    pub(crate) dist: Dist,
    /// `dist` + heuristic (f), saturates at `UNREACHABLE`.
    pub(crate) cost: Dist,
}

/// Frontier ordering - lowest cost first, then lowest dist, then the oldest node.
/// The node index doubles as the insertion sequence number.
type QueueKey = Reverse<(Dist, Dist, usize)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    /// From the initial state to the goal, both inclusive.
    pub path: Vec<S>,
    pub cost: Dist,
    pub stats: Stats,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSolution {
    pub stats: Stats,
    pub elapsed: Duration,
}

impl Display for NoSolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No solution - searched {} states",
            (self.stats.expanded() as u64).separated_string()
        )
    }
}

impl Error for NoSolution {}

/// A* with duplicate elimination and no reopening.
///
/// With a consistent heuristic the first goal popped is optimal.
/// Each call to `solve` owns all its bookkeeping so the model can be shared between threads.
pub struct AStar<'m, M, H> {
    model: &'m M,
    heuristic: H,
}

impl<M: Debug, H> Debug for AStar<'_, M, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar").field("model", &self.model).finish()
    }
}

impl<'m, M, H> AStar<'m, M, H>
where
    M: Model,
    H: Fn(&M::State) -> Dist,
{
    pub fn new(model: &'m M, heuristic: H) -> Self {
        AStar { model, heuristic }
    }

    pub fn solve(&self, start: &M::State) -> Result<Solution<M::State>, NoSolution> {
        debug!("Search called");
        let started = Instant::now();

        // states are interned so the frontier, closed set and cost map only hold references
        let states: Arena<M::State> = Arena::new();
        let mut nodes: Vec<SearchNode<'_, M::State>> = Vec::new();
        let mut to_visit: BinaryHeap<QueueKey> = BinaryHeap::new();
        let mut closed: FnvHashSet<&M::State> = FnvHashSet::default();
        let mut best_dists: FnvHashMap<&M::State, Dist> = FnvHashMap::default();
        let mut stats = Stats::new();

        let start: &M::State = states.alloc(start.clone());
        best_dists.insert(start, 0);
        let h = (self.heuristic)(start);
        nodes.push(SearchNode {
            state: start,
            prev: None,
            depth: 0,
            dist: 0,
            cost: h,
        });
        to_visit.push(Reverse((h, 0, 0)));

        while let Some(Reverse((_, _, cur_index))) = to_visit.pop() {
            // + 1 for the node just popped
            stats.update_peak(to_visit.len() + 1 + closed.len());

            let (cur_state, cur_dist, cur_depth) = {
                let cur_node = &nodes[cur_index];
                (cur_node.state, cur_node.dist, cur_node.depth)
            };

            if closed.contains(cur_state) {
                stats.add_duplicate(&nodes[cur_index]);
                continue;
            }

            if self.model.is_goal(cur_state) {
                debug!("Solved, backtracking path");
                return Ok(Solution {
                    path: backtrack_path(&nodes, cur_index),
                    cost: cur_dist,
                    stats,
                    elapsed: started.elapsed(),
                });
            }

            closed.insert(cur_state);
            if stats.add_visited(&nodes[cur_index]) {
                debug!("Visited new depth: {}", cur_depth);
                trace!("{:?}", stats);
            }

            for (next_state, step_cost) in self.model.transitions(cur_state) {
                if closed.contains(&next_state) {
                    continue;
                }

                // huge costs from a generic model saturate instead of overflowing
                let next_dist = cur_dist.saturating_add(step_cost);
                let improves = match best_dists.get(&next_state) {
                    Some(&best) => next_dist < best,
                    None => true,
                };
                if !improves {
                    continue;
                }

                let next_state: &M::State = states.alloc(next_state);
                best_dists.insert(next_state, next_dist);
                let next_cost = next_dist.saturating_add((self.heuristic)(next_state));
                let next_index = nodes.len();
                nodes.push(SearchNode {
                    state: next_state,
                    prev: Some(cur_index),
                    depth: cur_depth + 1,
                    dist: next_dist,
                    cost: next_cost,
                });
                stats.add_created(&nodes[next_index]);
                to_visit.push(Reverse((next_cost, next_dist, next_index)));
            }
        }

        debug!("Frontier exhausted, no solution");
        Err(NoSolution {
            stats,
            elapsed: started.elapsed(),
        })
    }
}

fn backtrack_path<S: Clone>(nodes: &[SearchNode<'_, S>], final_index: usize) -> Vec<S> {
    let mut ret = Vec::new();
    let mut cur = Some(final_index);
    while let Some(index) = cur {
        ret.push(nodes[index].state.clone());
        cur = nodes[index].prev;
    }
    ret.reverse();
    ret
}
