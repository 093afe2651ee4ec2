//! Backtracking exact-cover solver.
//!
//! Pieces are assigned in a fixed order, one placement each. A candidate is
//! admissible when its mask does not intersect the cells filled so far, so the
//! only pruning is a single AND per candidate. The order of solutions is fully
//! determined by the piece order and the placement order within each piece.

use std::ops::ControlFlow;
use std::time::Instant;

use log::{info, trace};

use crate::grid::{CELL_COUNT, FULL_MASK};
use crate::pieces::Puzzle;
use crate::placements::Placement;

/// A complete assignment of one placement per piece, in piece order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Union of all placement masks.
    pub fn coverage(&self) -> u64 {
        self.placements
            .iter()
            .fold(0, |covered, placement| covered | placement.mask())
    }

    /// Returns true if the placements are pairwise disjoint and fill every cell.
    pub fn is_complete(&self) -> bool {
        let mut covered = 0u64;
        for placement in &self.placements {
            if covered & placement.mask() != 0 {
                return false;
            }
            covered |= placement.mask();
        }
        covered == FULL_MASK
    }

    /// Maps every cell to the position (in piece order) of the placement covering it.
    pub fn cell_owners(&self) -> [usize; CELL_COUNT] {
        debug_assert!(self.is_complete(), "cell owners of an incomplete solution");
        let mut owners = [0; CELL_COUNT];
        for (position, placement) in self.placements.iter().enumerate() {
            for cell_index in placement.cells() {
                owners[cell_index] = position;
            }
        }
        owners
    }
}

/// Depth-first search state; the partial assignment lives on `partial`.
struct Search<'a, F> {
    placement_sets: &'a [Vec<Placement>],
    partial: Vec<Placement>,
    /// Bitmask of currently occupied cells.
    occupied: u64,
    visit: F,
}

impl<F> Search<'_, F>
where
    F: FnMut(&[Placement]) -> ControlFlow<()>,
{
    fn descend(&mut self) -> ControlFlow<()> {
        let depth = self.partial.len();
        if depth == self.placement_sets.len() {
            return (self.visit)(&self.partial);
        }

        let placement_sets = self.placement_sets;
        for &candidate in &placement_sets[depth] {
            // fast collision check using bitmask AND
            if candidate.mask() & self.occupied != 0 {
                continue;
            }

            self.partial.push(candidate);
            self.occupied |= candidate.mask();
            let flow = self.descend();
            self.occupied &= !candidate.mask();
            self.partial.pop();
            flow?;
        }

        ControlFlow::Continue(())
    }
}

/// Calls `visit` with every full assignment, in search order, until it breaks.
///
/// `placement_sets[i]` holds the candidate placements of the piece at position `i`.
/// Returns `Break` if `visit` stopped the search early.
pub fn for_each_solution<F>(placement_sets: &[Vec<Placement>], visit: F) -> ControlFlow<()>
where
    F: FnMut(&[Placement]) -> ControlFlow<()>,
{
    let mut search = Search {
        placement_sets,
        partial: Vec::with_capacity(placement_sets.len()),
        occupied: 0,
        visit,
    };
    search.descend()
}

/// Finds solutions, stopping after `max_solutions` if given.
pub fn solve_limited(
    placement_sets: &[Vec<Placement>],
    max_solutions: Option<usize>,
) -> Vec<Solution> {
    let mut solutions = Vec::new();
    if max_solutions == Some(0) {
        return solutions;
    }

    let candidates: usize = placement_sets.iter().map(Vec::len).sum();
    info!(
        "searching {} pieces with {} candidate placements",
        placement_sets.len(),
        candidates
    );
    let start = Instant::now();

    let _ = for_each_solution(placement_sets, |placements| {
        solutions.push(Solution::new(placements.to_vec()));
        trace!("solution {} found", solutions.len());
        if max_solutions.is_some_and(|max| solutions.len() >= max) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    info!("found {} solutions in {:?}", solutions.len(), start.elapsed());
    solutions
}

/// Finds every solution.
pub fn solve(placement_sets: &[Vec<Placement>]) -> Vec<Solution> {
    solve_limited(placement_sets, None)
}

impl Puzzle<'_> {
    /// Generates placements for this puzzle's pieces and solves it.
    pub fn solve(&self, max_solutions: Option<usize>) -> Vec<Solution> {
        solve_limited(&self.placement_sets(), max_solutions)
    }
}
