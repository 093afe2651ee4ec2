//! Tetris Cube Solver Library
//!
//! Enumerates every way to pack the twelve Tetris cube pieces into a 4x4x4 cube.
//! Data flows one way: cell indexing (`grid`) feeds the rotation and translation
//! tables (`geometry`), which generate each piece's placements (`placements`),
//! which the backtracking search (`solver`) combines into solutions.

pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod placements;
pub mod solver;

pub use pieces::{pieces, Color, Piece, PieceError, Puzzle, TETRIS_CUBE};
pub use placements::{placement_sets, placements_for, Placement};
pub use solver::{solve, solve_limited, Solution};
