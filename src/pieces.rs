//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is defined by the corner coordinates of its unit cubes inside the
//! 4x4x4 volume, anchored so the minimum coordinate along every axis is zero.

use std::fmt;

use thiserror::Error;

use crate::grid::{in_bounds, index_from_vector, max_corner, min_corner, CELL_COUNT};

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// Color tag of a piece; purely descriptive, several pieces share a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceError {
    #[error("A piece must contain at least one cube")]
    Empty,
    #[error("Cube {0:?} lies outside the 4x4x4 volume")]
    OutOfBounds(Coord),
    #[error("Cube {0:?} is listed more than once")]
    DuplicateCube(Coord),
    #[error("Piece is not anchored, its minimum coordinate along axis {axis} is {min} instead of 0")]
    NotAnchored { axis: usize, min: i32 },
}

/// A colored piece in its initial placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    /// Occupancy mask of the initial placement.
    mask: u64,
}

impl Piece {
    /// Builds a piece from the corner coordinates of its cubes.
    ///
    /// Every cube must lie inside the volume and the cubes must touch zero along
    /// each axis, since placements are generated by shifting towards +x, +y, +z only.
    pub const fn new(color: Color, cubes: &[Coord]) -> Result<Self, PieceError> {
        let mut mask = 0u64;
        let mut i = 0;
        while i < cubes.len() {
            let cube = cubes[i];
            if !in_bounds(cube) {
                return Err(PieceError::OutOfBounds(cube));
            }
            let bit = 1u64 << index_from_vector(cube);
            if mask & bit != 0 {
                return Err(PieceError::DuplicateCube(cube));
            }
            mask |= bit;
            i += 1;
        }

        let piece = match Self::from_mask(color, mask) {
            Ok(piece) => piece,
            Err(err) => return Err(err),
        };
        let (min_x, min_y, min_z) = min_corner(mask);
        let mins = [min_x, min_y, min_z];
        let mut axis = 0;
        while axis < 3 {
            if mins[axis] != 0 {
                return Err(PieceError::NotAnchored {
                    axis,
                    min: mins[axis],
                });
            }
            axis += 1;
        }
        Ok(piece)
    }

    /// Builds a piece directly from an occupancy mask.
    ///
    /// A mask is always inside the volume, so only emptiness is rejected; the
    /// mask is taken as-is without requiring it to be anchored.
    pub const fn from_mask(color: Color, mask: u64) -> Result<Self, PieceError> {
        if mask == 0 {
            return Err(PieceError::Empty);
        }
        Ok(Self { color, mask })
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Occupancy mask of the initial placement.
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    pub const fn cube_count(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Largest coordinate reached along each axis by the initial placement.
    pub const fn bounding_box(&self) -> Coord {
        max_corner(self.mask)
    }
}

/// Puzzle definition: the pieces in solver processing order.
///
/// The piece at position 0 is only translated, never rotated, when searching.
pub struct Puzzle<'a> {
    pub pieces: &'a [Piece],
}

impl<'a> Puzzle<'a> {
    /// Creates a puzzle whose pieces exactly account for every cell of the volume.
    pub const fn new(pieces: &'a [Piece]) -> Self {
        assert!(!pieces.is_empty(), "a puzzle needs at least one piece");
        assert!(pieces.len() <= 36, "piece positions must render as one character");
        let mut total_cubes = 0;
        let mut i = 0;
        while i < pieces.len() {
            total_cubes += pieces[i].cube_count() as usize;
            i += 1;
        }
        assert!(
            total_cubes == CELL_COUNT,
            "the pieces must contain exactly as many cubes as the volume has cells"
        );
        Self { pieces }
    }
}

/// Unwraps a catalog entry at compile time; malformed entries fail the build.
const fn catalog_piece(color: Color, cubes: &[Coord]) -> Piece {
    match Piece::new(color, cubes) {
        Ok(piece) => piece,
        Err(_) => panic!("malformed catalog piece"),
    }
}

/// The twelve Tetris cube pieces that must fill a 4x4x4 cube.
pub const PIECES: [Piece; 12] = [
    catalog_piece(
        Color::Blue,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 2, 0), (2, 0, 1)],
    ),
    catalog_piece(
        Color::Blue,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 2, 0), (1, 0, 1)],
    ),
    catalog_piece(
        Color::Blue,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (3, 1, 0)],
    ),
    catalog_piece(
        Color::Blue,
        &[(1, 0, 0), (2, 0, 0), (2, 0, 1), (1, 1, 0), (0, 1, 0)],
    ),
    catalog_piece(
        Color::Red,
        &[(0, 0, 0), (1, 0, 0), (0, 0, 1), (1, 1, 0), (2, 1, 0), (1, 2, 0)],
    ),
    catalog_piece(
        Color::Red,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 2, 0)],
    ),
    catalog_piece(
        Color::Red,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (1, 1, 0)],
    ),
    catalog_piece(
        Color::Red,
        &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0), (0, 0, 1)],
    ),
    catalog_piece(
        Color::Yellow,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 0, 1), (0, 1, 1)],
    ),
    catalog_piece(
        Color::Yellow,
        &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 1, 1)],
    ),
    catalog_piece(
        Color::Yellow,
        &[(0, 0, 0), (1, 0, 0), (1, 0, 1), (1, 1, 1), (2, 1, 1)],
    ),
    catalog_piece(
        Color::Yellow,
        &[(0, 0, 1), (1, 0, 1), (2, 0, 1), (1, 0, 2), (1, 1, 1), (1, 1, 0)],
    ),
];

/// Tetris cube puzzle definition.
pub const TETRIS_CUBE: Puzzle<'static> = Puzzle::new(&PIECES);

/// The reference catalog, in solver processing order.
pub fn pieces() -> &'static [Piece] {
    TETRIS_CUBE.pieces
}
