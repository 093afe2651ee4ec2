//! Placement generation.
//!
//! A placement is one position and orientation of a piece inside the volume,
//! stored as an occupancy mask. Placements are produced by translating a piece's
//! initial mask within its bounding-box slack and then applying every rotation.

use std::hash::{Hash, Hasher};

use log::debug;
use rustc_hash::FxHashSet;

use crate::geometry::{ROTATIONS, SHIFTS};
use crate::grid::{cells, DIM};
use crate::pieces::{Piece, Puzzle};

/// One candidate position of a piece.
///
/// Equality and hashing look only at the mask: two transform sequences that land
/// a symmetric piece on the same cells produce equal placements.
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    /// Index of the originating piece in the solver's piece order.
    piece: usize,
    /// Bitmask where bit `i` is set if cell `i` is occupied by this placement.
    mask: u64,
}

impl Placement {
    pub const fn new(piece: usize, mask: u64) -> Self {
        Self { piece, mask }
    }

    pub const fn piece(&self) -> usize {
        self.piece
    }

    pub const fn mask(&self) -> u64 {
        self.mask
    }

    pub fn cells(&self) -> impl Iterator<Item = usize> {
        cells(self.mask)
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl Eq for Placement {}

impl Hash for Placement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask.hash(state);
    }
}

/// Returns every translation of the piece that stays inside the volume, unrotated.
///
/// The number of offsets along each axis is `DIM - max`, where `max` is the piece's
/// bounding box extent, so no bounds check is needed. Offsets are enumerated with
/// x outermost and z innermost.
pub fn all_shifts(piece_index: usize, piece: &Piece) -> Vec<Placement> {
    let (max_x, max_y, max_z) = piece.bounding_box();
    let offsets = |max: i32| DIM - max as usize;
    let [shift_x, shift_y, shift_z] = &SHIFTS;

    let mut placements =
        Vec::with_capacity(offsets(max_x) * offsets(max_y) * offsets(max_z));
    let mut x_mask = piece.mask();
    for _ in 0..offsets(max_x) {
        let mut y_mask = x_mask;
        for _ in 0..offsets(max_y) {
            let mut z_mask = y_mask;
            for _ in 0..offsets(max_z) {
                placements.push(Placement::new(piece_index, z_mask));
                z_mask = shift_z.apply(z_mask);
            }
            y_mask = shift_y.apply(y_mask);
        }
        x_mask = shift_x.apply(x_mask);
    }

    placements
}

/// Returns every distinct placement of the piece: all shifts under all rotations.
///
/// Symmetric pieces produce the same mask more than once; only the first
/// occurrence is kept, so the order is (shift order) x (rotation order).
pub fn all_placements(piece_index: usize, piece: &Piece) -> Vec<Placement> {
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    let mut placements = Vec::new();

    for shifted in all_shifts(piece_index, piece) {
        for rotation in &ROTATIONS {
            let mask = rotation.apply(shifted.mask());
            if seen.insert(mask) {
                placements.push(Placement::new(piece_index, mask));
            }
        }
    }

    placements
}

/// Candidate placements for the piece at `piece_index` in the solver's order.
///
/// The first piece is only translated. Fixing its orientation picks one
/// representative out of each class of solutions related by a global rotation
/// of the assembled cube.
pub fn placements_for(piece_index: usize, piece: &Piece, is_first: bool) -> Vec<Placement> {
    if is_first {
        all_shifts(piece_index, piece)
    } else {
        all_placements(piece_index, piece)
    }
}

/// Candidate placement lists for a sequence of pieces, in the same order.
pub fn placement_sets(pieces: &[Piece]) -> Vec<Vec<Placement>> {
    pieces
        .iter()
        .enumerate()
        .map(|(piece_index, piece)| {
            let placements = placements_for(piece_index, piece, piece_index == 0);
            debug!(
                "piece {piece_index} ({}, {} cubes): {} placements",
                piece.color(),
                piece.cube_count(),
                placements.len()
            );
            placements
        })
        .collect()
}

impl Puzzle<'_> {
    /// Candidate placement lists for this puzzle's pieces.
    pub fn placement_sets(&self) -> Vec<Vec<Placement>> {
        placement_sets(self.pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{index_from_vector, max_corner, min_corner};
    use crate::pieces::{pieces, Color, PIECES, TETRIS_CUBE};

    fn cube(size: i32) -> Piece {
        let mut cubes = Vec::new();
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    cubes.push((x, y, z));
                }
            }
        }
        Piece::new(Color::Red, &cubes).expect("valid cube")
    }

    #[test]
    fn test_placement_equality_ignores_piece() {
        let a = Placement::new(0, 0b111);
        let b = Placement::new(5, 0b111);
        assert_eq!(a, b);
        let set: FxHashSet<Placement> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(a, Placement::new(0, 0b110));
    }

    #[test]
    fn test_shift_count_follows_bounding_box() {
        // bounding box (2, 2, 1) leaves 2 x 2 x 3 offsets
        assert_eq!(all_shifts(0, &PIECES[0]).len(), 12);
        // bounding box (3, 1, 0) leaves 1 x 3 x 4 offsets
        assert_eq!(all_shifts(2, &PIECES[2]).len(), 12);
        assert_eq!(all_shifts(0, &cube(4)).len(), 1);
        assert_eq!(all_shifts(0, &cube(1)).len(), 64);
    }

    #[test]
    fn test_shift_order_is_x_then_y_then_z() {
        let shifts = all_shifts(0, &cube(1));
        let origins: Vec<usize> = shifts
            .iter()
            .map(|placement| placement.mask().trailing_zeros() as usize)
            .collect();
        assert_eq!(origins[0], index_from_vector((0, 0, 0)));
        assert_eq!(origins[1], index_from_vector((0, 0, 1)));
        assert_eq!(origins[4], index_from_vector((0, 1, 0)));
        assert_eq!(origins[16], index_from_vector((1, 0, 0)));
        assert_eq!(origins[63], index_from_vector((3, 3, 3)));
    }

    #[test]
    fn test_shifts_stay_in_bounds() {
        for (i, piece) in pieces().iter().enumerate() {
            for placement in all_shifts(i, piece) {
                assert_eq!(placement.mask().count_ones(), piece.cube_count());
                // an in-bounds translation never wraps, so the shape is only offset
                let (max_x, max_y, max_z) = max_corner(placement.mask());
                let (box_x, box_y, box_z) = piece.bounding_box();
                let (low_x, low_y, low_z) = min_corner(placement.mask());
                assert_eq!(
                    (max_x - low_x, max_y - low_y, max_z - low_z),
                    (box_x, box_y, box_z),
                    "Piece {i} was split by a wrapping shift"
                );
            }
        }
    }

    #[test]
    fn test_placements_keep_cube_count_and_are_unique() {
        for (i, piece) in pieces().iter().enumerate() {
            let placements = all_placements(i, piece);
            let distinct: FxHashSet<u64> = placements.iter().map(Placement::mask).collect();
            assert_eq!(distinct.len(), placements.len(), "Piece {i} has duplicate placements");
            for placement in &placements {
                assert_eq!(placement.mask().count_ones(), piece.cube_count());
                assert_eq!(placement.piece(), i);
            }
        }
    }

    #[test]
    fn test_symmetric_piece_is_deduplicated() {
        // a 2x2x2 cube looks the same in every orientation
        let placements = all_placements(0, &cube(2));
        assert_eq!(placements.len(), 27);

        // a straight bar of 4 has only 3 orientations, each with 16 offsets
        let bar = Piece::new(Color::Blue, &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)])
            .expect("valid bar");
        assert_eq!(all_placements(0, &bar).len(), 48);
    }

    #[test]
    fn test_catalog_placement_counts() {
        let counts: Vec<usize> = TETRIS_CUBE.placement_sets().iter().map(Vec::len).collect();
        assert_eq!(counts, vec![12, 288, 288, 432, 288, 192, 288, 648, 432, 432, 216, 288]);
    }

    #[test]
    fn test_first_piece_is_shift_only() {
        let sets = placement_sets(pieces());
        assert_eq!(sets[0], all_shifts(0, &PIECES[0]));
        assert_eq!(sets[1], all_placements(1, &PIECES[1]));
        assert!(sets[0].iter().all(|placement| placement.piece() == 0));
    }
}
