//! 3D rotation and translation tables as permutations of cell indices.
//!
//! A cube has 24 possible orientations in 3D space (the rotation group of a cube).
//! Each rotation is a signed permutation matrix with determinant +1: row 0 picks
//! one of 6 signed unit vectors, row 1 one of the 4 signed unit vectors not parallel
//! to it, and row 2 is forced to their cross product, so reflections never arise.
//!
//! Every transform is stored as a total permutation of the 64 cell indices and
//! built at compile time, so the tables below are immutable process-wide constants.

use crate::grid::{
    cells, centered_from_index, index_from_centered, index_from_vector, vector_from_index,
    CELL_COUNT, DIM,
};

/// Number of distinct cube orientations.
pub const NUM_ROTATIONS: usize = 24;

/// A signed 3x3 integer matrix acting on centered vectors (row-major).
pub type Matrix = [[i32; 3]; 3];

/// A permutation of the cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transform {
    /// `map[i]` is the cell that cell `i` moves to.
    map: [u8; CELL_COUNT],
}

impl Transform {
    /// The transform that leaves every cell in place.
    pub const IDENTITY: Self = {
        let mut map = [0u8; CELL_COUNT];
        let mut cell_index = 0;
        while cell_index < CELL_COUNT {
            map[cell_index] = cell_index as u8;
            cell_index += 1;
        }
        Self { map }
    };

    /// Unit shift along `axis` (0 = x, 1 = y, 2 = z).
    ///
    /// The coordinate wraps modulo DIM on that axis only, so the permutation is
    /// total and four applications give back the identity.
    pub const fn translation(axis: usize) -> Self {
        assert!(axis < 3, "axis must be 0, 1 or 2");
        let wrap = DIM as i32;
        let mut map = [0u8; CELL_COUNT];
        let mut cell_index = 0;
        while cell_index < CELL_COUNT {
            let (x, y, z) = vector_from_index(cell_index);
            let shifted = match axis {
                0 => ((x + 1) % wrap, y, z),
                1 => (x, (y + 1) % wrap, z),
                _ => (x, y, (z + 1) % wrap),
            };
            map[cell_index] = index_from_vector(shifted) as u8;
            cell_index += 1;
        }
        Self { map }
    }

    /// Rotation of the volume about its center by a signed permutation matrix.
    ///
    /// The matrix must have exactly one nonzero entry (+1 or -1) per row and column.
    pub const fn rotation(matrix: &Matrix) -> Self {
        let mut map = [0u8; CELL_COUNT];
        let mut cell_index = 0;
        while cell_index < CELL_COUNT {
            let centered = centered_from_index(cell_index);
            map[cell_index] = index_from_centered((
                dot(&matrix[0], centered),
                dot(&matrix[1], centered),
                dot(&matrix[2], centered),
            )) as u8;
            cell_index += 1;
        }
        Self { map }
    }

    /// Returns the cell that `cell_index` moves to.
    #[inline(always)]
    pub const fn image(&self, cell_index: usize) -> usize {
        self.map[cell_index] as usize
    }

    /// Moves every occupied cell of `mask` to its image.
    #[inline]
    pub fn apply(&self, mask: u64) -> u64 {
        cells(mask).fold(0, |image, cell_index| image | 1 << self.map[cell_index])
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Returns the transform equivalent to applying `first` and then `second`.
pub fn compose(first: &Transform, second: &Transform) -> Transform {
    let mut map = [0u8; CELL_COUNT];
    for (cell_index, image) in map.iter_mut().enumerate() {
        *image = second.map[first.image(cell_index)];
    }
    Transform { map }
}

#[inline(always)]
const fn dot(row: &[i32; 3], vector: (i32, i32, i32)) -> i32 {
    row[0] * vector.0 + row[1] * vector.1 + row[2] * vector.2
}

/// Vector perpendicular to `u` and `v`, oriented by the right-hand rule.
const fn cross(u: [i32; 3], v: [i32; 3]) -> [i32; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Enumerates the 24 proper rotation matrices.
///
/// Ordering: row 0 walks the axes z, y, x with sign +1 before -1; for each,
/// row 1 walks the remaining two axes in the same order. The identity is
/// entry 18 (row 0 = +x, row 1 = +y).
const fn build_rotation_matrices() -> [Matrix; NUM_ROTATIONS] {
    let mut matrices = [[[0; 3]; 3]; NUM_ROTATIONS];
    let mut count = 0;

    let mut first_axis = 3;
    while first_axis > 0 {
        first_axis -= 1;
        let mut first_sign = 1;
        while first_sign >= -1 {
            let mut second_axis = 3;
            while second_axis > 0 {
                second_axis -= 1;
                if second_axis != first_axis {
                    let mut second_sign = 1;
                    while second_sign >= -1 {
                        let mut first_row = [0; 3];
                        first_row[first_axis] = first_sign;
                        let mut second_row = [0; 3];
                        second_row[second_axis] = second_sign;
                        matrices[count] = [first_row, second_row, cross(first_row, second_row)];
                        count += 1;
                        second_sign -= 2;
                    }
                }
            }
            first_sign -= 2;
        }
    }

    assert!(count == NUM_ROTATIONS, "expected exactly 24 rotations");
    matrices
}

const fn build_rotation_table() -> [Transform; NUM_ROTATIONS] {
    let mut table = [Transform::IDENTITY; NUM_ROTATIONS];
    let mut rot = 0;
    while rot < NUM_ROTATIONS {
        table[rot] = Transform::rotation(&ROTATION_MATRICES[rot]);
        rot += 1;
    }
    table
}

/// The 24 rotation matrices, in table order.
pub const ROTATION_MATRICES: [Matrix; NUM_ROTATIONS] = build_rotation_matrices();

/// Unit shifts along x, y and z.
pub static SHIFTS: [Transform; 3] = [
    Transform::translation(0),
    Transform::translation(1),
    Transform::translation(2),
];

/// The 24 rotations of the volume about its center, including the identity.
pub static ROTATIONS: [Transform; NUM_ROTATIONS] = build_rotation_table();
