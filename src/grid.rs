//! Cell indexing and text rendering for the 4x4x4 puzzle volume.
//!
//! Three representations of a cell are used throughout the crate:
//! - a linear index in `0..64`, packed as `x + 4y + 16z`;
//! - a corner vector `(x, y, z)` with every component in `0..4`;
//! - a centered vector `(2x - 3, 2y - 3, 2z - 3)` whose odd components
//!   `{-3, -1, 1, 3}` are measured from the center of the volume, so integer
//!   rotation matrices act on it without any fractional arithmetic.
//!
//! A `u64` occupancy mask flags cell `i` as occupied by setting bit `i`.

use crate::pieces::Coord;
use crate::placements::Placement;

/// Cells per axis.
pub const DIM: usize = 4;

/// Total number of cells in the volume.
pub const CELL_COUNT: usize = DIM * DIM * DIM;

/// Mask with every cell occupied.
pub const FULL_MASK: u64 = u64::MAX;

/// Doubled distance from a corner cell's center to the volume's center.
const CENTER_OFFSET: i32 = DIM as i32 - 1;

/// Converts a linear cell index to its corner vector.
#[inline(always)]
pub const fn vector_from_index(cell_index: usize) -> Coord {
    (
        (cell_index % DIM) as i32,
        ((cell_index / DIM) % DIM) as i32,
        (cell_index / (DIM * DIM)) as i32,
    )
}

/// Converts a corner vector to its linear cell index.
///
/// Index order is x-minor: `idx = x + y * DIM + z * DIM * DIM`.
#[inline(always)]
pub const fn index_from_vector(vector: Coord) -> usize {
    let (x, y, z) = vector;
    (x as usize) + (y as usize) * DIM + (z as usize) * DIM * DIM
}

/// Converts a linear cell index to its centered vector.
#[inline(always)]
pub const fn centered_from_index(cell_index: usize) -> Coord {
    let (x, y, z) = vector_from_index(cell_index);
    (
        2 * x - CENTER_OFFSET,
        2 * y - CENTER_OFFSET,
        2 * z - CENTER_OFFSET,
    )
}

/// Converts a centered vector back to its linear cell index.
///
/// Only defined for centered vectors of cells inside the volume.
#[inline(always)]
pub const fn index_from_centered(centered: Coord) -> usize {
    let (cx, cy, cz) = centered;
    index_from_vector((
        (cx + CENTER_OFFSET) / 2,
        (cy + CENTER_OFFSET) / 2,
        (cz + CENTER_OFFSET) / 2,
    ))
}

/// Returns true if every component of the corner vector lies in `0..DIM`.
#[inline(always)]
pub const fn in_bounds(vector: Coord) -> bool {
    let limit = DIM as i32;
    vector.0 >= 0
        && vector.0 < limit
        && vector.1 >= 0
        && vector.1 < limit
        && vector.2 >= 0
        && vector.2 < limit
}

/// Iterates over the indices of the occupied cells of a mask, lowest first.
pub fn cells(mask: u64) -> impl Iterator<Item = usize> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let cell_index = remaining.trailing_zeros() as usize;
        // clear the lowest set bit
        remaining &= remaining - 1;
        Some(cell_index)
    })
}

/// Largest coordinate reached along each axis by the occupied cells.
///
/// An empty mask yields `(0, 0, 0)`.
pub const fn max_corner(mask: u64) -> Coord {
    let mut max = (0, 0, 0);
    let mut remaining = mask;
    while remaining != 0 {
        let (x, y, z) = vector_from_index(remaining.trailing_zeros() as usize);
        if x > max.0 {
            max.0 = x;
        }
        if y > max.1 {
            max.1 = y;
        }
        if z > max.2 {
            max.2 = z;
        }
        remaining &= remaining - 1;
    }
    max
}

/// Smallest coordinate reached along each axis by the occupied cells.
///
/// An empty mask yields `(DIM, DIM, DIM)`.
pub const fn min_corner(mask: u64) -> Coord {
    let limit = DIM as i32;
    let mut min = (limit, limit, limit);
    let mut remaining = mask;
    while remaining != 0 {
        let (x, y, z) = vector_from_index(remaining.trailing_zeros() as usize);
        if x < min.0 {
            min.0 = x;
        }
        if y < min.1 {
            min.1 = y;
        }
        if z < min.2 {
            min.2 = z;
        }
        remaining &= remaining - 1;
    }
    min
}

/// Renders the volume as DIM z-layers side by side, one character per cell.
///
/// Rows run from the top (y = DIM-1) to the bottom (y = 0); x grows to the right.
fn format_layers(cell_char: impl Fn(usize) -> char) -> String {
    let labels: Vec<String> = (0..DIM)
        .map(|z| format!("z={:<width$}", z, width = DIM - 2))
        .collect();
    let mut output = labels.join("  ").trim_end().to_string();
    output.push('\n');

    for y in (0..DIM).rev() {
        for z in 0..DIM {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..DIM {
                output.push(cell_char(index_from_vector((x as i32, y as i32, z as i32))));
            }
        }
        output.push('\n');
    }

    output
}

/// Formats an occupancy mask, `X` for occupied cells and `_` for empty ones.
pub fn format_mask(mask: u64) -> String {
    format_layers(|cell_index| {
        if mask & (1 << cell_index) != 0 {
            'X'
        } else {
            '_'
        }
    })
}

/// Formats a (possibly partial) solution with the owning piece position in each cell.
///
/// Positions 0-9 print as digits, 10 and up as `A`, `B`, ...; empty cells show as '.'.
pub fn format_solution(solution: &[Placement]) -> String {
    let mut owners = [None; CELL_COUNT];
    for (position, placement) in solution.iter().enumerate() {
        for cell_index in placement.cells() {
            owners[cell_index] = Some(position);
        }
    }

    format_layers(|cell_index| match owners[cell_index] {
        None => '.',
        Some(position) => char::from_digit(position as u32, 36)
            .map(|digit| digit.to_ascii_uppercase())
            .unwrap_or('?'),
    })
}
