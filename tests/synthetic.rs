//! Solver scenarios on small hand-built piece sets.

use std::ops::Range;

use tetris_cube::grid::index_from_vector;
use tetris_cube::placements::{all_placements, all_shifts, placement_sets, placements_for};
use tetris_cube::{solve, Color, Piece, PieceError, Placement, Puzzle};

/// Mask of the axis-aligned box spanning the given coordinate ranges.
fn block(xs: Range<i32>, ys: Range<i32>, zs: Range<i32>) -> u64 {
    let mut mask = 0u64;
    for x in xs {
        for y in ys.clone() {
            for z in zs.clone() {
                mask |= 1 << index_from_vector((x, y, z));
            }
        }
    }
    mask
}

#[test]
fn test_complementary_slabs() {
    let left_cubes: Vec<(i32, i32, i32)> = (0..2)
        .flat_map(|x| (0..4).flat_map(move |y| (0..4).map(move |z| (x, y, z))))
        .collect();
    let left = Piece::new(Color::Red, &left_cubes).expect("anchored slab");
    assert_eq!(left.cube_count(), 32);

    // the right slab does not touch x = 0, so it can only be built from its mask
    let right_cubes: Vec<(i32, i32, i32)> =
        left_cubes.iter().map(|&(x, y, z)| (x + 2, y, z)).collect();
    assert_eq!(
        Piece::new(Color::Blue, &right_cubes),
        Err(PieceError::NotAnchored { axis: 0, min: 2 })
    );
    let right = Piece::from_mask(Color::Blue, !left.mask()).expect("non-empty slab");

    // A spans x in {0, 1}, so its bounding box leaves three x offsets
    let left_shifts = placements_for(0, &left, true);
    assert_eq!(left_shifts.len(), 3);
    assert_eq!(all_shifts(1, &right).len(), 1, "the right slab already touches x = 3");

    let sets = vec![left_shifts.clone(), all_shifts(1, &right)];
    let solutions = solve(&sets);
    assert_eq!(solutions.len(), 1);
    assert_eq!(
        solutions[0].placements(),
        &[Placement::new(0, left.mask()), Placement::new(1, right.mask())]
    );
    assert_eq!(solutions[0].placements()[1].piece(), 1);
    assert!(solutions[0].is_complete());

    // rotating B as well adds the mirror assignment with A shifted to x in {2, 3}
    let rotated = placements_for(1, &right, false);
    assert_eq!(rotated.len(), 6, "a slab can fill either half along each axis");
    let solutions = solve(&[left_shifts, rotated]);
    assert_eq!(solutions.len(), 2);
    assert_eq!(solutions[0].placements()[0].mask(), left.mask());
    assert_eq!(solutions[1].placements()[0].mask(), right.mask());
    assert_eq!(solutions[1].placements()[1].mask(), left.mask());
}

#[test]
fn test_eight_small_cubes() {
    let piece = Piece::from_mask(Color::Yellow, block(0..2, 0..2, 0..2)).expect("non-empty cube");
    let catalog = [piece; 8];
    let puzzle = Puzzle::new(&catalog);

    let sets = puzzle.placement_sets();
    assert!(sets.iter().all(|set| set.len() == 27));
    assert_eq!(all_placements(3, &piece).len(), 27);

    // one aligned tiling, with the eight identical pieces assigned in every order
    let solutions = puzzle.solve(None);
    assert_eq!(solutions.len(), 40320);
    for solution in &solutions {
        assert!(solution.is_complete());
        let mut counts = [0; 8];
        for owner in solution.cell_owners() {
            counts[owner] += 1;
        }
        assert_eq!(counts, [8; 8]);
    }

    assert_eq!(puzzle.solve(None), solutions, "solution order must be deterministic");
    assert_eq!(puzzle.solve(Some(10))[..], solutions[..10]);
}

#[test]
fn test_unsolvable_pieces_yield_no_solutions() {
    // the bent half cannot fill the flat half left over by the slab
    let slab = block(0..2, 0..4, 0..4);
    let bent = (slab & !1) | (1 << index_from_vector((2, 0, 0)));
    let pieces = [
        Piece::from_mask(Color::Red, slab).expect("non-empty"),
        Piece::from_mask(Color::Blue, bent).expect("non-empty"),
    ];
    let puzzle = Puzzle::new(&pieces);

    let sets = placement_sets(puzzle.pieces);
    assert!(!sets[1].is_empty());
    assert!(solve(&sets).is_empty());
}
