//! Grid voting over intersection candidates.
//!
//! The image plane is partitioned into square cells and every candidate
//! point votes for each cell whose (inclusive) bounds contain it. The cell
//! with the strictly highest count wins; its geometric center is the
//! vanishing-point estimate. This is an `O(cells x candidates)` brute-force
//! scan; both factors are small (cells bounded by image size over cell size,
//! candidates bounded by the sampler cap).

use crate::types::Point2d;
use log::{debug, warn};
use serde::Serialize;

/// Winning grid cell of a voting pass.
///
/// `votes == 0` means no candidate fell into any cell; the reported cell
/// degenerates to `(0, 0)` and the center carries no information.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CellVote {
    pub col: usize,
    pub row: usize,
    pub center: Point2d,
    pub votes: usize,
}

/// Finds the grid cell capturing the most candidate points.
///
/// The grid has `floor(height / cell_size) + 1` rows and
/// `floor(width / cell_size) + 1` columns. Cells are enumerated column-major
/// (column outer, row inner) and a cell replaces the incumbent only when its
/// count strictly exceeds it, so ties keep the earliest-enumerated cell.
/// Candidates with non-finite coordinates (overflow from near-parallel line
/// pairs) contribute no vote anywhere.
pub fn find_vanishing_point(
    width: u32,
    height: u32,
    cell_size: f64,
    candidates: &[Point2d],
) -> CellVote {
    let mut best = CellVote {
        col: 0,
        row: 0,
        center: Point2d::new(cell_size * 0.5, cell_size * 0.5),
        votes: 0,
    };
    if !(cell_size.is_finite() && cell_size > 0.0) {
        warn!("grid vote skipped: invalid cell size {cell_size}");
        best.center = Point2d::origin();
        return best;
    }

    let grid_cols = (f64::from(width) / cell_size) as usize + 1;
    let grid_rows = (f64::from(height) / cell_size) as usize + 1;

    for col in 0..grid_cols {
        for row in 0..grid_rows {
            let left = col as f64 * cell_size;
            let right = (col + 1) as f64 * cell_size;
            let bottom = row as f64 * cell_size;
            let top = (row + 1) as f64 * cell_size;
            let votes = candidates
                .iter()
                .filter(|p| {
                    p.x.is_finite()
                        && p.y.is_finite()
                        && p.x >= left
                        && p.x <= right
                        && p.y >= bottom
                        && p.y <= top
                })
                .count();
            if votes > best.votes {
                best = CellVote {
                    col,
                    row,
                    center: Point2d::new((left + right) * 0.5, (bottom + top) * 0.5),
                    votes,
                };
                debug!(
                    "grid vote: cell ({col},{row}) leads with {votes} votes, center ({:.1}, {:.1})",
                    best.center.x, best.center.y
                );
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_candidate_in_single_cell() {
        // 100x100 image with cell size 100: the candidate lands in cell
        // (0,0) whose center is the image center.
        let vote = find_vanishing_point(100, 100, 100.0, &[Point2d::new(50.0, 50.0)]);
        assert_eq!((vote.col, vote.row), (0, 0));
        assert_eq!(vote.votes, 1);
        assert!((vote.center.x - 50.0).abs() < 1e-9);
        assert!((vote.center.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn winner_has_maximal_count() {
        let candidates = vec![
            Point2d::new(10.0, 10.0),
            Point2d::new(12.0, 11.0),
            Point2d::new(11.0, 12.0),
            Point2d::new(60.0, 60.0),
            Point2d::new(-30.0, 140.0),
        ];
        let cell = 25.0;
        let best = find_vanishing_point(100, 100, cell, &candidates);
        let cols = (100.0 / cell) as usize + 1;
        let rows = (100.0 / cell) as usize + 1;
        for col in 0..cols {
            for row in 0..rows {
                let count = candidates
                    .iter()
                    .filter(|p| {
                        p.x >= col as f64 * cell
                            && p.x <= (col + 1) as f64 * cell
                            && p.y >= row as f64 * cell
                            && p.y <= (row + 1) as f64 * cell
                    })
                    .count();
                assert!(best.votes >= count, "cell ({col},{row}) beats winner");
            }
        }
        assert_eq!(best.votes, 3);
        assert_eq!((best.col, best.row), (0, 0));
    }

    #[test]
    fn ties_keep_earliest_enumerated_cell() {
        // One interior candidate in cell (0,1) and one in cell (1,0). The
        // column-outer enumeration reaches (0,1) first, so it must win.
        let candidates = vec![Point2d::new(10.0, 30.0), Point2d::new(30.0, 10.0)];
        let best = find_vanishing_point(100, 50, 25.0, &candidates);
        assert_eq!(best.votes, 1);
        assert_eq!((best.col, best.row), (0, 1));
        assert!((best.center.x - 12.5).abs() < 1e-9);
        assert!((best.center.y - 37.5).abs() < 1e-9);
    }

    #[test]
    fn non_finite_candidates_cast_no_vote() {
        let candidates = vec![
            Point2d::new(f64::NAN, 10.0),
            Point2d::new(10.0, f64::INFINITY),
            Point2d::new(f64::NEG_INFINITY, f64::NAN),
        ];
        let best = find_vanishing_point(100, 100, 100.0, &candidates);
        assert_eq!(best.votes, 0);
        assert_eq!((best.col, best.row), (0, 0));
    }

    #[test]
    fn out_of_frame_candidates_still_vote() {
        // Vanishing points beyond the image border are legitimate; the grid
        // extends one cell past each axis.
        let candidates = vec![Point2d::new(110.0, 110.0), Point2d::new(115.0, 105.0)];
        let best = find_vanishing_point(100, 100, 100.0, &candidates);
        assert_eq!((best.col, best.row), (1, 1));
        assert_eq!(best.votes, 2);
    }

    #[test]
    fn empty_candidates_degenerate_to_initial_cell() {
        let best = find_vanishing_point(640, 480, 480.0, &[]);
        assert_eq!(best.votes, 0);
        assert_eq!((best.col, best.row), (0, 0));
    }
}
