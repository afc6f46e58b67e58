//! Direction tables for each piece family.
//!
//! A direction is a `(row delta, column delta)` pair. Row deltas are in board-array terms,
//! so `-1` points toward Black's back rank.

/// A `(row delta, column delta)` step.
pub type Direction = (i8, i8);

/// Knight jumps.
pub const KNIGHT_DIRECTIONS: [Direction; 8] = [
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
];

/// Orthogonal rays (rook).
pub const ROOK_DIRECTIONS: [Direction; 4] = [(1, 0), (0, -1), (0, 1), (-1, 0)];

/// Diagonal rays (bishop).
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// All eight neighbours: king steps and queen rays.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
];

/// Pawn capture steps for a pawn moving with the given row direction.
#[inline]
pub const fn pawn_capture_directions(pawn_direction: i8) -> [Direction; 2] {
    [(pawn_direction, -1), (pawn_direction, 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_directions_are_rook_plus_bishop() {
        for dir in ROOK_DIRECTIONS.iter().chain(BISHOP_DIRECTIONS.iter()) {
            assert!(ALL_DIRECTIONS.contains(dir));
        }
        assert_eq!(ALL_DIRECTIONS.len(), 8);
    }

    #[test]
    fn knight_jumps_are_distinct_l_shapes() {
        for (i, &(dr, dc)) in KNIGHT_DIRECTIONS.iter().enumerate() {
            assert_eq!(dr.abs() + dc.abs(), 3);
            assert!(!KNIGHT_DIRECTIONS[i + 1..].contains(&(dr, dc)));
        }
    }

    #[test]
    fn pawn_captures_are_diagonal() {
        assert_eq!(pawn_capture_directions(-1), [(-1, -1), (-1, 1)]);
        assert_eq!(pawn_capture_directions(1), [(1, -1), (1, 1)]);
    }
}
