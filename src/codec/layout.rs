//! The canonical assignment of move patterns to the 73 planes of an origin
//! square: planes 0..=55 are queen-like moves (8 directions x 7 distances),
//! 56..=63 are knight jumps, and 64..=72 are underpromotions (3 pieces x 3
//! pawn advances).

use lazy_static::lazy_static;
use crate::codec::constants::{KNIGHT_PLANE_OFFSET, MAX_RAY_LENGTH, NUM_MOVE_PLANES, NUM_PAWN_MOVE_DIRECTIONS, UNDERPROMOTION_PLANE_OFFSET};
use crate::utils::{KnightMoveDirection, PawnAdvanceDirection, QueenMoveDirection, UnderpromotionPieceType};

/// The move pattern a single plane stands for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MovePattern {
    QueenLike { direction: QueenMoveDirection, distance: u8 },
    KnightJump { direction: KnightMoveDirection },
    Underpromotion { piece: UnderpromotionPieceType, advance: PawnAdvanceDirection },
}

impl MovePattern {
    /// Maps this pattern onto its plane in 0..=72.
    pub const fn to_plane(&self) -> u8 {
        match self {
            MovePattern::QueenLike { direction, distance } => {
                *direction as u8 * MAX_RAY_LENGTH + (*distance - 1)
            }
            MovePattern::KnightJump { direction } => {
                KNIGHT_PLANE_OFFSET + *direction as u8
            }
            MovePattern::Underpromotion { piece, advance } => {
                UNDERPROMOTION_PLANE_OFFSET + piece.get_index() * NUM_PAWN_MOVE_DIRECTIONS + *advance as u8
            }
        }
    }

    /// Inverse of `to_plane`.
    pub fn from_plane(plane: u8) -> MovePattern {
        assert!(plane < NUM_MOVE_PLANES, "Plane out of bounds");
        PLANE_PATTERNS[plane as usize]
    }
}

lazy_static! {
    /// Plane layout table, holding the pattern every plane decodes to.
    pub static ref PLANE_PATTERNS: [MovePattern; NUM_MOVE_PLANES as usize] = generate_plane_patterns();
}

fn generate_plane_patterns() -> [MovePattern; NUM_MOVE_PLANES as usize] {
    let placeholder = MovePattern::QueenLike { direction: QueenMoveDirection::North, distance: 1 };
    let mut patterns = [placeholder; NUM_MOVE_PLANES as usize];
    for direction in QueenMoveDirection::iter() {
        for distance in 1..=MAX_RAY_LENGTH {
            let pattern = MovePattern::QueenLike { direction, distance };
            patterns[pattern.to_plane() as usize] = pattern;
        }
    }
    for direction in KnightMoveDirection::iter() {
        let pattern = MovePattern::KnightJump { direction };
        patterns[pattern.to_plane() as usize] = pattern;
    }
    for piece in UnderpromotionPieceType::iter() {
        for advance in PawnAdvanceDirection::iter() {
            let pattern = MovePattern::Underpromotion { piece, advance };
            patterns[pattern.to_plane() as usize] = pattern;
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::constants::{KNIGHT_PLANE_OFFSET, UNDERPROMOTION_PLANE_OFFSET};

    fn iter_all_patterns() -> Vec<MovePattern> {
        let mut patterns = Vec::new();
        for direction in QueenMoveDirection::iter() {
            for distance in 1..=MAX_RAY_LENGTH {
                patterns.push(MovePattern::QueenLike { direction, distance });
            }
        }
        for direction in KnightMoveDirection::iter() {
            patterns.push(MovePattern::KnightJump { direction });
        }
        for piece in UnderpromotionPieceType::iter() {
            for advance in PawnAdvanceDirection::iter() {
                patterns.push(MovePattern::Underpromotion { piece, advance });
            }
        }
        patterns
    }

    #[test]
    fn test_plane_partition_is_total() {
        let patterns = iter_all_patterns();
        assert_eq!(patterns.len(), NUM_MOVE_PLANES as usize);

        let mut planes: Vec<u8> = patterns.iter().map(|p| p.to_plane()).collect();
        planes.sort_unstable();
        let expected: Vec<u8> = (0..NUM_MOVE_PLANES).collect();
        assert_eq!(planes, expected);
    }

    #[test]
    fn test_plane_roundtrip() {
        for pattern in iter_all_patterns() {
            assert_eq!(MovePattern::from_plane(pattern.to_plane()), pattern);
        }
    }

    #[test]
    fn test_category_ranges() {
        for plane in 0..KNIGHT_PLANE_OFFSET {
            assert!(matches!(MovePattern::from_plane(plane), MovePattern::QueenLike { .. }));
        }
        for plane in KNIGHT_PLANE_OFFSET..UNDERPROMOTION_PLANE_OFFSET {
            assert!(matches!(MovePattern::from_plane(plane), MovePattern::KnightJump { .. }));
        }
        for plane in UNDERPROMOTION_PLANE_OFFSET..NUM_MOVE_PLANES {
            assert!(matches!(MovePattern::from_plane(plane), MovePattern::Underpromotion { .. }));
        }
    }

    #[test]
    fn test_pinned_planes() {
        // north two squares sits on plane 1
        let pattern = MovePattern::QueenLike { direction: QueenMoveDirection::North, distance: 2 };
        assert_eq!(pattern.to_plane(), 1);

        // the (-1, +2) knight jump sits on plane 57
        let pattern = MovePattern::KnightJump { direction: KnightMoveDirection::TwoUpOneLeft };
        assert_eq!(pattern.to_plane(), 57);

        // knight underpromotion on a diagonal-left capture sits on plane 64
        let pattern = MovePattern::Underpromotion {
            piece: UnderpromotionPieceType::Knight,
            advance: PawnAdvanceDirection::DiagonalLeft,
        };
        assert_eq!(pattern.to_plane(), 64);
    }
}
