use crate::codec::action_index::ActionIndex;
use crate::codec::error::MoveCodecError;
use crate::codec::layout::MovePattern;
use crate::r#move::{Move, MoveFlag};
use crate::utils::Square;

/// Decodes an action index back into the move it stands for. Queen
/// promotions are returned as plain queen-like moves; telling them apart
/// from non-promoting moves is up to the caller, which knows whether a pawn
/// sits on the origin square.
pub fn decode(action: ActionIndex) -> Result<Move, MoveCodecError> {
    let origin = action.get_origin();

    match MovePattern::from_plane(action.get_plane()) {
        MovePattern::QueenLike { direction, distance } => {
            let (ux, uy) = direction.to_delta();
            let dst = checked_destination(action, origin, ux * distance as i8, uy * distance as i8)?;
            Ok(Move::new_non_promotion(dst, origin))
        }
        MovePattern::KnightJump { direction } => {
            let (dx, dy) = direction.to_delta();
            let dst = checked_destination(action, origin, dx, dy)?;
            Ok(Move::new_non_promotion(dst, origin))
        }
        MovePattern::Underpromotion { piece, advance } => {
            // the promotion step runs one rank forward: downward for a pawn
            // on the second rank, upward otherwise
            let dy = if origin.get_rank() == 1 { -1 } else { 1 };
            let dst = checked_destination(action, origin, advance.to_file_delta(), dy)?;
            Ok(Move::new(dst, origin, piece.to_piece_type(), MoveFlag::Promotion))
        }
    }
}

/// Decodes a raw flat index, e.g. an argmax over the policy head's output.
pub fn decode_flat(value: u16) -> Result<Move, MoveCodecError> {
    decode(ActionIndex::new(value)?)
}

fn checked_destination(action: ActionIndex, origin: Square, dx: i8, dy: i8) -> Result<Square, MoveCodecError> {
    origin.offset_by(dx, dy).ok_or_else(|| MoveCodecError::OutOfRangeMove(
        format!("action {} from {} with displacement ({}, {})", action.value, origin, dx, dy)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::constants::NUM_OUTPUT_POLICY_MOVES;
    use crate::codec::context::PieceGrid;
    use crate::codec::encode::encode_uci;
    use crate::utils::PieceType;

    #[test]
    fn test_decode_pawn_double_push() {
        let grid = PieceGrid::initial();
        let index = encode_uci(&grid, "e2e4").unwrap();
        let mv = decode_flat(index.value).unwrap();
        assert_eq!(mv.uci(), "e2e4");
    }

    #[test]
    fn test_decode_knight_move() {
        let mv = decode(ActionIndex::from_parts(6, 0, 57)).unwrap();
        assert_eq!(mv.uci(), "g1f3");
    }

    #[test]
    fn test_decode_underpromotions() {
        let mv = decode(ActionIndex::from_parts(1, 6, 64)).unwrap();
        assert_eq!(mv.uci(), "b7a8n");
        assert_eq!(mv.get_vetted_promotion(), Some(PieceType::Knight));

        // a pawn on the second rank promotes downward
        let mv = decode(ActionIndex::from_parts(1, 1, 64)).unwrap();
        assert_eq!(mv.uci(), "b2a1n");

        let mv = decode(ActionIndex::from_parts(1, 1, 68)).unwrap();
        assert_eq!(mv.uci(), "b2b1b");
    }

    #[test]
    fn test_decode_never_produces_queen_promotion() {
        for value in 0..NUM_OUTPUT_POLICY_MOVES as u16 {
            if let Ok(mv) = decode_flat(value) {
                assert_ne!(mv.get_vetted_promotion(), Some(PieceType::Queen));
            }
        }
    }

    #[test]
    fn test_decode_out_of_range() {
        // east from h1 leaves the board
        assert!(matches!(
            decode(ActionIndex::from_parts(7, 0, 14)),
            Err(MoveCodecError::OutOfRangeMove(_))
        ));
        // north from the eighth rank leaves the board
        assert!(matches!(
            decode(ActionIndex::from_parts(0, 7, 0)),
            Err(MoveCodecError::OutOfRangeMove(_))
        ));
        // knight jump (+2, +1) from g8 leaves the board
        assert!(matches!(
            decode(ActionIndex::from_parts(6, 7, 58)),
            Err(MoveCodecError::OutOfRangeMove(_))
        ));
        // diagonal-left underpromotion from the a-file leaves the board
        assert!(matches!(
            decode(ActionIndex::from_parts(0, 6, 64)),
            Err(MoveCodecError::OutOfRangeMove(_))
        ));
        // upward underpromotion from the eighth rank leaves the board
        assert!(matches!(
            decode(ActionIndex::from_parts(0, 7, 65)),
            Err(MoveCodecError::OutOfRangeMove(_))
        ));
    }

    #[test]
    fn test_decode_flat_out_of_bounds() {
        assert!(matches!(
            decode_flat(NUM_OUTPUT_POLICY_MOVES as u16),
            Err(MoveCodecError::IndexOutOfBounds(_))
        ));
    }

    #[test]
    fn test_decode_total_over_in_board_destinations() {
        let mut decoded = 0;
        for value in 0..NUM_OUTPUT_POLICY_MOVES as u16 {
            match decode_flat(value) {
                Ok(mv) => {
                    assert_ne!(mv.get_source(), mv.get_destination());
                    decoded += 1;
                }
                Err(MoveCodecError::OutOfRangeMove(_)) => {}
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert!(decoded > 0);
    }
}
