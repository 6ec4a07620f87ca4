use crate::codec::action_index::ActionIndex;
use crate::codec::context::BoardContext;
use crate::codec::error::MoveCodecError;
use crate::codec::layout::MovePattern;
use crate::r#move::Move;
use crate::utils::{KnightMoveDirection, PawnAdvanceDirection, PieceType, QueenMoveDirection, UnderpromotionPieceType};

/// Encodes a move into the action index matching the policy head's output
/// layout. The board context supplies the piece on the origin square, which
/// decides whether a knight-shaped displacement is encoded as a knight jump.
pub fn encode(context: &impl BoardContext, mv: &Move) -> Result<ActionIndex, MoveCodecError> {
    let src = mv.get_source();
    let dst = mv.get_destination();
    let dx = dst.get_file() as i8 - src.get_file() as i8;
    let dy = dst.get_rank() as i8 - src.get_rank() as i8;

    let pattern = classify(context, mv, dx, dy)?;
    Ok(ActionIndex::from_parts(src.get_file(), src.get_rank(), pattern.to_plane()))
}

/// Convenience for callers holding the move as an algebraic string.
pub fn encode_uci(context: &impl BoardContext, uci: &str) -> Result<ActionIndex, MoveCodecError> {
    encode(context, &Move::from_uci(uci)?)
}

fn classify(context: &impl BoardContext, mv: &Move, dx: i8, dy: i8) -> Result<MovePattern, MoveCodecError> {
    if mv.is_underpromotion() {
        let advance = PawnAdvanceDirection::calc(dx, dy)
            .ok_or_else(|| MoveCodecError::InvalidMove(
                format!("{} is not a single forward pawn step", mv.uci())
            ))?;
        let piece = match mv.get_promotion() {
            PieceType::Knight => UnderpromotionPieceType::Knight,
            PieceType::Bishop => UnderpromotionPieceType::Bishop,
            PieceType::Rook => UnderpromotionPieceType::Rook,
            other => return Err(MoveCodecError::InvalidMove(
                format!("{} is not an underpromotion piece", other.to_char())
            ))
        };
        Ok(MovePattern::Underpromotion { piece, advance })
    } else if context.piece_type_on(mv.get_source()) == PieceType::Knight {
        match KnightMoveDirection::calc(dx, dy) {
            Some(direction) => Ok(MovePattern::KnightJump { direction }),
            None => Err(MoveCodecError::InvalidMove(
                format!("{} is not a knight jump", mv.uci())
            ))
        }
    } else {
        match QueenMoveDirection::calc_and_measure_distance(dx, dy) {
            Some((direction, distance)) => Ok(MovePattern::QueenLike { direction, distance }),
            None => Err(MoveCodecError::InvalidMove(
                format!("{} is neither straight nor diagonal", mv.uci())
            ))
        }
    }
}
