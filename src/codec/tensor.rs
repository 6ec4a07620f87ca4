//! Bridge between the codec's buffers and `tch` tensors sized for the
//! policy head.

use lazy_static::lazy_static;
use tch::{Device, Kind, Tensor};
use crate::codec::constants::{BOARD_DIM, NUM_MOVE_PLANES};
use crate::codec::mask::ActionMask;

lazy_static! {
    pub static ref DEVICE: Device = Device::cuda_if_available();
}

/// Lifts a legal move mask into a tensor with shape [8, 8, 73], file-major
/// to match the flat action index composition.
pub fn mask_to_tensor(mask: &ActionMask) -> Tensor {
    Tensor::from_slice(mask.as_slice())
        .to_kind(Kind::Float)
        .to_device(*DEVICE)
        .reshape(&[BOARD_DIM as i64, BOARD_DIM as i64, NUM_MOVE_PLANES as i64])
}

/// Applies the mask to zero out illegal moves and renormalizes the
/// surviving probabilities.
pub fn renormalize_policy_tensor(policy_output: Tensor, legal_move_mask: Tensor) -> Tensor {
    let masked_policy = policy_output * &legal_move_mask;

    // Sum the masked probabilities to get the total probability of legal moves
    let sum_legal_probs_tensor = masked_policy.sum(Kind::Float);
    let sum_legal_probs = sum_legal_probs_tensor.double_value(&[]);

    if sum_legal_probs > 0. {
        masked_policy / sum_legal_probs
    } else {
        // If there are no legal moves, return the mask itself as probabilities (all zero)
        legal_move_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::context::PieceGrid;
    use crate::codec::mask::legal_action_mask;
    use crate::r#move::Move;

    #[test]
    fn test_mask_to_tensor() {
        let grid = PieceGrid::initial();
        let legal_moves = vec![Move::from_uci("e2e4").unwrap()];
        let mask = legal_action_mask(&grid, &legal_moves).unwrap();

        let tensor = mask_to_tensor(&mask);
        assert_eq!(tensor.size(), [BOARD_DIM as i64, BOARD_DIM as i64, NUM_MOVE_PLANES as i64]);
        assert_eq!(tensor.sum(Kind::Float).double_value(&[]), 1.);
    }
}
