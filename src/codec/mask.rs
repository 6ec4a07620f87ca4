use crate::codec::action_index::ActionIndex;
use crate::codec::constants::NUM_OUTPUT_POLICY_MOVES;
use crate::codec::context::BoardContext;
use crate::codec::encode::encode;
use crate::codec::error::MoveCodecError;
use crate::r#move::Move;

/// 0/1 mask over the whole 4672-entry action space, marking the indices of
/// currently legal moves. Values are f32 so the mask can be multiplied
/// directly into a policy vector.
pub struct ActionMask {
    values: Box<[f32; NUM_OUTPUT_POLICY_MOVES]>,
}

impl ActionMask {
    pub fn new_empty() -> ActionMask {
        ActionMask { values: Box::new([0.; NUM_OUTPUT_POLICY_MOVES]) }
    }

    pub fn set(&mut self, action: ActionIndex) {
        self.values[action.value as usize] = 1.;
    }

    pub fn is_set(&self, action: ActionIndex) -> bool {
        self.values[action.value as usize] != 0.
    }

    pub fn count_set(&self) -> usize {
        self.values.iter().filter(|value| **value != 0.).count()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values[..]
    }

    /// Iterates over the flat indices marked legal.
    pub fn iter_set_indices(&self) -> impl Iterator<Item = u16> + '_ {
        self.values.iter()
            .enumerate()
            .filter(|(_, value)| **value != 0.)
            .map(|(index, _)| index as u16)
    }
}

/// Builds the legal move mask for a position: exactly the indices produced
/// by `encode` on each legal move are set. An encoding failure for a
/// nominally-legal move signals a rules-engine/codec mismatch and is
/// surfaced, never skipped.
pub fn legal_action_mask(context: &impl BoardContext, legal_moves: &[Move]) -> Result<ActionMask, MoveCodecError> {
    let mut mask = ActionMask::new_empty();
    for mv in legal_moves {
        mask.set(encode(context, mv)?);
    }
    Ok(mask)
}

/// Zeroes out the entries of a raw policy not marked legal and renormalizes
/// the surviving probability mass. Leaves the policy all-zero if no legal
/// entry carries probability.
pub fn renormalize_policy(policy: &mut [f32], mask: &ActionMask) {
    assert!(policy.len() == NUM_OUTPUT_POLICY_MOVES, "Policy length mismatch");
    let mut sum_legal_probs = 0.;
    for (prob, mask_value) in policy.iter_mut().zip(mask.as_slice()) {
        *prob *= mask_value;
        sum_legal_probs += *prob;
    }
    if sum_legal_probs > 0. {
        for prob in policy.iter_mut() {
            *prob /= sum_legal_probs;
        }
    }
}
