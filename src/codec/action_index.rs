use serde::{Deserialize, Serialize};
use crate::codec::constants::{NUM_MOVE_PLANES, NUM_OUTPUT_POLICY_MOVES};
use crate::codec::error::MoveCodecError;
use crate::utils::Square;

/// Identifies one cell of the 8x8x73 policy output. Internally, it is
/// stored as the flat index in [0, 4672).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionIndex {
    /// flat index: ((file * 8 + rank) * 73) + plane
    pub value: u16,
}

impl ActionIndex {
    /// Creates an action index from an arbitrary flat value, rejecting
    /// values outside the action space.
    pub fn new(value: u16) -> Result<ActionIndex, MoveCodecError> {
        if value >= NUM_OUTPUT_POLICY_MOVES as u16 {
            return Err(MoveCodecError::IndexOutOfBounds(value));
        }
        Ok(ActionIndex { value })
    }

    /// Creates an action index from the (file, rank, plane) triple.
    pub const fn from_parts(file: u8, rank: u8, plane: u8) -> ActionIndex {
        assert!(file < 8 && rank < 8, "File or rank out of bounds");
        assert!(plane < NUM_MOVE_PLANES, "Plane out of bounds");
        ActionIndex {
            value: (file as u16 * 8 + rank as u16) * NUM_MOVE_PLANES as u16 + plane as u16
        }
    }

    /// Gets the zero-based file of the origin square.
    pub const fn get_file(&self) -> u8 {
        (self.value / NUM_MOVE_PLANES as u16 / 8) as u8
    }

    /// Gets the zero-based rank of the origin square.
    pub const fn get_rank(&self) -> u8 {
        (self.value / NUM_MOVE_PLANES as u16 % 8) as u8
    }

    /// Gets the move plane in 0..=72.
    pub const fn get_plane(&self) -> u8 {
        (self.value % NUM_MOVE_PLANES as u16) as u8
    }

    /// Gets the origin square the index is anchored on.
    pub const fn get_origin(&self) -> Square {
        Square::from_file_rank(self.get_file(), self.get_rank())
    }

    /// Unpacks the index into its (file, rank, plane) triple.
    pub const fn unpack(&self) -> (u8, u8, u8) {
        (self.get_file(), self.get_rank(), self.get_plane())
    }
}

impl std::fmt::Display for ActionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.get_origin(), self.get_plane())
    }
}

impl std::fmt::Debug for ActionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::constants::NUM_OUTPUT_POLICY_MOVES;

    #[test]
    fn test_action_index_roundtrip() {
        for file in 0..8 {
            for rank in 0..8 {
                for plane in 0..NUM_MOVE_PLANES {
                    let index = ActionIndex::from_parts(file, rank, plane);
                    assert_eq!(index.unpack(), (file, rank, plane));
                    assert_eq!(index.value, (file as u16 * 8 + rank as u16) * 73 + plane as u16);
                }
            }
        }
    }

    #[test]
    fn test_flat_roundtrip() {
        for value in 0..NUM_OUTPUT_POLICY_MOVES as u16 {
            let index = ActionIndex::new(value).unwrap();
            let (file, rank, plane) = index.unpack();
            assert_eq!(ActionIndex::from_parts(file, rank, plane).value, value);
        }
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(ActionIndex::new(NUM_OUTPUT_POLICY_MOVES as u16 - 1).is_ok());
        assert!(matches!(
            ActionIndex::new(NUM_OUTPUT_POLICY_MOVES as u16),
            Err(MoveCodecError::IndexOutOfBounds(_))
        ));
    }

    #[test]
    fn test_origin() {
        let index = ActionIndex::from_parts(4, 1, 1);
        assert_eq!(index.get_origin(), Square::E2);
    }
}
