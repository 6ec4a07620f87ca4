//! Codec between chess moves and the dense 8x8x73 action space of an
//! AlphaZero-style policy head.
//!
//! The crate exposes three operations: [`encode`] maps a move onto its
//! action index, [`decode`] inverts that mapping, and [`legal_action_mask`]
//! builds the 4672-entry 0/1 mask a policy vector is multiplied against.
//! All three are pure functions over the static plane layout; the only
//! input beyond the move itself is a [`BoardContext`] supplying the piece
//! on the origin square, which an external rules engine implements.

mod codec;
mod r#move;
mod utils;

pub use codec::*;
pub use r#move::*;
pub use utils::*;
