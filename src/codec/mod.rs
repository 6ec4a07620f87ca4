//! The move codec: a bidirectional mapping between moves and the 8x8x73
//! action space of the policy head, plus the legal move mask built on it.

mod action_index;
mod constants;
mod context;
mod decode;
mod encode;
mod error;
mod layout;
mod mask;
#[cfg(feature = "neural")]
mod tensor;

pub use action_index::*;
pub use constants::*;
pub use context::*;
pub use decode::*;
pub use encode::*;
pub use error::*;
pub use layout::*;
pub use mask::*;
#[cfg(feature = "neural")]
pub use tensor::*;
