mod square;
mod piece_type;
mod move_direction;

pub use square::*;
pub use piece_type::*;
pub use move_direction::*;
