// Constants sizing the 8x8x73 policy action space
pub const BOARD_DIM: u8 = 8; // board edge length
pub const NUM_SQUARES: u8 = 64;

pub const NUM_RAY_DIRECTIONS: u8 = 8; // 8 compass directions for queen-like moves
pub const MAX_RAY_LENGTH: u8 = 7; // Maximum length of a queen-like move
pub const NUM_QUEEN_LIKE_MOVES: u8 = NUM_RAY_DIRECTIONS * MAX_RAY_LENGTH; // 56 possible queen-like moves

pub const NUM_KNIGHT_MOVE_DIRECTIONS: u8 = 8; // 8 knight jump shapes

pub const NUM_PAWN_MOVE_DIRECTIONS: u8 = 3; // 3 possible pawn moves
pub const NUM_UNDERPROMOTION_PIECES: u8 = 3; // 3 underpromotions (knight, bishop, rook)
pub const NUM_WAYS_OF_UNDERPROMOTION: u8 = NUM_UNDERPROMOTION_PIECES * NUM_PAWN_MOVE_DIRECTIONS; // 9 ways of underpromotion

pub const KNIGHT_PLANE_OFFSET: u8 = NUM_QUEEN_LIKE_MOVES; // knight planes are 56..=63
pub const UNDERPROMOTION_PLANE_OFFSET: u8 = NUM_QUEEN_LIKE_MOVES + NUM_KNIGHT_MOVE_DIRECTIONS; // underpromotion planes are 64..=72

pub const NUM_MOVE_PLANES: u8 = NUM_QUEEN_LIKE_MOVES + NUM_KNIGHT_MOVE_DIRECTIONS + NUM_WAYS_OF_UNDERPROMOTION; // 73 move planes per origin square
pub const NUM_OUTPUT_POLICY_MOVES: usize = NUM_SQUARES as usize * NUM_MOVE_PLANES as usize; // 4672 possible moves for policy head
