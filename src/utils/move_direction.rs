//! Move direction related enums and functions.

use static_init::dynamic;

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum QueenMoveDirection {
    North=0, NorthEast=1, East=2, SouthEast=3,
    South=4, SouthWest=5, West=6, NorthWest=7,
}

const ALL_QUEEN_MOVE_DIRECTIONS: [QueenMoveDirection; 8] = [
    QueenMoveDirection::North, QueenMoveDirection::NorthEast,
    QueenMoveDirection::East, QueenMoveDirection::SouthEast,
    QueenMoveDirection::South, QueenMoveDirection::SouthWest,
    QueenMoveDirection::West, QueenMoveDirection::NorthWest
];

impl QueenMoveDirection {
    pub const fn from(value: u8) -> QueenMoveDirection {
        assert!(value < 8, "Queen move direction value out of bounds");
        unsafe { std::mem::transmute::<u8, QueenMoveDirection>(value) }
    }

    pub fn iter() -> impl Iterator<Item = QueenMoveDirection> {
        ALL_QUEEN_MOVE_DIRECTIONS.iter().copied()
    }

    /// Unit displacement (dx, dy) of this direction.
    pub const fn to_delta(&self) -> (i8, i8) {
        match self {
            QueenMoveDirection::North => (0, 1),
            QueenMoveDirection::NorthEast => (1, 1),
            QueenMoveDirection::East => (1, 0),
            QueenMoveDirection::SouthEast => (1, -1),
            QueenMoveDirection::South => (0, -1),
            QueenMoveDirection::SouthWest => (-1, -1),
            QueenMoveDirection::West => (-1, 0),
            QueenMoveDirection::NorthWest => (-1, 1)
        }
    }

    /// Classifies a displacement into a compass direction and a distance in
    /// squares. Returns None for a zero displacement and for displacements
    /// that are neither straight nor exactly diagonal.
    pub const fn calc_and_measure_distance(dx: i8, dy: i8) -> Option<(QueenMoveDirection, u8)> {
        let direction = match (dx.signum(), dy.signum()) {
            (0, 0) => return None,
            (0, 1) => QueenMoveDirection::North,
            (0, -1) => QueenMoveDirection::South,
            (1, 0) => QueenMoveDirection::East,
            (-1, 0) => QueenMoveDirection::West,
            (1, 1) => QueenMoveDirection::NorthEast,
            (1, -1) => QueenMoveDirection::SouthEast,
            (-1, 1) => QueenMoveDirection::NorthWest,
            _ => QueenMoveDirection::SouthWest,
        };
        if dx != 0 && dy != 0 && dx.unsigned_abs() != dy.unsigned_abs() {
            return None;
        }
        let distance = if dx.unsigned_abs() > dy.unsigned_abs() {
            dx.unsigned_abs()
        } else {
            dy.unsigned_abs()
        };
        Some((direction, distance))
    }
}

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KnightMoveDirection {
    TwoUpOneRight=0, TwoUpOneLeft=1,
    TwoRightOneUp=2, TwoRightOneDown=3,
    TwoDownOneRight=4, TwoDownOneLeft=5,
    TwoLeftOneUp=6, TwoLeftOneDown=7,
}

const ALL_KNIGHT_MOVE_DIRECTIONS: [KnightMoveDirection; 8] = [
    KnightMoveDirection::TwoUpOneRight, KnightMoveDirection::TwoUpOneLeft,
    KnightMoveDirection::TwoRightOneUp, KnightMoveDirection::TwoRightOneDown,
    KnightMoveDirection::TwoDownOneRight, KnightMoveDirection::TwoDownOneLeft,
    KnightMoveDirection::TwoLeftOneUp, KnightMoveDirection::TwoLeftOneDown
];

/// Precomputed inverse table from a (dx + 2, dy + 2) displacement to the
/// knight direction with that displacement.
#[dynamic]
static KNIGHT_DELTA_DIRECTIONS: [[Option<KnightMoveDirection>; 5]; 5] = {
    let mut table = [[None; 5]; 5];
    for direction in KnightMoveDirection::iter() {
        let (dx, dy) = direction.to_delta();
        table[(dx + 2) as usize][(dy + 2) as usize] = Some(direction);
    }
    table
};

impl KnightMoveDirection {
    pub const fn from(value: u8) -> KnightMoveDirection {
        assert!(value < 8, "Knight move direction value out of bounds");
        unsafe { std::mem::transmute::<u8, KnightMoveDirection>(value) }
    }

    pub fn iter() -> impl Iterator<Item = KnightMoveDirection> {
        ALL_KNIGHT_MOVE_DIRECTIONS.iter().copied()
    }

    /// Displacement (dx, dy) of this knight jump.
    pub const fn to_delta(&self) -> (i8, i8) {
        match self {
            KnightMoveDirection::TwoUpOneRight => (1, 2),
            KnightMoveDirection::TwoUpOneLeft => (-1, 2),
            KnightMoveDirection::TwoRightOneUp => (2, 1),
            KnightMoveDirection::TwoRightOneDown => (2, -1),
            KnightMoveDirection::TwoDownOneRight => (1, -2),
            KnightMoveDirection::TwoDownOneLeft => (-1, -2),
            KnightMoveDirection::TwoLeftOneUp => (-2, 1),
            KnightMoveDirection::TwoLeftOneDown => (-2, -1)
        }
    }

    /// Classifies a displacement as a knight jump, or None if it is not one
    /// of the 8 knight shapes.
    pub fn calc(dx: i8, dy: i8) -> Option<KnightMoveDirection> {
        if dx < -2 || dx > 2 || dy < -2 || dy > 2 {
            return None;
        }
        KNIGHT_DELTA_DIRECTIONS[(dx + 2) as usize][(dy + 2) as usize]
    }
}

/// The three forward pawn steps an underpromotion can ride on, ordered as
/// they appear within an underpromotion plane block.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PawnAdvanceDirection {
    DiagonalLeft=0,
    Straight=1,
    DiagonalRight=2,
}

const ALL_PAWN_ADVANCE_DIRECTIONS: [PawnAdvanceDirection; 3] = [
    PawnAdvanceDirection::DiagonalLeft,
    PawnAdvanceDirection::Straight,
    PawnAdvanceDirection::DiagonalRight
];

impl PawnAdvanceDirection {
    pub const fn from(value: u8) -> PawnAdvanceDirection {
        assert!(value < 3, "Pawn advance direction value out of bounds");
        unsafe { std::mem::transmute::<u8, PawnAdvanceDirection>(value) }
    }

    pub fn iter() -> impl Iterator<Item = PawnAdvanceDirection> {
        ALL_PAWN_ADVANCE_DIRECTIONS.iter().copied()
    }

    pub const fn to_file_delta(&self) -> i8 {
        match self {
            PawnAdvanceDirection::DiagonalLeft => -1,
            PawnAdvanceDirection::Straight => 0,
            PawnAdvanceDirection::DiagonalRight => 1
        }
    }

    /// Classifies a displacement as a single forward pawn step of either
    /// color. The rank delta must be exactly one in either direction.
    pub const fn calc(dx: i8, dy: i8) -> Option<PawnAdvanceDirection> {
        if dy != 1 && dy != -1 {
            return None;
        }
        match dx {
            -1 => Some(PawnAdvanceDirection::DiagonalLeft),
            0 => Some(PawnAdvanceDirection::Straight),
            1 => Some(PawnAdvanceDirection::DiagonalRight),
            _ => None
        }
    }
}
