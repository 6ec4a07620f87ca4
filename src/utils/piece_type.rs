use subenum::subenum;

#[subenum(UnderpromotionPieceType)]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceType {
    NoPieceType=0,
    Pawn=1,
    #[subenum(UnderpromotionPieceType)]
    Knight=2,
    #[subenum(UnderpromotionPieceType)]
    Bishop=3,
    #[subenum(UnderpromotionPieceType)]
    Rook=4,
    Queen=5,
    King=6
}

const ALL_PROMOTION_PIECES: [PieceType; 4] = [
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen
];

impl PieceType {
    pub const LIMIT: u8 = 7;

    pub const unsafe fn from(piece_type_number: u8) -> PieceType {
        assert!(piece_type_number < PieceType::LIMIT, "Piece type number out of bounds");
        std::mem::transmute::<u8, PieceType>(piece_type_number)
    }

    /// Returns the lowercase letter used for this piece in algebraic move
    /// strings.
    pub const fn to_char(&self) -> char {
        match self {
            PieceType::NoPieceType => '.',
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k'
        }
    }

    pub const fn from_char(c: char) -> Option<PieceType> {
        match c {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None
        }
    }

    pub fn iter_promotion_pieces() -> impl Iterator<Item = &'static PieceType> {
        ALL_PROMOTION_PIECES.iter()
    }
}

const ALL_UNDERPROMOTION_PIECES: [UnderpromotionPieceType; 3] = [
    UnderpromotionPieceType::Knight,
    UnderpromotionPieceType::Bishop,
    UnderpromotionPieceType::Rook
];

impl UnderpromotionPieceType {
    /// Zero-based position of this piece within an underpromotion plane
    /// block (knight, bishop, rook).
    pub const fn get_index(&self) -> u8 {
        match self {
            UnderpromotionPieceType::Knight => 0,
            UnderpromotionPieceType::Bishop => 1,
            UnderpromotionPieceType::Rook => 2
        }
    }

    pub const fn from_index(index: u8) -> UnderpromotionPieceType {
        assert!(index < 3, "Underpromotion index out of bounds");
        match index {
            0 => UnderpromotionPieceType::Knight,
            1 => UnderpromotionPieceType::Bishop,
            _ => UnderpromotionPieceType::Rook
        }
    }

    pub const fn to_piece_type(&self) -> PieceType {
        match self {
            UnderpromotionPieceType::Knight => PieceType::Knight,
            UnderpromotionPieceType::Bishop => PieceType::Bishop,
            UnderpromotionPieceType::Rook => PieceType::Rook
        }
    }

    pub fn iter() -> impl Iterator<Item = UnderpromotionPieceType> {
        ALL_UNDERPROMOTION_PIECES.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type() {
        assert_eq!(PieceType::NoPieceType as u8, 0);
        assert_eq!(PieceType::Pawn as u8, 1);
        assert_eq!(PieceType::LIMIT, 7);
        unsafe {
            assert_eq!(PieceType::from(0), PieceType::NoPieceType);
            assert_eq!(PieceType::from(2), PieceType::Knight);
            assert_eq!(PieceType::from(6), PieceType::King);
        }
    }

    #[test]
    fn test_char_roundtrip() {
        for piece_type in [PieceType::Pawn, PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen, PieceType::King] {
            assert_eq!(PieceType::from_char(piece_type.to_char()), Some(piece_type));
        }
        assert_eq!(PieceType::from_char('x'), None);
    }

    #[test]
    fn test_underpromotion_index_roundtrip() {
        for piece in UnderpromotionPieceType::iter() {
            assert_eq!(UnderpromotionPieceType::from_index(piece.get_index()), piece);
        }
    }
}
