use std::fmt::Display;

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Square {
    A8=0, B8=1, C8=2, D8=3, E8=4, F8=5, G8=6, H8=7,
    A7=8, B7=9, C7=10, D7=11, E7=12, F7=13, G7=14, H7=15,
    A6=16, B6=17, C6=18, D6=19, E6=20, F6=21, G6=22, H6=23,
    A5=24, B5=25, C5=26, D5=27, E5=28, F5=29, G5=30, H5=31,
    A4=32, B4=33, C4=34, D4=35, E4=36, F4=37, G4=38, H4=39,
    A3=40, B3=41, C3=42, D3=43, E3=44, F3=45, G3=46, H3=47,
    A2=48, B2=49, C2=50, D2=51, E2=52, F2=53, G2=54, H2=55,
    A1=56, B1=57, C1=58, D1=59, E1=60, F1=61, G1=62, H1=63
}

impl Square {
    pub const unsafe fn from(square_number: u8) -> Square {
        assert!(square_number < 64, "Square number out of bounds");
        std::mem::transmute::<u8, Square>(square_number)
    }

    /// Constructs a square from a zero-based file (0 is the a-file) and
    /// zero-based rank (0 is the first rank).
    pub const fn from_file_rank(file: u8, rank: u8) -> Square {
        assert!(file < 8 && rank < 8, "File or rank out of bounds");
        unsafe { Square::from((7 - rank) * 8 + file) }
    }

    /// Parses a two-character algebraic coordinate such as "e2".
    pub fn from_algebraic(coord: &str) -> Option<Square> {
        let bytes = coord.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file_char, rank_char) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_char) || !(b'1'..=b'8').contains(&rank_char) {
            return None;
        }
        Some(Square::from_file_rank(file_char - b'a', rank_char - b'1'))
    }

    pub const fn get_file(&self) -> u8 {
        *self as u8 % 8
    }

    pub const fn get_rank(&self) -> u8 {
        7 - *self as u8 / 8
    }

    pub const fn get_file_char(&self) -> char {
        (b'a' + self.get_file()) as char
    }

    pub const fn get_rank_char(&self) -> char {
        (b'1' + self.get_rank()) as char
    }

    /// Returns the square displaced by `dx` files and `dy` ranks, or None if
    /// the result falls off the board.
    pub const fn offset_by(&self, dx: i8, dy: i8) -> Option<Square> {
        let file = self.get_file() as i8 + dx;
        let rank = self.get_rank() as i8 + dy;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square::from_file_rank(file as u8, rank as u8))
        }
    }

    pub fn iter_all() -> impl Iterator<Item = Square> {
        (0..64).map(|n| unsafe { Square::from(n) })
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.get_file_char(), self.get_rank_char())
    }
}
