/// Enum representing the kinds of moves the codec distinguishes.
/// Used in the Move struct.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveFlag {
    NormalMove = 0,
    Promotion = 1
}

impl MoveFlag {
    /// Converts a u8 value to a MoveFlag.
    pub const unsafe fn from(value: u8) -> MoveFlag {
        assert!(value < 2, "Invalid MoveFlag value");
        std::mem::transmute::<u8, MoveFlag>(value)
    }

    /// Returns a readable representation of the move flag.
    pub const fn to_readable(&self) -> &str {
        match self {
            MoveFlag::NormalMove => "",
            MoveFlag::Promotion => "=?"
        }
    }
}

impl From<u8> for MoveFlag {
    fn from(value: u8) -> MoveFlag {
        unsafe { MoveFlag::from(value) }
    }
}
