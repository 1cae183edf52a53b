use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


// The two court sides of a round. Players are addressed by side; names are
// just labels attached to them.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    // Side letters used in point-sequence notation, e.g. "a b b b b".
    pub fn from_char(notation: char) -> Option<Self> {
        match notation {
            'a' | 'A' => Some(Side::A),
            'b' | 'B' => Some(Side::B),
            _ => None,
        }
    }
}
