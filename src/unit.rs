//! Units are the individual characters of a polymer. A letter unit has a type
//! (which letter it is, ignoring case) and a polarity (its case); anything
//! else is inert and never reacts.

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Lower,
    Upper,
}

use Polarity::*;

impl Polarity {
    fn of(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            Upper
        } else {
            Lower
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Lower => Upper,
            Upper => Lower,
        }
    }
}

/// The type of a letter unit, independent of its polarity. Always holds an
/// ASCII lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kind(char);

impl Kind {
    pub fn new(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Kind(letter.to_ascii_lowercase()))
    }

    /// All 26 unit types, in alphabetical order
    pub fn all() -> impl Iterator<Item = Kind> + Clone {
        ('a'..='z').map(Kind)
    }

    pub fn letter(self) -> char {
        self.0
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.0.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Letter { kind: Kind, polarity: Polarity },
    Inert(char),
}

impl Unit {
    pub fn kind(self) -> Option<Kind> {
        match self {
            Unit::Letter { kind, .. } => Some(kind),
            Unit::Inert(..) => None,
        }
    }

    /// Two units react when they are the same type with opposite polarity.
    /// Inert units never react.
    pub fn cancels(self, other: Unit) -> bool {
        match (self, other) {
            (
                Unit::Letter {
                    kind: kind1,
                    polarity: polarity1,
                },
                Unit::Letter {
                    kind: kind2,
                    polarity: polarity2,
                },
            ) => kind1 == kind2 && polarity1.opposite() == polarity2,
            _ => false,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Unit::Letter {
                kind,
                polarity: Lower,
            } => kind.letter(),
            Unit::Letter {
                kind,
                polarity: Upper,
            } => kind.letter().to_ascii_uppercase(),
            Unit::Inert(c) => c,
        }
    }
}

impl From<char> for Unit {
    fn from(c: char) -> Self {
        match Kind::new(c) {
            Some(kind) => Unit::Letter {
                kind,
                polarity: Polarity::of(c),
            },
            None => Unit::Inert(c),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
