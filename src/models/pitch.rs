//! Pitch names and accidental arithmetic
//!
//! A `Pitch` is a natural letter plus a signed accidental count
//! (positive = sharps, negative = flats) and an optional octave.
//! Parsing accepts at most two identical accidental symbols; alteration
//! itself is unbounded so that exotic templates can still be spelled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while constructing pitches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    #[error("Invalid pitch name: '{0}'. Expected a letter A-G followed by up to two identical accidentals (#, b, ♯, ♭)")]
    InvalidPitchName(String),
}

/// The seven natural letters in pitch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters from C upwards
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Chromatic position of the natural (C=0 ... B=11)
    pub fn position(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Index of this letter in `Letter::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Letter {
        Letter::ALL[(self.index() + 1) % 7]
    }

    pub fn previous(self) -> Letter {
        Letter::ALL[(self.index() + 6) % 7]
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Case-insensitive
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// How accidentals are rendered in pitch names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccidentalStyle {
    /// `#` and `b`
    #[default]
    Ascii,
    /// `♯` and `♭`
    Unicode,
}

impl AccidentalStyle {
    fn sharp(self) -> char {
        match self {
            AccidentalStyle::Ascii => '#',
            AccidentalStyle::Unicode => '♯',
        }
    }

    fn flat(self) -> char {
        match self {
            AccidentalStyle::Ascii => 'b',
            AccidentalStyle::Unicode => '♭',
        }
    }
}

/// A spelled pitch: letter, accidental count and optional octave
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    letter: Letter,
    /// Positive = sharps, negative = flats
    accidental: i8,
    octave: Option<i8>,
}

impl Pitch {
    /// Create a pitch from its parts
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self {
            letter,
            accidental,
            octave: None,
        }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, 0)
    }

    /// Parse a pitch name such as `C`, `f#`, `Bb`, `E♭♭`
    ///
    /// The letter may be either case. At most two accidental symbols are
    /// accepted and they must all point the same way.
    pub fn by_name(name: &str) -> Result<Self, PitchError> {
        let invalid = || PitchError::InvalidPitchName(name.to_string());

        let mut chars = name.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;

        let mut accidental: i8 = 0;
        let mut count = 0;
        for c in chars {
            let step = match c {
                '#' | '♯' => 1,
                'b' | '♭' => -1,
                _ => return Err(invalid()),
            };
            if count > 0 && step != accidental.signum() {
                return Err(invalid());
            }
            accidental += step;
            count += 1;
            if count > 2 {
                return Err(invalid());
            }
        }

        Ok(Self::new(letter, accidental))
    }

    pub fn with_octave(mut self, octave: i8) -> Self {
        self.octave = Some(octave);
        self
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }

    pub fn octave(&self) -> Option<i8> {
        self.octave
    }

    pub fn is_natural(&self) -> bool {
        self.accidental == 0
    }

    /// Name with ASCII accidentals, e.g. `F#`, `Bbb`
    pub fn name(&self) -> String {
        self.name_styled(AccidentalStyle::Ascii)
    }

    pub fn name_styled(&self, style: AccidentalStyle) -> String {
        let symbol = if self.accidental > 0 {
            style.sharp()
        } else {
            style.flat()
        };
        let mut name = String::with_capacity(1 + self.accidental.unsigned_abs() as usize);
        name.push(self.letter.as_char());
        for _ in 0..self.accidental.unsigned_abs() {
            name.push(symbol);
        }
        name
    }

    /// Compare spelling only; the octave is ignored
    pub fn eq_by_name(&self, other: &Pitch) -> bool {
        self.letter == other.letter && self.accidental == other.accidental
    }

    /// Raise by one accidental (Bb -> B -> B#)
    pub fn alter_up(&self) -> Pitch {
        Pitch {
            accidental: self.accidental.saturating_add(1),
            ..self.clone()
        }
    }

    /// Lower by one accidental (B# -> B -> Bb)
    pub fn alter_down(&self) -> Pitch {
        Pitch {
            accidental: self.accidental.saturating_sub(1),
            ..self.clone()
        }
    }

    /// The unaltered letter this pitch is spelled on
    pub fn base_letter(&self) -> Pitch {
        Pitch {
            accidental: 0,
            ..self.clone()
        }
    }

    /// Chromatic pitch class (0-11), ignoring the octave
    pub fn pitch_class(&self) -> u8 {
        (self.letter.position() as i16 + self.accidental as i16).rem_euclid(12) as u8
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pitch {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::by_name(s)
    }
}
