//! The seven natural letters as a ring, walked one letter per degree

use crate::models::pitch::Letter;

/// Number of natural letters
pub const LETTER_COUNT: usize = 7;

/// Cyclic C..B ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRing {
    letters: [Letter; LETTER_COUNT],
}

impl LetterRing {
    pub const fn new() -> Self {
        Self {
            letters: Letter::ALL,
        }
    }

    fn letter_at(&self, index: usize) -> Letter {
        self.letters[index % LETTER_COUNT]
    }

    /// Cursor resting on `letter`
    pub fn cursor(&self, letter: Letter) -> LetterCursor {
        LetterCursor {
            ring: *self,
            index: letter.index(),
        }
    }
}

impl Default for LetterRing {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward-only position on a `LetterRing`
#[derive(Debug, Clone, Copy)]
pub struct LetterCursor {
    ring: LetterRing,
    index: usize,
}

impl LetterCursor {
    pub fn letter(&self) -> Letter {
        self.ring.letter_at(self.index)
    }

    /// Move exactly one letter forward and return the new letter
    pub fn advance(&mut self) -> Letter {
        self.index = (self.index + 1) % LETTER_COUNT;
        self.letter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_from_a() {
        let mut cursor = LetterRing::new().cursor(Letter::A);
        let walked: Vec<Letter> = (0..7).map(|_| cursor.advance()).collect();
        assert_eq!(
            walked,
            vec![
                Letter::B,
                Letter::C,
                Letter::D,
                Letter::E,
                Letter::F,
                Letter::G,
                Letter::A
            ]
        );
    }

    #[test]
    fn test_cursor_starts_on_its_letter() {
        let mut cursor = LetterRing::default().cursor(Letter::B);
        assert_eq!(cursor.letter(), Letter::B);
        assert_eq!(cursor.advance(), Letter::C);
        assert_eq!(cursor.letter(), Letter::C);
    }
}
