//! Modal characteristics: interval quality of a degree against the major
//! scale reference, and the ordering weight derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while classifying a degree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("Unknown degree position: {0} (expected 1-8)")]
    UnknownDegreePosition(u8),

    #[error("Unknown quality for degree {degree_number}: {diff:+} half-tones from the reference")]
    UnknownDegreeQuality { degree_number: u8, diff: i8 },

    #[error("Distance of {half_tones} half-tones from the prime does not fit a signed difference for degree {degree_number}")]
    DistanceOverflow { degree_number: u8, half_tones: u32 },
}

/// Interval quality of a degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModalQuality {
    TripleDiminished,
    DoubleDiminished,
    Diminished,
    Minor,
    Clean,
    Major,
    Augmented,
    DoubleAugmented,
    TripleAugmented,
}

impl ModalQuality {
    /// Ordering weight, strictly increasing from -4 to +4
    pub fn weight(self) -> i8 {
        match self {
            ModalQuality::TripleDiminished => -4,
            ModalQuality::DoubleDiminished => -3,
            ModalQuality::Diminished => -2,
            ModalQuality::Minor => -1,
            ModalQuality::Clean => 0,
            ModalQuality::Major => 1,
            ModalQuality::Augmented => 2,
            ModalQuality::DoubleAugmented => 3,
            ModalQuality::TripleAugmented => 4,
        }
    }

    pub fn position_name(self) -> ModalPositionName {
        match self {
            ModalQuality::TripleDiminished
            | ModalQuality::DoubleDiminished
            | ModalQuality::Diminished
            | ModalQuality::Minor => ModalPositionName::Low,
            ModalQuality::Clean | ModalQuality::Major => ModalPositionName::Neutral,
            ModalQuality::Augmented
            | ModalQuality::DoubleAugmented
            | ModalQuality::TripleAugmented => ModalPositionName::High,
        }
    }

    pub fn modal_position(self) -> ModalPosition {
        ModalPosition {
            name: self.position_name(),
            weight: self.weight(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalQuality::TripleDiminished => "3x diminished",
            ModalQuality::DoubleDiminished => "2x diminished",
            ModalQuality::Diminished => "diminished",
            ModalQuality::Minor => "minor",
            ModalQuality::Clean => "clean",
            ModalQuality::Major => "major",
            ModalQuality::Augmented => "augmented",
            ModalQuality::DoubleAugmented => "2x augmented",
            ModalQuality::TripleAugmented => "3x augmented",
        }
    }
}

impl fmt::Display for ModalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalPositionName {
    Low,
    Neutral,
    High,
}

/// Ordering value used to sort degrees; carries no acoustic meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModalPosition {
    pub name: ModalPositionName,
    pub weight: i8,
}

/// Quality of one degree relative to the major scale reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalCharacteristic {
    pub quality: ModalQuality,
    pub degree_number: u8,
    pub half_tones_from_prime: u32,
    pub relative_modal_position: ModalPosition,
}

/// Half-tones from the prime for a clean/major degree in the
/// octave-inclusive major scale
pub fn expected_half_tones(degree_number: u8) -> Result<u8, ModalError> {
    match degree_number {
        1 => Ok(0),
        2 => Ok(2),
        3 => Ok(4),
        4 => Ok(5),
        5 => Ok(7),
        6 => Ok(9),
        7 => Ok(11),
        8 => Ok(12),
        _ => Err(ModalError::UnknownDegreePosition(degree_number)),
    }
}

fn quality_for(degree_number: u8, diff: i8) -> Result<ModalQuality, ModalError> {
    use ModalQuality::*;

    let quality = match (degree_number, diff) {
        // Perfect-type degrees
        (1 | 4 | 5 | 8, -3) => Some(TripleDiminished),
        (1 | 4 | 5 | 8, -2) => Some(DoubleDiminished),
        (1 | 4 | 5 | 8, -1) => Some(Diminished),
        (1 | 4 | 5 | 8, 0) => Some(Clean),
        (1 | 4 | 5 | 8, 1) => Some(Augmented),
        (1 | 4 | 5 | 8, 2) => Some(DoubleAugmented),
        (1 | 4 | 5 | 8, 3) => Some(TripleAugmented),

        // Major-type degrees
        (2 | 3 | 6 | 7, -3) => Some(DoubleDiminished),
        (2 | 3 | 6 | 7, -2) => Some(Diminished),
        (2 | 3 | 6 | 7, -1) => Some(Minor),
        (2 | 3 | 6 | 7, 0) => Some(Major),
        (2 | 3 | 6 | 7, 1) => Some(Augmented),
        (2 | 3 | 6 | 7, 2) => Some(DoubleAugmented),

        _ => None,
    };

    quality.ok_or(ModalError::UnknownDegreeQuality { degree_number, diff })
}

/// Classify a degree by its distance from the prime
///
/// # Examples
/// - (1, 0) → clean
/// - (2, 1) → minor
/// - (4, 6) → augmented
/// - (7, 11) → major
pub fn classify_degree(
    degree_number: u8,
    half_tones_from_prime: u32,
) -> Result<ModalCharacteristic, ModalError> {
    let expected = expected_half_tones(degree_number)?;

    let diff = i64::from(half_tones_from_prime) - i64::from(expected);
    let diff = i8::try_from(diff).map_err(|_| ModalError::DistanceOverflow {
        degree_number,
        half_tones: half_tones_from_prime,
    })?;

    let quality = quality_for(degree_number, diff)?;

    Ok(ModalCharacteristic {
        quality,
        degree_number,
        half_tones_from_prime,
        relative_modal_position: quality.modal_position(),
    })
}
