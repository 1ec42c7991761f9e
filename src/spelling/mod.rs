//! Spelling resolution for modes built from half-tone templates
//!
//! Two builders walk an `IntervalTemplate` around the chromatic lattice:
//! - `CommonSpeller` prefers a letter different from the previous
//!   spelling's letter at each altered position
//! - `DiatonicSpeller` advances exactly one letter per degree and derives
//!   the accidentals from the signed chromatic distance
//!
//! Both are plain iterators: nothing runs ahead of the consumer, and
//! dropping one mid-sequence is all the cancellation there is.

pub mod common;
pub mod diatonic;
pub mod lattice;
pub mod letter_ring;
pub mod mode_chain;

pub use common::CommonSpeller;
pub use diatonic::DiatonicSpeller;
pub use lattice::{ChromaticLattice, ChromaticNode, NodeId, NoteRelation};
pub use letter_ring::{LetterCursor, LetterRing};
pub use mode_chain::{assemble_mode, AssembledMode, ModeRequest, SpellingStrategy};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::interval_template::IntervalTemplate;
use crate::models::pitch::{Letter, Pitch};

/// Errors raised while spelling a mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellingError {
    /// The first pitch is not a spelling the chromatic lattice knows
    #[error("Pitch '{0}' cannot be located in the chromatic lattice")]
    PitchNotInLattice(String),

    /// The signed distance between a target position and its letter does
    /// not fit in 8 bits
    #[error("Signed distance {distance} from letter {letter} does not fit in 8 bits")]
    DistanceOverflow { letter: Letter, distance: i32 },

    /// The spelled mode has more degrees than a degree number can count
    #[error("Mode has {count} degrees; at most {max} can be numbered", max = u8::MAX)]
    TooManyDegrees { count: usize },
}

/// One emitted degree: the spelled pitch and its cumulative half-tones
/// from the prime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledPitch {
    pub pitch: Pitch,
    pub from_prime: u32,
}

/// Spell a mode with the common (letter-continuity) builder
///
/// # Examples
/// - [2,2,1,2,2,2,1] from C → D E F G A B
/// - [6,6] from C → F#
pub fn build_common_mode(
    template: &IntervalTemplate,
    first_pitch: &Pitch,
) -> Result<Vec<SpelledPitch>, SpellingError> {
    Ok(CommonSpeller::new(template, first_pitch)?.collect())
}

/// Spell a mode with one letter per degree
///
/// Output produced before an error is discarded.
pub fn build_diatonic_mode(
    template: &IntervalTemplate,
    first_pitch: &Pitch,
) -> Result<Vec<SpelledPitch>, SpellingError> {
    DiatonicSpeller::new(template, first_pitch)?.collect()
}

/// `build_common_mode` for callers that know the first pitch is valid
///
/// # Panics
/// If the first pitch cannot be located in the chromatic lattice.
pub fn must_build_common_mode(template: &IntervalTemplate, first_pitch: &Pitch) -> Vec<SpelledPitch> {
    build_common_mode(template, first_pitch)
        .unwrap_or_else(|e| panic!("Failed to spell common mode: {}", e))
}

/// `build_diatonic_mode` for callers that know the first pitch is valid
///
/// # Panics
/// On any spelling error.
pub fn must_build_diatonic_mode(
    template: &IntervalTemplate,
    first_pitch: &Pitch,
) -> Vec<SpelledPitch> {
    build_diatonic_mode(template, first_pitch)
        .unwrap_or_else(|e| panic!("Failed to spell diatonic mode: {}", e))
}

/// Locate the first pitch and the natural it alters
fn locate_prime(first_pitch: &Pitch) -> Result<(NodeId, NoteRelation), SpellingError> {
    ChromaticLattice::shared()
        .find_node(first_pitch)
        .and_then(|node| Some((node.id(), node.relation_for(first_pitch)?)))
        .ok_or_else(|| {
            log::warn!("First pitch {} is not a lattice spelling", first_pitch);
            SpellingError::PitchNotInLattice(first_pitch.name())
        })
}
