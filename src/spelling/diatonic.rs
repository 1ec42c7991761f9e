//! Diatonic (heptatonic) mode builder
//!
//! Alongside the chromatic walk, a letter cursor advances exactly one
//! letter per degree. Each degree is spelled on that letter, raised or
//! lowered one accidental at a time until it sits on the target
//! chromatic position. Double (or wider) accidentals fall out of the
//! signed distance; no lookup table is involved.
//!
//! Unlike the common builder, nothing is suppressed: a single-step `[12]`
//! template from C still moves on to the next letter and yields `Dbb`.

use crate::models::interval_template::{IntervalSteps, IntervalTemplate};
use crate::models::pitch::{Letter, Pitch};

use super::lattice::{ChromaticLattice, NodeId, CHROMATIC_POSITIONS};
use super::letter_ring::{LetterCursor, LetterRing};
use super::{locate_prime, SpelledPitch, SpellingError};

/// Lazy speller for the diatonic builder; see the module docs
#[derive(Debug, Clone)]
pub struct DiatonicSpeller<'t> {
    lattice: &'static ChromaticLattice,
    steps: IntervalSteps<'t>,
    current: NodeId,
    letters: LetterCursor,
    /// Half-tones from the prime, stamped on every position for this run
    distance_from_prime: [u8; CHROMATIC_POSITIONS],
    done: bool,
}

impl<'t> DiatonicSpeller<'t> {
    pub fn new(template: &'t IntervalTemplate, first_pitch: &Pitch) -> Result<Self, SpellingError> {
        let (prime, relation) = locate_prime(first_pitch)?;
        log::debug!(
            "Spelling diatonic mode from {} over {:?}",
            first_pitch,
            template.steps()
        );

        let mut distance_from_prime = [0u8; CHROMATIC_POSITIONS];
        let mut id = prime;
        for distance in 0..CHROMATIC_POSITIONS as u8 {
            distance_from_prime[id.position() as usize] = distance;
            id = id.next();
        }

        Ok(Self {
            lattice: ChromaticLattice::shared(),
            steps: template.iter(),
            current: prime,
            letters: LetterRing::new().cursor(relation.base.letter()),
            distance_from_prime,
            done: false,
        })
    }

    fn distance(&self, id: NodeId) -> i32 {
        self.distance_from_prime[id.position() as usize] as i32
    }

    /// Accidentals needed on `letter` to reach the current position,
    /// normalized into -6..6 so that wrapping past the prime stays close
    fn accidentals_for(&self, letter: Letter) -> Result<i8, SpellingError> {
        let base = self.lattice.natural_node(letter).id();
        let raw = self.distance(self.current) - self.distance(base);
        let half = CHROMATIC_POSITIONS as i32 / 2;
        let distance = (raw + half).rem_euclid(CHROMATIC_POSITIONS as i32) - half;

        i8::try_from(distance).map_err(|_| {
            log::warn!("Distance {} from letter {} overflows", distance, letter);
            SpellingError::DistanceOverflow { letter, distance }
        })
    }
}

/// Raise or lower `base` one accidental at a time
pub fn alter_by(base: Pitch, accidentals: i8) -> Pitch {
    let mut pitch = base;
    for _ in 0..accidentals.unsigned_abs() {
        pitch = if accidentals > 0 {
            pitch.alter_up()
        } else {
            pitch.alter_down()
        };
    }
    pitch
}

impl Iterator for DiatonicSpeller<'_> {
    type Item = Result<SpelledPitch, SpellingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = self.steps.next()?;

        self.current = self.current.advance(step.half_tones as u32);
        let letter = self.letters.advance();

        let accidentals = match self.accidentals_for(letter) {
            Ok(accidentals) => accidentals,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let pitch = alter_by(Pitch::natural(letter), accidentals);
        log::trace!(
            "Step +{} -> {} ({} from prime)",
            step.half_tones,
            pitch,
            step.from_prime
        );

        Some(Ok(SpelledPitch {
            pitch,
            from_prime: step.from_prime,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.steps.len()))
        }
    }
}
