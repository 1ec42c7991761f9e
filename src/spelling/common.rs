//! Common mode builder
//!
//! Walks the template around the chromatic lattice. Natural positions are
//! spelled as their natural; altered positions take the first spelling
//! whose letter differs from the letter resolved one step earlier.

use crate::models::interval_template::{IntervalSteps, IntervalTemplate};
use crate::models::pitch::Pitch;

use super::lattice::{ChromaticLattice, ChromaticNode, NodeId, NoteRelation};
use super::{locate_prime, SpelledPitch, SpellingError};

/// Lazy speller for the common builder; see the module docs
#[derive(Debug, Clone)]
pub struct CommonSpeller<'t> {
    lattice: &'static ChromaticLattice,
    steps: IntervalSteps<'t>,
    prime: NodeId,
    current: NodeId,
    /// Natural letter of the spelling resolved one step earlier
    previous_base: Pitch,
}

impl<'t> CommonSpeller<'t> {
    pub fn new(template: &'t IntervalTemplate, first_pitch: &Pitch) -> Result<Self, SpellingError> {
        let (prime, relation) = locate_prime(first_pitch)?;
        log::debug!(
            "Spelling common mode from {} over {:?}",
            first_pitch,
            template.steps()
        );

        Ok(Self {
            lattice: ChromaticLattice::shared(),
            steps: template.iter(),
            prime,
            current: prime,
            previous_base: relation.base,
        })
    }
}

/// Pick the spelling for `node` given the letter used one step earlier
///
/// Ties go to the first matching entry in the node's spelling list.
pub fn resolve_spelling(node: &ChromaticNode, previous_base: &Pitch) -> Option<NoteRelation> {
    if let Some(natural) = node.natural_pitch() {
        return Some(NoteRelation {
            base: natural.clone(),
            spelled: natural.clone(),
        });
    }
    node.spellings()
        .iter()
        .find(|relation| !relation.base.eq_by_name(previous_base))
        .or_else(|| node.spellings().first())
        .cloned()
}

impl Iterator for CommonSpeller<'_> {
    type Item = SpelledPitch;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.next()?;
        self.current = self.current.advance(step.half_tones as u32);

        // The closing step back onto the prime is implied, not emitted
        if self.steps.len() == 0 && self.current == self.prime {
            log::trace!("Suppressed closing step at {} half-tones", step.from_prime);
            return None;
        }

        let node = self.lattice.node(self.current);
        let relation = resolve_spelling(node, &self.previous_base)?;
        log::trace!(
            "Step +{} -> {} ({} from prime)",
            step.half_tones,
            relation.spelled,
            step.from_prime
        );

        self.previous_base = relation.base;
        Some(SpelledPitch {
            pitch: relation.spelled,
            from_prime: step.from_prime,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.steps.len()))
    }
}
