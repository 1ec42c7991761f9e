//! Assemble a spelled mode into a cyclic degree chain

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::models::degree::{Degree, DegreeChain, DegreeId, Direction};
use crate::models::interval_template::{IntervalTemplate, NamedMode};
use crate::models::modal::ModalError;
use crate::models::pitch::Pitch;

use super::{build_common_mode, build_diatonic_mode, SpelledPitch, SpellingError};

/// Which builder spells the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpellingStrategy {
    /// Letter-continuity builder
    Common,
    /// One letter per degree
    Diatonic,
    /// Diatonic for seven-step templates, common otherwise
    #[default]
    Auto,
}

impl SpellingStrategy {
    /// Resolve `Auto` against a template
    pub fn resolve(self, template: &IntervalTemplate) -> SpellingStrategy {
        match self {
            SpellingStrategy::Auto if template.len() == 7 => SpellingStrategy::Diatonic,
            SpellingStrategy::Auto => SpellingStrategy::Common,
            other => other,
        }
    }
}

/// Everything needed to spell one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRequest {
    pub template: IntervalTemplate,
    pub first_pitch: Pitch,
    #[serde(default)]
    pub strategy: SpellingStrategy,
}

impl ModeRequest {
    pub fn new(template: IntervalTemplate, first_pitch: Pitch) -> Self {
        Self {
            template,
            first_pitch,
            strategy: SpellingStrategy::default(),
        }
    }

    /// Build a request from a mode name and a pitch name, e.g.
    /// `("dorian", "D")`
    pub fn named(mode: &str, first_pitch: &str) -> Result<Self> {
        let mode: NamedMode = mode.parse().map_err(Error::UnknownMode)?;
        let first_pitch = Pitch::by_name(first_pitch)?;
        Ok(Self::new(mode.template(), first_pitch))
    }

    pub fn with_strategy(mut self, strategy: SpellingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Spelled pitches after the prime, in template order
    pub fn spell(&self) -> std::result::Result<Vec<SpelledPitch>, SpellingError> {
        match self.strategy.resolve(&self.template) {
            SpellingStrategy::Diatonic => build_diatonic_mode(&self.template, &self.first_pitch),
            _ => build_common_mode(&self.template, &self.first_pitch),
        }
    }
}

/// A spelled mode as a cyclic chain starting at the prime
#[derive(Debug, Clone)]
pub struct AssembledMode {
    pub chain: DegreeChain,
    pub first: DegreeId,
}

impl AssembledMode {
    /// Pitches in degree order, prime first
    pub fn pitches(&self) -> Vec<Pitch> {
        self.chain
            .degrees(self.first)
            .into_iter()
            .filter_map(|degree| degree.pitch.clone())
            .collect()
    }

    pub fn degree_count(&self) -> usize {
        self.chain.iter_round(self.first, Direction::Forward).count()
    }

    /// Classify every degree against the major scale reference
    pub fn annotate(&mut self) -> std::result::Result<(), ModalError> {
        self.chain.annotate_modal_positions(self.first)
    }

    /// Cyclic copy of the chain ordered by modal position weight
    pub fn sorted_by_modal_position(&mut self, ascending: bool) -> Option<DegreeId> {
        self.chain.sort_by_absolute_modal_position(self.first, ascending)
    }
}

/// Spell `request` and link degree 1 (the prime) and one degree per
/// emitted pitch into a cyclic chain
///
/// Fails with `TooManyDegrees` rather than truncating when the mode has
/// more than 255 degrees.
pub fn assemble_mode(request: &ModeRequest) -> std::result::Result<AssembledMode, SpellingError> {
    let spelled = request.spell()?;
    let count = spelled.len() + 1;
    if u8::try_from(count).is_err() {
        log::warn!("Cannot number {} degrees", count);
        return Err(SpellingError::TooManyDegrees { count });
    }

    let mut chain = DegreeChain::new();
    let prime = chain.push(Degree::new(1, 0).with_pitch(request.first_pitch.clone()));
    let mut ids = Vec::with_capacity(spelled.len() + 1);
    ids.push(prime);

    for (number, step) in (2..=u8::MAX).zip(spelled) {
        ids.push(chain.push(Degree::new(number, step.from_prime).with_pitch(step.pitch)));
    }

    chain.link_cyclic(&ids);
    Ok(AssembledMode {
        chain,
        first: prime,
    })
}
