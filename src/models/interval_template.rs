//! Half-tone templates describing a mode's interval shape
//!
//! A template is the ordered list of half-tone steps between consecutive
//! degrees. Iterating it yields each step together with its cumulative
//! distance from the prime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One application of a template step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalStep {
    /// Half-tones from the previous degree
    pub half_tones: u8,
    /// Cumulative half-tones from the prime
    pub from_prime: u32,
}

/// Ordered half-tone steps of a mode
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntervalTemplate {
    steps: Vec<u8>,
}

impl IntervalTemplate {
    pub fn new(steps: impl Into<Vec<u8>>) -> Self {
        Self {
            steps: steps.into(),
        }
    }

    pub fn steps(&self) -> &[u8] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total half-tones covered by the template
    pub fn span(&self) -> u32 {
        self.steps.iter().map(|&s| s as u32).sum()
    }

    /// Lazy sequence of steps; every call starts from the first step
    pub fn iter(&self) -> IntervalSteps<'_> {
        IntervalSteps {
            steps: self.steps.iter(),
            from_prime: 0,
        }
    }
}

impl<'a> IntoIterator for &'a IntervalTemplate {
    type Item = IntervalStep;
    type IntoIter = IntervalSteps<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<u8>> for IntervalTemplate {
    fn from(steps: Vec<u8>) -> Self {
        Self::new(steps)
    }
}

/// Iterator over the steps of an `IntervalTemplate`
#[derive(Debug, Clone)]
pub struct IntervalSteps<'a> {
    steps: std::slice::Iter<'a, u8>,
    from_prime: u32,
}

impl Iterator for IntervalSteps<'_> {
    type Item = IntervalStep;

    fn next(&mut self) -> Option<Self::Item> {
        let &half_tones = self.steps.next()?;
        self.from_prime += half_tones as u32;
        Some(IntervalStep {
            half_tones,
            from_prime: self.from_prime,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for IntervalSteps<'_> {}

/// Well-known modes and scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedMode {
    /// Major: W W H W W W H
    Ionian,
    Dorian,
    /// Half-step from 1 to 2
    Phrygian,
    /// Raised 4th
    Lydian,
    /// Major with lowered 7th
    Mixolydian,
    /// Natural minor
    Aeolian,
    Locrian,
    HarmonicMinor,
    /// Ascending form
    MelodicMinor,
    MajorPentatonic,
    WholeTone,
    Chromatic,
}

impl NamedMode {
    pub const ALL: [NamedMode; 12] = [
        NamedMode::Ionian,
        NamedMode::Dorian,
        NamedMode::Phrygian,
        NamedMode::Lydian,
        NamedMode::Mixolydian,
        NamedMode::Aeolian,
        NamedMode::Locrian,
        NamedMode::HarmonicMinor,
        NamedMode::MelodicMinor,
        NamedMode::MajorPentatonic,
        NamedMode::WholeTone,
        NamedMode::Chromatic,
    ];

    /// Half-tone steps, closing on the octave
    pub fn steps(self) -> &'static [u8] {
        match self {
            NamedMode::Ionian => &[2, 2, 1, 2, 2, 2, 1],
            NamedMode::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            NamedMode::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            NamedMode::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            NamedMode::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            NamedMode::Aeolian => &[2, 1, 2, 2, 1, 2, 2],
            NamedMode::Locrian => &[1, 2, 2, 1, 2, 2, 2],
            NamedMode::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
            NamedMode::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
            NamedMode::MajorPentatonic => &[2, 2, 3, 2, 3],
            NamedMode::WholeTone => &[2, 2, 2, 2, 2, 2],
            NamedMode::Chromatic => &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        }
    }

    pub fn template(self) -> IntervalTemplate {
        IntervalTemplate::new(self.steps())
    }

    /// Number of distinct degrees (the octave is not counted)
    pub fn degree_count(self) -> usize {
        self.steps().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedMode::Ionian => "ionian",
            NamedMode::Dorian => "dorian",
            NamedMode::Phrygian => "phrygian",
            NamedMode::Lydian => "lydian",
            NamedMode::Mixolydian => "mixolydian",
            NamedMode::Aeolian => "aeolian",
            NamedMode::Locrian => "locrian",
            NamedMode::HarmonicMinor => "harmonic-minor",
            NamedMode::MelodicMinor => "melodic-minor",
            NamedMode::MajorPentatonic => "major-pentatonic",
            NamedMode::WholeTone => "whole-tone",
            NamedMode::Chromatic => "chromatic",
        }
    }
}

impl fmt::Display for NamedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NamedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '_'], "-");
        match wanted.as_str() {
            "major" => return Ok(NamedMode::Ionian),
            "minor" | "natural-minor" => return Ok(NamedMode::Aeolian),
            _ => {}
        }
        NamedMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| format!("Unknown mode: '{}'", s))
    }
}
