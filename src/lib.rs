//! Enharmonic spelling of modes
//!
//! Given a half-tone template and a first pitch, produce the spelled
//! pitches of the mode, either preferring letter continuity
//! (`build_common_mode`) or forcing one letter per degree
//! (`build_diatonic_mode`). Spelled degrees can be linked into a
//! `DegreeChain` and classified against the major scale reference with
//! `classify_degree`.
//!
//! # Example
//!
//! ```
//! use mode_speller::{build_diatonic_mode, NamedMode, Pitch};
//!
//! let first = Pitch::by_name("F#").unwrap();
//! let names: Vec<String> = build_diatonic_mode(&NamedMode::Ionian.template(), &first)
//!     .unwrap()
//!     .into_iter()
//!     .map(|s| s.pitch.name())
//!     .collect();
//! assert_eq!(names, ["G#", "A#", "B", "C#", "D#", "E#", "F#"]);
//! ```

pub mod errors;
pub mod models;
pub mod spelling;

// Re-export commonly used types
pub use errors::{Error, Result};
pub use models::*;
pub use spelling::{
    assemble_mode, build_common_mode, build_diatonic_mode, must_build_common_mode,
    must_build_diatonic_mode, AssembledMode, ChromaticLattice, CommonSpeller, DiatonicSpeller,
    ModeRequest, SpelledPitch, SpellingError, SpellingStrategy,
};
