//! Models module for mode spelling
//!
//! Value types shared by the spelling engine: pitches, interval
//! templates, degrees and their modal characteristics.

pub mod degree;
pub mod interval_template;
pub mod modal;
pub mod pitch;

// Re-export commonly used types
pub use degree::{Degree, DegreeChain, DegreeId, Direction, RoundIter};
pub use interval_template::{IntervalStep, IntervalSteps, IntervalTemplate, NamedMode};
pub use modal::{
    classify_degree, ModalCharacteristic, ModalError, ModalPosition, ModalPositionName,
    ModalQuality,
};
pub use pitch::{AccidentalStyle, Letter, Pitch, PitchError};
