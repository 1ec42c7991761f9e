//! The 12-position chromatic lattice
//!
//! Every chromatic position knows whether it is a natural and which
//! spellings land on it, each paired with the natural letter it alters.
//! The lattice is built once per process and shared read-only.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::pitch::{Letter, Pitch};

/// Positions around the chromatic circle
pub const CHROMATIC_POSITIONS: usize = 12;

/// A spelled pitch and the natural it is an alteration of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRelation {
    pub base: Pitch,
    pub spelled: Pitch,
}

impl NoteRelation {
    fn altered(letter: Letter, accidental: i8) -> Self {
        Self {
            base: Pitch::natural(letter),
            spelled: Pitch::new(letter, accidental),
        }
    }
}

/// Index of a chromatic position, 0 = C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u8);

impl NodeId {
    /// Anchor node where lookups start
    pub const ANCHOR: NodeId = NodeId(0);

    pub fn new(position: u8) -> Self {
        NodeId(position % CHROMATIC_POSITIONS as u8)
    }

    pub fn position(self) -> u8 {
        self.0
    }

    pub fn next(self) -> NodeId {
        self.advance(1)
    }

    pub fn previous(self) -> NodeId {
        self.advance(CHROMATIC_POSITIONS as u32 - 1)
    }

    /// Move `half_tones` positions forward around the circle
    pub fn advance(self, half_tones: u32) -> NodeId {
        let steps = half_tones % CHROMATIC_POSITIONS as u32;
        NodeId::new(((self.0 as u32 + steps) % CHROMATIC_POSITIONS as u32) as u8)
    }

    /// Half-tones walked forward from `self` to reach `other` (0-11)
    pub fn distance_to(self, other: NodeId) -> u8 {
        (other.0 + CHROMATIC_POSITIONS as u8 - self.0) % CHROMATIC_POSITIONS as u8
    }
}

/// One chromatic position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromaticNode {
    id: NodeId,
    natural: Option<Pitch>,
    spellings: Vec<NoteRelation>,
}

impl ChromaticNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_natural(&self) -> bool {
        self.natural.is_some()
    }

    pub fn natural_pitch(&self) -> Option<&Pitch> {
        self.natural.as_ref()
    }

    /// Altered spellings landing here, in preference order
    pub fn spellings(&self) -> &[NoteRelation] {
        &self.spellings
    }

    /// The relation for `pitch` if it is spelled on this node
    ///
    /// A natural relates to itself.
    pub fn relation_for(&self, pitch: &Pitch) -> Option<NoteRelation> {
        if let Some(natural) = &self.natural {
            if natural.eq_by_name(pitch) {
                return Some(NoteRelation {
                    base: natural.clone(),
                    spelled: natural.clone(),
                });
            }
        }
        self.spellings
            .iter()
            .find(|relation| relation.spelled.eq_by_name(pitch))
            .cloned()
    }
}

/// The fixed cycle of 12 chromatic nodes
#[derive(Debug)]
pub struct ChromaticLattice {
    nodes: Vec<ChromaticNode>,
}

static LATTICE: Lazy<ChromaticLattice> = Lazy::new(ChromaticLattice::build);

impl ChromaticLattice {
    /// The process-wide lattice, built on first use
    pub fn shared() -> &'static ChromaticLattice {
        &LATTICE
    }

    fn build() -> ChromaticLattice {
        use Letter::*;

        let altered = |pairs: &[(Letter, i8)]| -> Vec<NoteRelation> {
            pairs
                .iter()
                .map(|&(letter, accidental)| NoteRelation::altered(letter, accidental))
                .collect()
        };

        // (natural, spellings) per position; black keys list the sharp of
        // the lower letter before the flat of the upper one
        let layout: [(Option<Letter>, Vec<NoteRelation>); CHROMATIC_POSITIONS] = [
            (Some(C), altered(&[(B, 1)])),
            (None, altered(&[(C, 1), (D, -1)])),
            (Some(D), Vec::new()),
            (None, altered(&[(D, 1), (E, -1)])),
            (Some(E), altered(&[(F, -1)])),
            (Some(F), altered(&[(E, 1)])),
            (None, altered(&[(F, 1), (G, -1)])),
            (Some(G), Vec::new()),
            (None, altered(&[(G, 1), (A, -1)])),
            (Some(A), Vec::new()),
            (None, altered(&[(A, 1), (B, -1)])),
            (Some(B), altered(&[(C, -1)])),
        ];

        let nodes = layout
            .into_iter()
            .enumerate()
            .map(|(position, (natural, spellings))| ChromaticNode {
                id: NodeId::new(position as u8),
                natural: natural.map(Pitch::natural),
                spellings,
            })
            .collect();

        log::debug!("Built chromatic lattice with {} nodes", CHROMATIC_POSITIONS);
        ChromaticLattice { nodes }
    }

    pub fn node(&self, id: NodeId) -> &ChromaticNode {
        &self.nodes[id.position() as usize]
    }

    /// Scan from the anchor for the node on which `pitch` is spelled
    ///
    /// Returns `None` for spellings the lattice does not know (double
    /// accidentals among them).
    pub fn find_node(&self, pitch: &Pitch) -> Option<&ChromaticNode> {
        let mut id = NodeId::ANCHOR;
        for _ in 0..CHROMATIC_POSITIONS {
            let node = self.node(id);
            if node.relation_for(pitch).is_some() {
                return Some(node);
            }
            id = id.next();
        }
        None
    }

    /// The node `half_tones` ahead of `node`
    pub fn node_at(&self, node: &ChromaticNode, half_tones: u32) -> &ChromaticNode {
        self.node(node.id().advance(half_tones))
    }

    /// Node of a natural letter
    pub fn natural_node(&self, letter: Letter) -> &ChromaticNode {
        self.node(NodeId::new(letter.position()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ChromaticNode> {
        self.nodes.iter()
    }
}
