//! Degrees of a constructed mode and the chain that links them
//!
//! Degrees live in a `DegreeChain` arena and are linked through
//! `previous`/`next` ids. A chain is either open (the ends have no
//! neighbour) or cyclic. Node identity is the `DegreeId`, so walking a
//! cycle stops when the start id comes round again, even when two
//! degrees carry equal values.
//!
//! Every operation is absent-safe: an id that does not belong to the
//! chain makes the call a no-op that returns `None`, `false` or an empty
//! iterator.

use serde::{Deserialize, Serialize};

use super::modal::{classify_degree, ModalCharacteristic, ModalError, ModalPosition};
use super::pitch::Pitch;

/// A position in a constructed mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// 1-based ordinal within the mode
    pub number: u8,
    pub half_tones_from_prime: u32,
    pub pitch: Option<Pitch>,
    pub modal_characteristics: Vec<ModalCharacteristic>,
    pub absolute_modal_position: Option<ModalPosition>,
}

impl Degree {
    pub fn new(number: u8, half_tones_from_prime: u32) -> Self {
        Self {
            number,
            half_tones_from_prime,
            pitch: None,
            modal_characteristics: Vec::new(),
            absolute_modal_position: None,
        }
    }

    pub fn with_pitch(mut self, pitch: Pitch) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub fn with_absolute_modal_position(mut self, position: ModalPosition) -> Self {
        self.absolute_modal_position = Some(position);
        self
    }

    /// Same degree number and, when both carry a pitch, the same pitch name
    pub fn is_equal(&self, other: &Degree) -> bool {
        if self.number != other.number {
            return false;
        }
        match (&self.pitch, &other.pitch) {
            (Some(a), Some(b)) => a.eq_by_name(b),
            _ => true,
        }
    }

    pub fn equal_by_degree_num(&self, other: &Degree) -> bool {
        self.number == other.number
    }
}

/// Handle to a degree inside a `DegreeChain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DegreeId(usize);

impl DegreeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Walking direction along a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
struct Slot {
    degree: Degree,
    previous: Option<DegreeId>,
    next: Option<DegreeId>,
}

/// Arena of degrees with doubly-linked, possibly cyclic, links
#[derive(Debug, Clone, Default)]
pub struct DegreeChain {
    slots: Vec<Slot>,
}

impl DegreeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of degrees stored, linked or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add an unlinked degree
    pub fn push(&mut self, degree: Degree) -> DegreeId {
        self.slots.push(Slot {
            degree,
            previous: None,
            next: None,
        });
        DegreeId(self.slots.len() - 1)
    }

    pub fn get(&self, id: DegreeId) -> Option<&Degree> {
        self.slots.get(id.0).map(|slot| &slot.degree)
    }

    pub fn get_mut(&mut self, id: DegreeId) -> Option<&mut Degree> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.degree)
    }

    pub fn contains(&self, id: DegreeId) -> bool {
        id.0 < self.slots.len()
    }

    pub fn next(&self, id: DegreeId) -> Option<DegreeId> {
        self.slots.get(id.0)?.next
    }

    pub fn previous(&self, id: DegreeId) -> Option<DegreeId> {
        self.slots.get(id.0)?.previous
    }

    /// Neighbour in the given direction
    pub fn step(&self, id: DegreeId, direction: Direction) -> Option<DegreeId> {
        match direction {
            Direction::Forward => self.next(id),
            Direction::Backward => self.previous(id),
        }
    }

    fn set_next(&mut self, id: DegreeId, next: Option<DegreeId>) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.next = next;
        }
    }

    fn set_previous(&mut self, id: DegreeId, previous: Option<DegreeId>) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.previous = previous;
        }
    }

    /// `node.next = next` and `next.previous = node`
    ///
    /// Any former neighbours are left as they were.
    pub fn attach_next(&mut self, node: DegreeId, next: DegreeId) -> bool {
        if !self.contains(node) || !self.contains(next) {
            return false;
        }
        self.set_next(node, Some(next));
        self.set_previous(next, Some(node));
        true
    }

    /// `node.previous = previous` and `previous.next = node`
    pub fn attach_previous(&mut self, node: DegreeId, previous: DegreeId) -> bool {
        self.attach_next(previous, node)
    }

    /// Unlink `id` from its neighbours and join them to each other
    ///
    /// A neighbour that no longer points back at `id` is left alone.
    fn detach(&mut self, id: DegreeId) {
        let previous = self.previous(id);
        let next = self.next(id);
        if let Some(previous) = previous.filter(|&p| self.next(p) == Some(id)) {
            self.set_next(previous, next);
        }
        if let Some(next) = next.filter(|&n| self.previous(n) == Some(id)) {
            self.set_previous(next, previous);
        }
        self.set_previous(id, None);
        self.set_next(id, None);
    }

    /// Splice `inserted` directly after `node`, keeping the displaced
    /// successor linked behind it
    ///
    /// `inserted` is first taken out of wherever it was linked. Inserting
    /// a node after itself returns `false`.
    pub fn insert_next(&mut self, node: DegreeId, inserted: DegreeId) -> bool {
        if !self.contains(node) || !self.contains(inserted) || node == inserted {
            return false;
        }
        self.detach(inserted);
        match self.next(node) {
            Some(displaced) => self.insert_between(node, inserted, displaced),
            None => self.attach_next(node, inserted),
        }
    }

    /// Splice `inserted` directly before `node`
    pub fn insert_previous(&mut self, node: DegreeId, inserted: DegreeId) -> bool {
        if !self.contains(node) || !self.contains(inserted) || node == inserted {
            return false;
        }
        self.detach(inserted);
        match self.previous(node) {
            Some(displaced) => self.insert_between(displaced, inserted, node),
            None => self.attach_previous(node, inserted),
        }
    }

    /// Link `previous <-> inserted <-> next`, taking `inserted` out of its
    /// old position first
    pub fn insert_between(&mut self, previous: DegreeId, inserted: DegreeId, next: DegreeId) -> bool {
        if !self.contains(previous) || !self.contains(inserted) || !self.contains(next) {
            return false;
        }
        if inserted == previous || inserted == next {
            return false;
        }
        self.detach(inserted);
        self.attach_next(previous, inserted);
        self.attach_next(inserted, next);
        true
    }

    /// Independent copy of a degree that keeps its outgoing links
    ///
    /// The neighbours still point at the original.
    pub fn copy(&mut self, id: DegreeId) -> Option<DegreeId> {
        let slot = self.slots.get(id.0)?.clone();
        self.slots.push(slot);
        Some(DegreeId(self.slots.len() - 1))
    }

    /// Independent, unlinked copy of a degree
    pub fn copy_cut(&mut self, id: DegreeId) -> Option<DegreeId> {
        let degree = self.get(id)?.clone();
        Some(self.push(degree))
    }

    /// Link the ids in order into an open chain
    pub fn link_open(&mut self, ids: &[DegreeId]) -> Option<DegreeId> {
        let (&first, _) = ids.split_first()?;
        if ids.iter().any(|&id| !self.contains(id)) {
            return None;
        }
        for pair in ids.windows(2) {
            self.attach_next(pair[0], pair[1]);
        }
        self.set_previous(first, None);
        if let Some(&last) = ids.last() {
            self.set_next(last, None);
        }
        Some(first)
    }

    /// Link the ids in order and close the cycle from last to first
    pub fn link_cyclic(&mut self, ids: &[DegreeId]) -> Option<DegreeId> {
        let first = self.link_open(ids)?;
        if let Some(&last) = ids.last() {
            self.attach_next(last, first);
        }
        Some(first)
    }

    /// Walk one round from `start`: until the open end, or until `start`
    /// comes round again. Always yields `start` exactly once.
    pub fn iter_round(&self, start: DegreeId, direction: Direction) -> RoundIter<'_> {
        RoundIter {
            chain: self,
            start,
            current: self.contains(start).then_some(start),
            direction,
            remaining: self.slots.len(),
        }
    }

    /// Terminal node of an open chain, or the node just before `start`
    /// comes round again in a cycle
    pub fn last(&self, start: DegreeId, direction: Direction) -> Option<DegreeId> {
        self.iter_round(start, direction).last()
    }

    /// Whether walking forward from `start` returns to it
    pub fn is_cyclic(&self, start: DegreeId) -> bool {
        self.last(start, Direction::Forward)
            .and_then(|last| self.next(last))
            == Some(start)
    }

    /// Degrees of one forward round, in order
    pub fn degrees(&self, start: DegreeId) -> Vec<&Degree> {
        self.iter_round(start, Direction::Forward)
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// New cyclic chain of unlinked copies ordered by absolute modal
    /// position weight
    ///
    /// Ties keep their round order. Returns `None` when any degree in the
    /// round has no absolute modal position; the original chain is never
    /// modified.
    pub fn sort_by_absolute_modal_position(
        &mut self,
        start: DegreeId,
        ascending: bool,
    ) -> Option<DegreeId> {
        let round: Vec<DegreeId> = self.iter_round(start, Direction::Forward).collect();
        if round.is_empty() {
            return None;
        }

        let mut weighted = Vec::with_capacity(round.len());
        for id in round {
            let weight = self.get(id)?.absolute_modal_position?.weight;
            weighted.push((weight, id));
        }

        // sort_by_key is stable
        if ascending {
            weighted.sort_by_key(|&(weight, _)| weight);
        } else {
            weighted.sort_by_key(|&(weight, _)| std::cmp::Reverse(weight));
        }

        let copies: Vec<DegreeId> = weighted
            .into_iter()
            .filter_map(|(_, id)| self.copy_cut(id))
            .collect();
        self.link_cyclic(&copies)
    }

    /// New independently linked chain in reverse round order
    ///
    /// A cyclic input gives a cyclic result; an open input an open one.
    pub fn reverse_sequence(&mut self, start: DegreeId) -> Option<DegreeId> {
        let cyclic = self.is_cyclic(start);
        let round: Vec<DegreeId> = self.iter_round(start, Direction::Forward).collect();

        let copies: Vec<DegreeId> = round
            .into_iter()
            .rev()
            .filter_map(|id| self.copy_cut(id))
            .collect();

        if cyclic {
            self.link_cyclic(&copies)
        } else {
            self.link_open(&copies)
        }
    }

    /// Classify every degree in the round and record its characteristic
    /// as the absolute modal position
    ///
    /// Re-annotating replaces the earlier characteristic instead of adding
    /// a second one. Stops at the first degree that cannot be classified;
    /// degrees after it are left untouched.
    pub fn annotate_modal_positions(&mut self, start: DegreeId) -> Result<(), ModalError> {
        let round: Vec<DegreeId> = self.iter_round(start, Direction::Forward).collect();
        for id in round {
            let Some(degree) = self.get_mut(id) else {
                continue;
            };
            let characteristic = classify_degree(degree.number, degree.half_tones_from_prime)?;
            degree.absolute_modal_position = Some(characteristic.relative_modal_position);
            degree
                .modal_characteristics
                .retain(|existing| existing.degree_number != characteristic.degree_number);
            degree.modal_characteristics.push(characteristic);
        }
        Ok(())
    }
}

/// One round over a `DegreeChain`; see `DegreeChain::iter_round`
#[derive(Debug, Clone)]
pub struct RoundIter<'a> {
    chain: &'a DegreeChain,
    start: DegreeId,
    current: Option<DegreeId>,
    direction: Direction,
    /// Upper bound on yielded nodes; a round never visits more nodes than
    /// the arena holds
    remaining: usize,
}

impl Iterator for RoundIter<'_> {
    type Item = DegreeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        self.current = self
            .chain
            .step(current, self.direction)
            .filter(|&id| id != self.start);
        Some(current)
    }
}
