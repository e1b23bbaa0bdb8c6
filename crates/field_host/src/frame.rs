//! Deferred caret restoration.
//!
//! Setting a caret on a surface that has not yet repainted its new text has no
//! effect, so fields schedule the restoration here and the host applies it on
//! its next frame tick. A later restoration for the same field replaces an
//! earlier pending one.

use field_core::{FieldId, SelectionRange};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: BTreeMap<FieldId, SelectionRange>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `range` for `id`, returning the restoration it superseded.
    pub fn schedule(&mut self, id: FieldId, range: SelectionRange) -> Option<SelectionRange> {
        let superseded = self.pending.insert(id, range);
        if let Some(prev) = superseded {
            log::trace!(target: "field.frame", "{id}: restore {prev} superseded by {range}");
        }
        superseded
    }

    pub fn pending(&self, id: FieldId) -> Option<SelectionRange> {
        self.pending.get(&id).copied()
    }

    pub fn cancel(&mut self, id: FieldId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Take every pending restoration, in field order.
    pub fn take(&mut self) -> Vec<(FieldId, SelectionRange)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_schedule_wins() {
        let mut frames = FrameQueue::new();
        let id = FieldId::from_raw(1);
        assert_eq!(frames.schedule(id, SelectionRange::collapsed(1)), None);
        assert_eq!(
            frames.schedule(id, SelectionRange::collapsed(2)),
            Some(SelectionRange::collapsed(1))
        );
        assert_eq!(frames.take(), vec![(id, SelectionRange::collapsed(2))]);
        assert!(frames.is_empty());
    }

    #[test]
    fn take_drains_in_field_order() {
        let mut frames = FrameQueue::new();
        frames.schedule(FieldId::from_raw(9), SelectionRange::collapsed(0));
        frames.schedule(FieldId::from_raw(2), SelectionRange::collapsed(5));
        let ids: Vec<u64> = frames.take().into_iter().map(|(id, _)| id.as_raw()).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn cancel_drops_a_pending_restore() {
        let mut frames = FrameQueue::new();
        let id = FieldId::from_raw(4);
        frames.schedule(id, SelectionRange::collapsed(3));
        assert!(frames.cancel(id));
        assert!(!frames.cancel(id));
        assert_eq!(frames.pending(id), None);
    }
}
