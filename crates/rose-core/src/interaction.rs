use crate::error::{Result, RoseError};
use crate::petal::Interaction;
use crate::tree::RoseTree;

/// Address of one petal: tree index in the scene, petal index in its canopy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PetalId {
    pub tree: usize,
    pub petal: usize,
}

impl PetalId {
    pub fn new(tree: usize, petal: usize) -> Self {
        Self { tree, petal }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: PetalId,
    pub kind: Interaction,
}

/// Pointer events collected between frames and applied once, in arrival
/// order, at the start of the next frame.
#[derive(Clone, Debug, Default)]
pub struct InteractionQueue {
    events: Vec<PointerEvent>,
}

impl InteractionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: PetalId, kind: Interaction) {
        self.events.push(PointerEvent { target, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply and clear all queued events. Events addressed to petals that do
    /// not exist are logged and dropped. Returns how many were applied.
    pub fn drain_into(&mut self, trees: &mut [RoseTree]) -> usize {
        let mut applied = 0;
        for ev in self.events.drain(..) {
            match apply_event(trees, ev) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("[input] dropping {:?}: {}", ev.kind, e),
            }
        }
        applied
    }
}

pub fn apply_event(trees: &mut [RoseTree], ev: PointerEvent) -> Result<()> {
    let PetalId { tree, petal } = ev.target;
    let out_of_range = RoseError::PetalOutOfRange { tree, petal };
    let t = trees.get_mut(tree).ok_or_else(|| out_of_range.clone())?;
    if t.interact(petal, ev.kind) {
        Ok(())
    } else {
        Err(out_of_range)
    }
}
