//! Animation slots that fall back to a placeholder image once loading fails.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Playing,
    Fallback,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationFallback {
    failed: BTreeSet<usize>,
}

impl AnimationFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `slot` as failed. Returns `false` when it already was.
    pub fn fail(&mut self, slot: usize) -> bool {
        self.failed.insert(slot)
    }

    pub fn state(&self, slot: usize) -> AnimationState {
        if self.failed.contains(&slot) {
            AnimationState::Fallback
        } else {
            AnimationState::Playing
        }
    }
}
