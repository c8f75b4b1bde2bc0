//! One-shot progress bar reveal.
//!
//! Bars render at 0% and move to their target width once, the first time
//! they are visible after the animator has been armed. A revealed bar is
//! released and ignores every later visibility notification.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarState {
    Waiting { target: u8, visible: bool },
    Revealed { target: u8 },
}

/// A bar that just moved to its target width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub target: u8,
}

#[derive(Debug, Clone, Default)]
pub struct ProgressAnimator {
    armed: bool,
    bars: BTreeMap<usize, BarState>,
}

impl ProgressAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a bar; re-registering an index starts it over
    pub fn register(&mut self, index: usize, target: u8) {
        self.bars.insert(
            index,
            BarState::Waiting {
                target,
                visible: false,
            },
        );
    }

    /// Allow reveals; bars already visible are revealed immediately
    pub fn arm(&mut self) -> Vec<Reveal> {
        self.armed = true;
        let visible: Vec<usize> = self
            .bars
            .iter()
            .filter_map(|(index, state)| match state {
                BarState::Waiting { visible: true, .. } => Some(*index),
                _ => None,
            })
            .collect();
        visible.into_iter().filter_map(|i| self.try_reveal(i)).collect()
    }

    /// Feed a visibility change for one bar
    pub fn on_visibility(&mut self, index: usize, is_visible: bool) -> Option<Reveal> {
        match self.bars.get_mut(&index) {
            Some(BarState::Waiting { visible, .. }) => *visible = is_visible,
            _ => return None,
        }
        if is_visible && self.armed {
            self.try_reveal(index)
        } else {
            None
        }
    }

    fn try_reveal(&mut self, index: usize) -> Option<Reveal> {
        let state = self.bars.get_mut(&index)?;
        if let BarState::Waiting { target, .. } = *state {
            *state = BarState::Revealed { target };
            tracing::trace!(index, target, "progress bar revealed");
            Some(Reveal { index, target })
        } else {
            None
        }
    }

    /// Current width of a bar in percent
    pub fn width(&self, index: usize) -> u8 {
        match self.bars.get(&index) {
            Some(BarState::Revealed { target }) => *target,
            _ => 0,
        }
    }

    /// Whether a bar still waits for a visibility notification
    pub fn is_observing(&self, index: usize) -> bool {
        matches!(self.bars.get(&index), Some(BarState::Waiting { .. }))
    }

    pub fn observed_count(&self) -> usize {
        self.bars
            .values()
            .filter(|s| matches!(s, BarState::Waiting { .. }))
            .count()
    }

    /// Forget every bar and disarm, ready for a new render
    pub fn reset(&mut self) {
        self.armed = false;
        self.bars.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_before_arming_waits_for_arm() {
        let mut animator = ProgressAnimator::new();
        animator.register(0, 70);
        assert_eq!(animator.on_visibility(0, true), None);
        assert_eq!(animator.width(0), 0);

        let revealed = animator.arm();
        assert_eq!(revealed, vec![Reveal { index: 0, target: 70 }]);
        assert_eq!(animator.width(0), 70);
    }

    #[test]
    fn reveal_happens_once() {
        let mut animator = ProgressAnimator::new();
        animator.register(1, 40);
        animator.arm();

        assert_eq!(animator.on_visibility(1, true), Some(Reveal { index: 1, target: 40 }));
        assert!(!animator.is_observing(1));
        assert_eq!(animator.on_visibility(1, false), None);
        assert_eq!(animator.on_visibility(1, true), None);
        assert_eq!(animator.width(1), 40);
    }

    #[test]
    fn hidden_bars_stay_at_zero() {
        let mut animator = ProgressAnimator::new();
        animator.register(0, 100);
        animator.register(1, 50);
        animator.arm();
        animator.on_visibility(0, true);

        assert_eq!(animator.width(1), 0);
        assert_eq!(animator.observed_count(), 1);
    }

    #[test]
    fn scrolled_away_before_arm_is_not_revealed() {
        let mut animator = ProgressAnimator::new();
        animator.register(0, 30);
        animator.on_visibility(0, true);
        animator.on_visibility(0, false);
        assert!(animator.arm().is_empty());
    }

    #[test]
    fn unknown_bar_is_ignored() {
        let mut animator = ProgressAnimator::new();
        animator.arm();
        assert_eq!(animator.on_visibility(9, true), None);
    }
}
