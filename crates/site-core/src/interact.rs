//! Interaction state owned by a single bindings context: the konami
//! key tracker and the page-wide click milestone counter. Both are
//! plain values passed around explicitly so they can be tested in
//! isolation.

use crate::constants::{MILESTONE_CONFETTI, MILESTONE_FIREWORKS, MILESTONE_RAINBOW};
use fnv::FnvHashSet;

/// The fixed easter-egg key sequence, in `KeyboardEvent.key` form.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Linear state machine over [`KONAMI_SEQUENCE`]: states `0..=N` where
/// N is the sequence length. Any non-matching key resets progress to 0;
/// reaching N reports a trigger and resets.
#[derive(Default, Debug)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Feed one key. Returns true exactly when the full sequence has
    /// just been completed.
    pub fn feed(&mut self, key: &str) -> bool {
        if key == KONAMI_SEQUENCE[self.progress] {
            self.progress += 1;
            if self.progress == KONAMI_SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }
}

/// Escalating celebration tiers for the page-wide click counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Milestone {
    Confetti,
    Fireworks,
    Rainbow,
}

impl Milestone {
    #[inline]
    pub fn at(count: u64) -> Option<Milestone> {
        match count {
            MILESTONE_CONFETTI => Some(Milestone::Confetti),
            MILESTONE_FIREWORKS => Some(Milestone::Fireworks),
            MILESTONE_RAINBOW => Some(Milestone::Rainbow),
            _ => None,
        }
    }

    pub fn notification(self) -> &'static str {
        match self {
            Milestone::Confetti => "🎉 10 clicks! You earned the \"Curious Explorer\" badge! 🎉",
            Milestone::Fireworks => "🎆 50 clicks! You earned the \"Super Clicker\" badge! 🎆",
            Milestone::Rainbow => "🌈 100 clicks! Rainbow mode activated! 🌈",
        }
    }
}

/// Free-running page click counter with exactly-once milestones. There
/// is one counting source (the document-level click listener); feeding
/// the same count twice cannot re-fire a milestone.
#[derive(Default, Debug)]
pub struct ClickMilestones {
    count: u64,
    fired: FnvHashSet<u64>,
}

impl ClickMilestones {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Record one click; reports the milestone reached, if any and if
    /// not already fired.
    pub fn record_click(&mut self) -> Option<Milestone> {
        self.count += 1;
        let milestone = Milestone::at(self.count)?;
        if self.fired.insert(self.count) {
            Some(milestone)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn konami_completes_exactly_once() {
        let mut t = KonamiTracker::new();
        let mut triggers = 0;
        for key in KONAMI_SEQUENCE {
            if t.feed(key) {
                triggers += 1;
            }
        }
        assert_eq!(triggers, 1);
        assert_eq!(t.progress(), 0);
    }

    #[test]
    fn konami_mismatch_resets_to_zero() {
        let mut t = KonamiTracker::new();
        for key in &KONAMI_SEQUENCE[..4] {
            assert!(!t.feed(key));
        }
        assert_eq!(t.progress(), 4);
        assert!(!t.feed("x"));
        assert_eq!(t.progress(), 0);
        // Even a key equal to the first step resets when it mismatches.
        for key in &KONAMI_SEQUENCE[..3] {
            t.feed(key);
        }
        assert!(!t.feed("ArrowUp"));
        assert_eq!(t.progress(), 0);
    }

    #[test]
    fn milestones_fire_once_at_fixed_counts() {
        let mut c = ClickMilestones::new();
        let mut fired = Vec::new();
        for _ in 0..120 {
            if let Some(m) = c.record_click() {
                fired.push((c.count(), m));
            }
        }
        assert_eq!(
            fired,
            vec![
                (10, Milestone::Confetti),
                (50, Milestone::Fireworks),
                (100, Milestone::Rainbow)
            ]
        );
    }
}
