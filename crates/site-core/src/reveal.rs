//! One-shot reveal tracking for scroll-triggered animations. Each
//! observed element gets a stable id; the first threshold crossing
//! fires, every later crossing is ignored.

use fnv::FnvHashSet;

#[derive(Default, Debug)]
pub struct RevealSet {
    fired: FnvHashSet<u32>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true only the first time `id` is fired.
    pub fn fire(&mut self, id: u32) -> bool {
        self.fired.insert(id)
    }

    #[inline]
    pub fn has_fired(&self, id: u32) -> bool {
        self.fired.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_id() {
        let mut set = RevealSet::new();
        assert!(set.fire(3));
        for _ in 0..5 {
            assert!(!set.fire(3));
        }
        assert!(set.has_fired(3));
        assert!(set.fire(4));
    }
}
