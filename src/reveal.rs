//! One-shot entrance reveal for gallery cards.
//!
//! Each observed element starts `Hidden` and moves to `Visible` on its first
//! qualifying intersection. A visible element ignores every later event.

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible before it fires.
    pub threshold: f64,
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, stagger_ms: DEFAULT_STAGGER_MS }
    }
}

impl RevealConfig {
    /// Transition delay for the element at `index` in iteration order.
    pub fn delay_for(&self, index: usize) -> u64 {
        index as u64 * self.stagger_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Reference model of the observer that `templates::REVEAL_SCRIPT` runs in
/// the rendered page; the renderer uses it for registration and delays.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    config: RevealConfig,
    elements: Vec<RevealState>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self { config, elements: Vec::new() }
    }

    /// Registers `count` more elements and returns the index of the first one.
    pub fn observe(&mut self, count: usize) -> usize {
        let first = self.elements.len();
        self.elements.resize(first + count, RevealState::Hidden);
        first
    }

    /// Feeds one intersection event. Returns `true` only when this event made
    /// the element visible.
    pub fn on_intersection(&mut self, index: usize, ratio: f64) -> bool {
        let Some(state) = self.elements.get_mut(index) else { return false };

        if *state == RevealState::Visible || ratio <= 0.0 || ratio < self.config.threshold {
            return false;
        }

        *state = RevealState::Visible;
        true
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.elements.get(index).copied()
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.elements.iter().filter(|s| **s == RevealState::Hidden).count()
    }

    pub fn delay_for(&self, index: usize) -> u64 {
        self.config.delay_for(index)
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }
}
