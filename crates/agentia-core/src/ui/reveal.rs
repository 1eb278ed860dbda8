/// Where an entrance animation fires, as in "top bottom-=100": the element's
/// top edge has to rise `offset` px above the viewport bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    pub offset: f64,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self { offset: 100.0 }
    }
}

impl RevealTrigger {
    pub const fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn crossed(self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height - self.offset
    }
}

/// One-shot entrance animation state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Feed a scroll measurement. Returns `true` only on the transition, so
    /// callers can start the animation exactly once per mount.
    pub fn observe(&mut self, trigger: RevealTrigger, element_top: f64, viewport_height: f64) -> bool {
        if self.is_visible() || !trigger.crossed(element_top, viewport_height) {
            return false;
        }
        *self = Self::Visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stays_hidden_below_trigger() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(RevealTrigger::default(), 750.0, 800.0));
        assert_eq!(reveal, Reveal::Hidden);
    }

    #[test]
    fn test_transitions_exactly_once() {
        let mut reveal = Reveal::default();
        let trigger = RevealTrigger::default();

        assert!(reveal.observe(trigger, 600.0, 800.0));
        assert!(!reveal.observe(trigger, 300.0, 800.0));
        // scrolling back out does not hide it again
        assert!(!reveal.observe(trigger, 2000.0, 800.0));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_custom_offset() {
        assert!(RevealTrigger::new(0.0).crossed(800.0, 800.0));
        assert!(!RevealTrigger::new(200.0).crossed(700.0, 800.0));
    }
}
