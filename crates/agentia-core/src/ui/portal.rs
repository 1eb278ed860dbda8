use std::time::Duration;

/// Time the portal spins before the page scrolls on
pub const DEPART_AFTER: Duration = Duration::from_secs(2);

/// Time after the scroll before the portal is torn down
pub const SETTLE_AFTER: Duration = Duration::from_secs(1);

/// Phase of the hero "Explore" transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PortalPhase {
    #[default]
    Idle,
    /// Shader overlay is showing
    Opening,
    /// Page is scrolling to the next section, overlay still up
    Departing,
}

/// Explore-button transition. Each timer advance carries the run it was
/// scheduled for, so a stale timer cannot cut a later run short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortalTransition {
    phase: PortalPhase,
    run: u32,
}

impl PortalTransition {
    pub const fn phase(self) -> PortalPhase {
        self.phase
    }

    /// Whether the shader overlay should be mounted
    pub const fn shows_portal(self) -> bool {
        !matches!(self.phase, PortalPhase::Idle)
    }

    /// Explore clicked. Returns the run id for the follow-up timers, or
    /// `None` when a transition is already playing.
    pub fn explore(&mut self) -> Option<u32> {
        if self.shows_portal() {
            return None;
        }
        self.run = self.run.wrapping_add(1);
        self.phase = PortalPhase::Opening;
        Some(self.run)
    }

    /// `DEPART_AFTER` elapsed. Returns `true` when the caller should scroll.
    pub fn depart(&mut self, run: u32) -> bool {
        if run != self.run || self.phase != PortalPhase::Opening {
            return false;
        }
        self.phase = PortalPhase::Departing;
        true
    }

    /// `SETTLE_AFTER` elapsed after departing.
    pub fn settle(&mut self, run: u32) {
        if run == self.run && self.phase == PortalPhase::Departing {
            self.phase = PortalPhase::Idle;
        }
    }
}
