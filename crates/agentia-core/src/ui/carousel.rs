use std::time::Duration;

/// Delay between automatic advances
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

const SWIPE_DISTANCE: f64 = 100.0;
const SWIPE_VELOCITY: f64 = 500.0;

/// Horizontal drag released by the visitor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    /// Drag distance in px, negative towards the left
    pub offset_x: f64,
    /// Release velocity in px/s
    pub velocity_x: f64,
}

/// Index into a fixed, non-empty list of slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Returns `None` for an empty slide list.
    pub const fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { index: 0, len })
        }
    }

    pub const fn index(self) -> usize {
        self.index
    }

    pub const fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jump to a dot; out-of-range indices clamp to the last slide
    #[must_use]
    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len - 1),
            ..self
        }
    }

    /// Far or fast drags change slide, anything else snaps back.
    #[must_use]
    pub fn swipe(self, swipe: Swipe) -> Self {
        let decisive =
            swipe.velocity_x.abs() > SWIPE_VELOCITY || swipe.offset_x.abs() > SWIPE_DISTANCE;
        if !decisive {
            return self;
        }
        if swipe.offset_x < 0.0 { self.next() } else { self.prev() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel_rejected() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let c = Carousel::new(3).unwrap();
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
    }

    #[test]
    fn test_go_to_clamps() {
        let c = Carousel::new(3).unwrap();
        assert_eq!(c.go_to(1).index(), 1);
        assert_eq!(c.go_to(9).index(), 2);
    }

    #[test]
    fn test_swipe_thresholds() {
        let c = Carousel::new(3).unwrap();

        let short = Swipe { offset_x: -40.0, velocity_x: 120.0 };
        assert_eq!(c.swipe(short).index(), 0);

        let far_left = Swipe { offset_x: -150.0, velocity_x: 0.0 };
        assert_eq!(c.swipe(far_left).index(), 1);

        let flick_right = Swipe { offset_x: 20.0, velocity_x: 900.0 };
        assert_eq!(c.swipe(flick_right).index(), 2);
    }
}
