//! UI State Machines
//!
//! Small finite-state values behind the page's interactive bits. They carry
//! no rendering code so the transitions can be tested off the browser.

mod accordion;
mod carousel;
mod navbar;
mod portal;
mod reveal;

pub use accordion::{Accordion, TierHighlight, WidgetVisibility};
pub use carousel::{AUTOPLAY_INTERVAL, Carousel, Swipe};
pub use navbar::{MenuState, NAV_OFFSET, NavbarState, SectionBounds};
pub use portal::{DEPART_AFTER, PortalPhase, PortalTransition, SETTLE_AFTER};
pub use reveal::{Reveal, RevealTrigger};
