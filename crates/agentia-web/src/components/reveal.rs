//! Scroll-triggered entrance animation.
//!
//! The wrapper starts in its `Entrance` pose (faded, offset) and gains
//! `is-visible` the first time its top edge crosses the trigger line; the CSS
//! transition does the rest.

use agentia_core::ui::{Reveal, RevealTrigger};
use leptos::{ev, html::Div, prelude::*};

/// Starting pose of an entrance animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl Entrance {
    const fn class(self) -> &'static str {
        match self {
            Self::Up => "reveal-up",
            Self::Left => "reveal-left",
            Self::Right => "reveal-right",
            Self::Scale => "reveal-scale",
        }
    }
}

/// Delay for the `index`-th item of a staggered list
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

#[component]
pub fn RevealOnScroll(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let state = RwSignal::new(Reveal::Hidden);

    let check = move || {
        if state.get_untracked().is_visible() {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        state.update(|s| {
            s.observe(RevealTrigger::default(), top, viewport_height());
        });
    };

    // elements already on screen at mount
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });
    let _listener = window_event_listener(ev::scroll, move |_| check());

    let classes = move || {
        let visible = if state.get().is_visible() { " is-visible" } else { "" };
        format!("reveal {}{visible} {class}", entrance.class())
    };

    view! {
        <div node_ref=node class=classes style=format!("transition-delay: {delay_ms}ms")>
            {children()}
        </div>
    }
}
