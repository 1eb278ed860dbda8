//! Full-screen video hero with the "Explore" portal transition.

use agentia_core::{
    content::HERO,
    ui::{DEPART_AFTER, PortalTransition, SETTLE_AFTER},
};
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{Entrance, PortalOverlay, RevealOnScroll};

/// Section the portal flies the visitor to
const DESTINATION: &str = "about";

fn scroll_to(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let portal = RwSignal::new(PortalTransition::default());

    let explore = move |_| {
        let mut run = None;
        portal.update(|p| run = p.explore());
        let Some(run) = run else {
            return;
        };

        set_timeout(
            move || {
                let mut departing = false;
                portal.update(|p| departing = p.depart(run));
                if departing {
                    scroll_to(DESTINATION);
                    set_timeout(move || portal.update(|p| p.settle(run)), SETTLE_AFTER);
                }
            },
            DEPART_AFTER,
        );
    };

    view! {
        <section class="hero">
            <video
                class="hero-video"
                src=HERO.video_url
                poster=HERO.poster_url
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            ></video>
            <div class="hero-shade"></div>

            <div class="hero-content">
                <RevealOnScroll entrance=Entrance::Scale>
                    <p class="hero-kicker">{HERO.kicker}</p>
                    <h1 class="hero-title gradient-text">{HERO.title}</h1>
                </RevealOnScroll>
                <RevealOnScroll delay_ms=300>
                    <p class="hero-tagline">{HERO.tagline}</p>
                </RevealOnScroll>
                <RevealOnScroll delay_ms=600>
                    <button
                        class="btn btn-primary hero-cta"
                        disabled=move || portal.with(|p| p.shows_portal())
                        on:click=explore
                    >
                        {HERO.cta}
                    </button>
                </RevealOnScroll>
            </div>

            <Show when=move || portal.with(|p| p.shows_portal())>
                <PortalOverlay />
            </Show>
        </section>
    }
}
