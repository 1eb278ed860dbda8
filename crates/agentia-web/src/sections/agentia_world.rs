//! The "Agentia World" product block: feature cards, highlights, gallery.

use agentia_core::content::{AGENTIA_FEATURES, AGENTIA_HIGHLIGHTS, SLIDES};
use leptos::prelude::*;

use crate::components::{Entrance, Icon, ImageSlider, RevealOnScroll, SectionHeader, stagger};

#[component]
pub fn AgentiaWorldSection() -> impl IntoView {
    view! {
        <section class="section agentia-world">
            <SectionHeader
                title="Enter Agentia World"
                subtitle="A living ecosystem where autonomous AI agents learn, collaborate and evolve"
            />
            <div class="card-grid features">
                {AGENTIA_FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        view! {
                            <RevealOnScroll
                                entrance=Entrance::Scale
                                delay_ms={stagger(i, 100)}
                                class="card feature-card"
                            >
                                <div
                                    class="card-icon"
                                    style=format!("background: {}", feature.gradient.css())
                                >
                                    <Icon name=feature.icon />
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="agentia-showcase">
                <RevealOnScroll entrance=Entrance::Left class="highlights">
                    <h3>"Why Agentia World?"</h3>
                    <ul>
                        {AGENTIA_HIGHLIGHTS
                            .iter()
                            .map(|line| {
                                view! {
                                    <li>
                                        <Icon name="ri-checkbox-circle-line" />
                                        <span>{*line}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <a href="#pricing" class="btn btn-primary">"Start Your Journey"</a>
                </RevealOnScroll>
                <RevealOnScroll entrance=Entrance::Right class="gallery">
                    <ImageSlider slides=SLIDES />
                </RevealOnScroll>
            </div>
        </section>
    }
}
