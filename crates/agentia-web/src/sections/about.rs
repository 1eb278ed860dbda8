use agentia_core::content::ABOUT_STATS;
use leptos::prelude::*;

use crate::components::{Entrance, RevealOnScroll, SectionHeader, stagger};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="section about">
            <SectionHeader
                title="About Agentia World"
                subtitle="We are a team of innovators building AI-powered digital experiences that help businesses grow."
            />
            <div class="about-body">
                <RevealOnScroll entrance=Entrance::Left class="about-copy">
                    <h3>"Our Mission"</h3>
                    <p>
                        "At Agentia World we bridge the gap between people and intelligent technology. "
                        "From modern websites to autonomous AI agents, we design solutions that are "
                        "practical, beautiful and ready for what comes next."
                    </p>
                </RevealOnScroll>
                <div class="stats-grid">
                    {ABOUT_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <RevealOnScroll
                                    entrance=Entrance::Scale
                                    delay_ms={stagger(i, 150)}
                                    class="stat-card"
                                >
                                    <span class="stat-icon">{stat.icon}</span>
                                    <span class="stat-number gradient-text">
                                        {format!("{}+", stat.number)}
                                    </span>
                                    <span class="stat-label">{stat.label}</span>
                                </RevealOnScroll>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
