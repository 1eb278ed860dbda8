use agentia_core::content::STEPS;
use leptos::prelude::*;

use crate::components::{Entrance, Icon, RevealOnScroll, SectionHeader};

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="section how-it-works">
            <SectionHeader
                title="How It Works"
                subtitle="From first conversation to launch in four steps"
            />
            <ol class="timeline">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| {
                        let entrance = if i % 2 == 0 { Entrance::Left } else { Entrance::Right };
                        view! {
                            <li class="timeline-step">
                                <RevealOnScroll entrance=entrance class="step-card">
                                    <div
                                        class="card-icon"
                                        style=format!("background: {}", step.gradient.css())
                                    >
                                        <Icon name=step.icon />
                                    </div>
                                    <span class="step-number">{format!("{:02}", i + 1)}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </RevealOnScroll>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
