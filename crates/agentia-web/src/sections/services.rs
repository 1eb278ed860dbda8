use agentia_core::content::SERVICES;
use leptos::prelude::*;

use crate::components::{Icon, RevealOnScroll, SectionHeader, stagger};

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="section services">
            <SectionHeader
                title="Our Services"
                subtitle="Comprehensive digital solutions to transform your business"
            />
            <div class="card-grid">
                {SERVICES
                    .iter()
                    .enumerate()
                    .map(|(i, service)| {
                        view! {
                            <RevealOnScroll delay_ms={stagger(i, 100)} class="card service-card">
                                <div class="card-icon" style=format!("background: {}", service.gradient.css())>
                                    <Icon name=service.icon />
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
