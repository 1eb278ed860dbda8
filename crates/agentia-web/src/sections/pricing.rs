use agentia_core::{content::PRICING_PLANS, ui::TierHighlight};
use leptos::prelude::*;

use crate::components::{Icon, RevealOnScroll, SectionHeader, stagger};

#[component]
pub fn PricingSection() -> impl IntoView {
    let popular = PRICING_PLANS.iter().position(|p| p.popular).unwrap_or_default();
    let highlight = RwSignal::new(TierHighlight::new(popular));

    view! {
        <section class="section pricing">
            <SectionHeader
                title="Choose Your Plan"
                subtitle="Flexible pricing for every stage of your AI journey"
            />
            <div class="pricing-grid">
                {PRICING_PLANS
                    .iter()
                    .enumerate()
                    .map(|(i, plan)| {
                        let class = move || {
                            if highlight.get().is_active(i) {
                                "pricing-card active"
                            } else {
                                "pricing-card"
                            }
                        };
                        view! {
                            <RevealOnScroll delay_ms={stagger(i, 200)}>
                                <div
                                    class=class
                                    on:mouseenter=move |_| highlight.update(|h| *h = h.hover(i))
                                    on:mouseleave=move |_| highlight.update(|h| *h = h.leave())
                                >
                                    {plan.popular.then(|| view! { <span class="badge">"Most Popular"</span> })}
                                    <h3>{plan.name}</h3>
                                    <p class="plan-description">{plan.description}</p>
                                    <div class="price">
                                        <span
                                            class="amount"
                                            style=format!("background-image: {}", plan.gradient.css())
                                        >
                                            {plan.price_label()}
                                        </span>
                                        <span class="period">"/month"</span>
                                    </div>
                                    <ul class="plan-features">
                                        {plan
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <Icon name="ri-check-line" />
                                                        <span>{*feature}</span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <a href="#contact" class="btn btn-primary">"Get Started"</a>
                                </div>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
