use agentia_core::{content::FAQ_ENTRIES, ui::Accordion};
use leptos::prelude::*;

use crate::components::{Icon, RevealOnScroll, SectionHeader, stagger};

#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section class="section faq">
            <SectionHeader
                title="Frequently Asked Questions"
                subtitle="Everything you need to know about working with us"
            />
            <div class="faq-list">
                {FAQ_ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let open = move || accordion.get().is_expanded(i);
                        view! {
                            <RevealOnScroll delay_ms={stagger(i, 100)}>
                                <div class=move || if open() { "faq-item open" } else { "faq-item" }>
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || open().to_string()
                                        on:click=move |_| accordion.update(|a| *a = a.toggle(i))
                                    >
                                        <span>{entry.question}</span>
                                        <Icon name="ri-arrow-down-s-line" />
                                    </button>
                                    <Show when=open>
                                        <p class="faq-answer">{entry.answer}</p>
                                    </Show>
                                </div>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
