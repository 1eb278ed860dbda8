//! Contact form posting to the hosted form backend, plus contact cards.

use agentia_core::{
    ContactBackend, ContactFormState, SubmitStatus,
    contact::{BANNER_TIMEOUT, ContactField},
    content::CONTACT_INFO,
};
use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::api::FormspreeBackend;
use crate::components::{Entrance, Icon, RevealOnScroll, SectionHeader, stagger};

#[component]
fn Field(state: RwSignal<ContactFormState>, field: ContactField) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_owned());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        state.update(|s| s.form.set(field, text));
    };

    match field {
        ContactField::Message => view! {
            <textarea
                name=field.to_string()
                placeholder=field.placeholder()
                rows="5"
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                type=field.input_type()
                name=field.to_string()
                placeholder=field.placeholder()
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::new());
    let backend = StoredValue::new_local(FormspreeBackend::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        state.update(|s| started = Some(s.begin_submit()));
        let Some(Ok(payload)) = started else {
            return;
        };

        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            let outcome = backend.submit(&payload).await;
            let mut ticket = None;
            state.update(|s| ticket = Some(s.finish_submit(outcome)));
            if let Some(ticket) = ticket {
                set_timeout(move || state.update(|s| s.dismiss_banner(ticket)), BANNER_TIMEOUT);
            }
        });
    };

    let banner = move || {
        let status = state.with(ContactFormState::status);
        status.banner_text().map(|text| {
            let class = if status == SubmitStatus::Success {
                "banner banner-success"
            } else {
                "banner banner-error"
            };
            view! { <div class=class role="status">{text}</div> }
        })
    };

    view! {
        <section class="section contact">
            <SectionHeader
                title="Get in Touch"
                subtitle="Have a project in mind? Let's build something amazing together."
            />
            <div class="contact-body">
                <div class="contact-cards">
                    {CONTACT_INFO
                        .iter()
                        .enumerate()
                        .map(|(i, info)| {
                            view! {
                                <RevealOnScroll
                                    entrance=Entrance::Left
                                    delay_ms={stagger(i, 150)}
                                    class="contact-card"
                                >
                                    <a href=info.link>
                                        <Icon name=info.icon />
                                        <div>
                                            <h4>{info.title}</h4>
                                            <p>{info.content}</p>
                                        </div>
                                    </a>
                                </RevealOnScroll>
                            }
                        })
                        .collect_view()}
                </div>

                <RevealOnScroll entrance=Entrance::Right class="contact-form-wrap">
                    <form class="contact-form" on:submit=on_submit>
                        {ContactField::ALL
                            .into_iter()
                            .map(|field| view! { <Field state=state field=field /> })
                            .collect_view()}
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.with(ContactFormState::is_submitting)
                        >
                            {move || {
                                if state.with(ContactFormState::is_submitting) {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                        {banner}
                    </form>
                </RevealOnScroll>
            </div>
        </section>
    }
}
