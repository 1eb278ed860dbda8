//! Floating AI chat widget.

use agentia_core::{ChatSession, ChatTransport, Role, TurnRejected, ui::WidgetVisibility};
use leptos::{html::Div, prelude::*};

use super::Icon;
use crate::api::HttpChatTransport;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let visibility = RwSignal::new(WidgetVisibility::Closed);
    let session = RwSignal::new(ChatSession::new());
    let input = RwSignal::new(String::new());
    let bottom = NodeRef::<Div>::new();
    let transport = StoredValue::new_local(HttpChatTransport::new());

    // keep the newest message in view
    Effect::new(move |_| {
        session.track();
        if let Some(el) = bottom.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let text = input.get_untracked();
        let mut started = None;
        session.update(|s| started = Some(s.begin_turn(&text)));

        match started {
            Some(Ok(request)) => {
                input.set(String::new());
                let transport = transport.get_value();
                leptos::task::spawn_local(async move {
                    let outcome = transport.send(request).await;
                    session.update(|s| s.complete_turn(outcome));
                });
            }
            Some(Err(TurnRejected::Blank | TurnRejected::Busy)) | None => {}
        }
    };

    let messages = move || {
        session.with(|s| {
            s.messages()
                .iter()
                .map(|m| {
                    let side = match m.role {
                        Role::User => "bubble bubble-user",
                        Role::Assistant => "bubble bubble-assistant",
                    };
                    let content = m.content.clone();
                    view! {
                        <div class=side>
                            <p>{content}</p>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <button
            class="chat-launcher"
            aria-label="Open chat"
            on:click=move |_| visibility.set(WidgetVisibility::Open)
        >
            <Icon name="ri-robot-2-line" />
        </button>

        <Show when=move || visibility.get().is_open()>
            <div class="chat-backdrop" on:click=move |_| visibility.set(WidgetVisibility::Closed)></div>
            <div class="chat-window">
                <div class="chat-header">
                    <div class="chat-title">
                        <Icon name="ri-robot-2-line" />
                        <h3>"Agentia AI Assistant"</h3>
                    </div>
                    <button
                        class="chat-close"
                        aria-label="Close chat"
                        on:click=move |_| visibility.update(|v| *v = v.toggle())
                    >
                        <Icon name="ri-close-line" />
                    </button>
                </div>

                <div class="chat-messages">
                    {messages}
                    <Show when=move || session.with(ChatSession::is_pending)>
                        <div class="bubble bubble-assistant typing">
                            <span class="dot"></span>
                            <span class="dot"></span>
                            <span class="dot"></span>
                        </div>
                    </Show>
                    <div node_ref=bottom></div>
                </div>

                <form
                    class="chat-input"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <input
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        aria-label="Send"
                        disabled=move || session.with(ChatSession::is_pending)
                    >
                        <Icon name="ri-send-plane-fill" />
                    </button>
                </form>
            </div>
        </Show>
    }
}
