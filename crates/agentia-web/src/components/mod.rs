//! UI Components

mod chat_widget;
mod footer;
mod navbar;
mod portal;
mod reveal;
mod slider;

pub use chat_widget::ChatWidget;
pub use footer::Footer;
pub use navbar::Navbar;
pub use portal::PortalOverlay;
pub use reveal::{Entrance, RevealOnScroll, stagger};
pub use slider::ImageSlider;

use leptos::prelude::*;

/// Gradient heading plus subtitle used at the top of most sections
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <RevealOnScroll>
                <h2 class="section-title">
                    <span class="gradient-text">{title}</span>
                </h2>
            </RevealOnScroll>
            <RevealOnScroll delay_ms=200>
                <p class="section-subtitle">{subtitle}</p>
            </RevealOnScroll>
        </div>
    }
}

/// Remix Icon glyph
#[component]
pub fn Icon(name: &'static str) -> impl IntoView {
    view! { <i class=format!("icon {name}") aria-hidden="true"></i> }
}
