//! Fixed navigation bar with mobile menu.

use agentia_core::{
    content::{NAV_ITEMS, PAGE_META},
    ui::{NavbarState, SectionBounds},
};
use leptos::{ev, prelude::*};

use super::Icon;

fn section_bounds(id: &str) -> Option<SectionBounds> {
    let rect = document().get_element_by_id(id)?.get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavbarState::default());

    let _listener = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        let sections: Vec<_> = NAV_ITEMS
            .iter()
            .filter_map(|item| section_bounds(item.section_id()).map(|b| (item.section_id(), b)))
            .collect();
        nav.update(|n| {
            n.on_scroll(scroll_y);
            n.track_sections(sections);
        });
    });

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let id = item.section_id();
                let class = move || {
                    let active = nav.with(|n| n.active_section() == id);
                    format!("nav-link{}", if active { " active" } else { "" })
                };
                let style = if mobile {
                    format!("transition-delay: {}ms", i * 100)
                } else {
                    String::new()
                };
                view! {
                    <a
                        href=item.href
                        class=class
                        style=style
                        on:click=move |_| nav.update(|n| n.navigate(id))
                    >
                        {item.name}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if nav.with(NavbarState::is_visible) { "navbar" } else { "navbar navbar-hidden" }
        }>
            <a href="#home" class="brand gradient-text">{PAGE_META.company}</a>
            <nav class="nav-links">{links(false)}</nav>
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| nav.update(NavbarState::toggle_menu)
            >
                {move || {
                    let open = nav.with(|n| n.menu().is_open());
                    view! { <Icon name={if open { "ri-close-line" } else { "ri-menu-4-line" }} /> }
                }}
            </button>
            <nav class=move || {
                if nav.with(|n| n.menu().is_open()) { "mobile-menu open" } else { "mobile-menu" }
            }>
                {links(true)}
            </nav>
        </header>
    }
}
