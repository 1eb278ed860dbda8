use agentia_core::content::{FOOTER_GROUPS, PAGE_META, SOCIAL_LINKS, copyright_line};
use chrono::Datelike;
use leptos::prelude::*;

use super::{Icon, RevealOnScroll, stagger};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-company">
                    <RevealOnScroll>
                        <h3 class="gradient-text">{PAGE_META.company}</h3>
                    </RevealOnScroll>
                    <RevealOnScroll delay_ms=100>
                        <p>"Shaping the future through innovative AI solutions and cutting-edge technology."</p>
                    </RevealOnScroll>
                    <div class="socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a href=social.href class="social" aria-label=social.label>
                                        <Icon name=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                {FOOTER_GROUPS
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        view! {
                            <RevealOnScroll delay_ms={200 + stagger(i, 100)}>
                                <h4>{group.title}</h4>
                                <ul>
                                    {group
                                        .links
                                        .iter()
                                        .map(|link| view! { <li><a href="#">{*link}</a></li> })
                                        .collect_view()}
                                </ul>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer-bottom">
                <span>{copyright_line(year)}</span>
                <nav>
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                    <a href="#">"Cookie Policy"</a>
                </nav>
            </div>
        </footer>
    }
}
