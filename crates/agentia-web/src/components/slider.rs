//! Autoplaying image carousel with dots and swipe.

use agentia_core::{
    content::Slide,
    ui::{AUTOPLAY_INTERVAL, Carousel, Swipe},
};
use leptos::{ev, prelude::*};

use super::Icon;

fn now_ms() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or_default()
}

#[component]
pub fn ImageSlider(slides: &'static [Slide]) -> impl IntoView {
    let Some(start) = Carousel::new(slides.len()) else {
        return ().into_any();
    };
    let carousel = RwSignal::new(start);
    // (x, timestamp) where the current drag began
    let drag = RwSignal::new(None::<(f64, f64)>);

    if let Ok(handle) =
        set_interval_with_handle(move || carousel.update(|c| *c = c.next()), AUTOPLAY_INTERVAL)
    {
        on_cleanup(move || handle.clear());
    }

    let on_down = move |ev: ev::PointerEvent| {
        drag.set(Some((f64::from(ev.client_x()), now_ms())));
    };
    let on_up = move |ev: ev::PointerEvent| {
        let Some((x0, t0)) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        let offset_x = f64::from(ev.client_x()) - x0;
        let seconds = ((now_ms() - t0) / 1000.0).max(0.001);
        let swipe = Swipe {
            offset_x,
            velocity_x: offset_x / seconds,
        };
        carousel.update(|c| *c = c.swipe(swipe));
    };

    let track_style = move || {
        let index = carousel.get().index();
        format!("transform: translateX(-{}%)", index * 100)
    };

    view! {
        <div class="slider">
            <div
                class="slider-track"
                style=track_style
                on:pointerdown=on_down
                on:pointerup=on_up
                on:pointerleave=move |_| drag.set(None)
            >
                {slides
                    .iter()
                    .map(|slide| {
                        view! {
                            <figure class="slide">
                                <img src=slide.url alt=slide.title draggable="false" />
                                <figcaption>
                                    <h3>{slide.title}</h3>
                                    <p>{slide.description}</p>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="slider-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| carousel.update(|c| *c = c.prev())
            >
                <Icon name="ri-arrow-left-s-line" />
            </button>
            <button
                class="slider-arrow next"
                aria-label="Next slide"
                on:click=move |_| carousel.update(|c| *c = c.next())
            >
                <Icon name="ri-arrow-right-s-line" />
            </button>

            <div class="slider-dots">
                {(0..slides.len())
                    .map(|i| {
                        let class = move || {
                            if carousel.get().index() == i { "dot active" } else { "dot" }
                        };
                        view! {
                            <button
                                class=class
                                aria-label=format!("Go to slide {}", i + 1)
                                on:click=move |_| carousel.update(|c| *c = c.go_to(i))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}
