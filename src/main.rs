//! Marketing-page carousel application using Yew.
//! Wires pointer input, view components, and the analytics bridge to the
//! carousel core.

use std::rc::Rc;
use swipe_carousel::{CarouselConfig, InteractionSink, SwipeCarousel};
use yew::prelude::*;

mod analytics;
mod components;
mod config;
mod utils;

use components::{Indicator, NavButton, Slide};
use config::{load_page_config, PageConfig, GRAB_FEEDBACK_THRESHOLD_PX};
use utils::{mouse_point, now_ms, primary_touch};

#[derive(Properties, PartialEq)]
struct CarouselProps {
    config: Rc<PageConfig>,
}

/// The interactive carousel: owns the core state machine and translates
/// DOM input events into gesture samples.
#[function_component(Carousel)]
fn carousel_component(props: &CarouselProps) -> Html {
    let total_slides = props.config.slides.len();
    let thresholds = props.config.thresholds;

    let carousel = use_mut_ref(move || {
        let sink: InteractionSink = Rc::new(|report| analytics::report_interaction(&report));
        SwipeCarousel::new(
            CarouselConfig {
                total_slides,
                thresholds,
            },
            Some(sink),
        )
    });
    let frame = {
        let carousel = carousel.clone();
        use_state_eq(move || carousel.borrow().render())
    };
    let grabbing = use_state_eq(|| false);

    let on_prev = {
        let carousel = carousel.clone();
        let frame = frame.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.borrow_mut().retreat();
            frame.set(carousel.borrow().render());
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        let frame = frame.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.borrow_mut().advance();
            frame.set(carousel.borrow().render());
        })
    };
    let on_indicator_select = {
        let carousel = carousel.clone();
        let frame = frame.clone();
        Callback::from(move |index: usize| {
            carousel.borrow_mut().go_to(index);
            frame.set(carousel.borrow().render());
        })
    };

    let on_touch_start = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = primary_touch(&e) {
                carousel.borrow_mut().on_gesture_start(point, now_ms());
            }
        })
    };
    let on_touch_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            let mut carousel = carousel.borrow_mut();
            if let Some(point) = primary_touch(&e) {
                carousel.on_gesture_move(point);
            }
            // Keep the page from scrolling while the gesture is clearly
            // horizontal.
            if let Some((dx, dy)) = carousel.drag_delta() {
                if dx.abs() > dy.abs() {
                    e.prevent_default();
                }
            }
        })
    };
    let on_touch_end = {
        let carousel = carousel.clone();
        let frame = frame.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = primary_touch(&e) {
                carousel.borrow_mut().on_gesture_end(point, now_ms());
            }
            frame.set(carousel.borrow().render());
        })
    };

    let on_mouse_down = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            // Keeps the drag from selecting page text.
            e.prevent_default();
            carousel.borrow_mut().on_gesture_start(mouse_point(&e), now_ms());
        })
    };
    let on_mouse_move = {
        let carousel = carousel.clone();
        let grabbing = grabbing.clone();
        Callback::from(move |e: MouseEvent| {
            let mut carousel = carousel.borrow_mut();
            carousel.on_gesture_move(mouse_point(&e));
            if let Some((dx, _)) = carousel.drag_delta() {
                grabbing.set(dx.abs() > GRAB_FEEDBACK_THRESHOLD_PX);
            }
        })
    };
    // Leaving the surface ends the gesture at the leave position, exactly
    // like a release.
    let on_mouse_up = {
        let carousel = carousel.clone();
        let frame = frame.clone();
        let grabbing = grabbing.clone();
        Callback::from(move |e: MouseEvent| {
            carousel.borrow_mut().on_gesture_end(mouse_point(&e), now_ms());
            grabbing.set(false);
            frame.set(carousel.borrow().render());
        })
    };
    // Suppress the context menu a long press would otherwise open.
    let on_context_menu = Callback::from(|e: MouseEvent| e.prevent_default());

    let track_style = format!("transform: translateX({}%);", frame.track_offset_pct);

    html! {
        <>
            <div
                class={classes!("carousel", (*grabbing).then_some("grabbing"))}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up.clone()}
                onmouseleave={on_mouse_up}
                oncontextmenu={on_context_menu}
            >
                <div class="carousel-track" style={track_style}>
                    { props.config.slides.iter().map(|def| html! {
                        <Slide def={def.clone()} />
                    }).collect::<Html>() }
                </div>
                <NavButton
                    label="‹"
                    class={classes!("carousel-btn", "prev")}
                    disabled={frame.prev_disabled}
                    onclick={on_prev}
                />
                <NavButton
                    label="›"
                    class={classes!("carousel-btn", "next")}
                    disabled={frame.next_disabled}
                    onclick={on_next}
                />
            </div>
            <div class="indicators">
                { (0..total_slides).map(|index| html! {
                    <Indicator
                        key={index}
                        {index}
                        active={index == frame.current_slide}
                        onselect={on_indicator_select.clone()}
                    />
                }).collect::<Html>() }
            </div>
        </>
    }
}

/// Page shell: loads the embedded carousel configuration and mounts the
/// widget.
#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_page_config());

    html! {
        <div class="container">
            <h1>{ "See it in action" }</h1>
            if config.slides.is_empty() {
                <p class="no-slides-message">{ "Nothing to show right now." }</p>
            } else {
                <Carousel config={config.clone()} />
            }
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
