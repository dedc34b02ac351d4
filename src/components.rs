//! Pure Yew view components for the carousel surface.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::config::SlideDef;
use yew::prelude::*;

/// A single slide inside the carousel track.
#[derive(Properties, PartialEq)]
pub struct SlideProps {
    pub def: SlideDef,
}

#[function_component(Slide)]
pub fn slide(props: &SlideProps) -> Html {
    html! {
        <figure class="carousel-slide">
            <img
                src={props.def.image.clone()}
                alt={props.def.title.clone()}
                draggable="false"
            />
            <figcaption>
                <h3>{ &props.def.title }</h3>
                <p>{ &props.def.body }</p>
            </figcaption>
        </figure>
    }
}

/// Previous/next navigation button with an enabled state driven by the
/// current render frame.
#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub label: AttrValue,
    pub class: Classes,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    html! {
        <button
            class={props.class.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}

/// One indicator dot; clicking it asks the parent to jump to its slide.
#[derive(Properties, PartialEq)]
pub struct IndicatorProps {
    pub index: usize,
    pub active: bool,
    pub onselect: Callback<usize>,
}

#[function_component(Indicator)]
pub fn indicator(props: &IndicatorProps) -> Html {
    let onclick = {
        let onselect = props.onselect.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| onselect.emit(index))
    };
    html! {
        <button
            class={classes!("indicator", props.active.then_some("active"))}
            aria-label={format!("Go to slide {}", props.index + 1)}
            onclick={onclick}
        />
    }
}
