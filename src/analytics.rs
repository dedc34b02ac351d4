//! Fire-and-forget bridge to the host page's analytics collaborator.
//!
//! The marketing page may or may not have loaded its analytics layer by the
//! time the carousel reports an interaction, so the bridge looks the `gtag`
//! global up on every call and silently drops the report when it is absent.
//! A missing or broken sink must never disturb the carousel.

use js_sys::{Function, Object, Reflect};
use log::debug;
use swipe_carousel::InteractionReport;
use wasm_bindgen::{JsCast, JsValue};

const EVENT_NAME: &str = "carousel_interaction";
const EVENT_CATEGORY: &str = "User Engagement";

/// Forward an interaction report to `window.gtag`, if present.
pub fn report_interaction(report: &InteractionReport) {
    let Some(gtag) = lookup_gtag() else {
        debug!("analytics sink absent, dropping {} report", report.label);
        return;
    };

    let params = Object::new();
    set(&params, "event_category", &EVENT_CATEGORY.into());
    set(&params, "event_label", &report.label.as_str().into());
    set(&params, "slide_number", &f64::from(report.slide_number).into());
    set(&params, "user_language", &user_language().into());

    if gtag
        .call3(&JsValue::NULL, &"event".into(), &EVENT_NAME.into(), &params)
        .is_err()
    {
        debug!("analytics sink rejected {} report", report.label);
    }
}

fn lookup_gtag() -> Option<Function> {
    let window = gloo_utils::window();
    Reflect::get(window.as_ref(), &"gtag".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn user_language() -> String {
    gloo_utils::window()
        .navigator()
        .language()
        .unwrap_or_else(|| "unknown".to_string())
}

// Reflect::set only fails on non-object targets; `params` is always one.
fn set(params: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(params, &key.into(), value);
}
