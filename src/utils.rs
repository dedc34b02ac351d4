use swipe_carousel::Point;
use yew::events::{MouseEvent, TouchEvent};

/// Current wall-clock time in milliseconds, matching the resolution the
/// gesture recognizer expects.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs_f64()
        * 1000.0
}

/// Page coordinates of the first changed touch. Touch devices supply a
/// single primary contact point; later contacts are ignored.
pub fn primary_touch(event: &TouchEvent) -> Option<Point> {
    event
        .changed_touches()
        .get(0)
        .map(|touch| Point::new(touch.page_x() as f64, touch.page_y() as f64))
}

/// Page coordinates of a mouse event.
pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(event.page_x() as f64, event.page_y() as f64)
}
