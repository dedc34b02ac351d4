use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Default gesture-classification thresholds.
pub mod defaults {
    /// Minimum horizontal travel for a gesture to count as a swipe.
    pub const MIN_DISTANCE_PX: f64 = 50.0;
    /// Maximum vertical drift tolerated during a horizontal swipe.
    pub const MAX_CROSS_AXIS_DRIFT_PX: f64 = 100.0;
    /// Maximum gesture duration; anything slower is a drag, not a swipe.
    pub const MAX_DURATION_MS: f64 = 300.0;
}

/// A position on the tracking surface, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Thresholds separating an intentional flick from a slow drag, an
/// accidental diagonal drag, or a tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureThresholds {
    /// Minimum absolute horizontal displacement, in px.
    pub min_distance: f64,
    /// Maximum absolute vertical displacement tolerated, in px.
    pub max_cross_axis_drift: f64,
    /// Maximum elapsed time, in ms.
    pub max_duration_ms: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            min_distance: defaults::MIN_DISTANCE_PX,
            max_cross_axis_drift: defaults::MAX_CROSS_AXIS_DRIFT_PX,
            max_duration_ms: defaults::MAX_DURATION_MS,
        }
    }
}

/// Carousel construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    pub total_slides: usize,
    pub thresholds: GestureThresholds,
}

impl CarouselConfig {
    /// Config for `total_slides` slides with the default thresholds.
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            thresholds: GestureThresholds::default(),
        }
    }
}

/// Direction of a recognized swipe, in screen terms: the direction the
/// pointer travelled, not the direction the track moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Label attached to an interaction report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionLabel {
    Next,
    Previous,
    Goto,
    SwipeLeft,
    SwipeRight,
}

impl InteractionLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionLabel::Next => "next",
            InteractionLabel::Previous => "previous",
            InteractionLabel::Goto => "goto",
            InteractionLabel::SwipeLeft => "swipe_left",
            InteractionLabel::SwipeRight => "swipe_right",
        }
    }
}

impl fmt::Display for InteractionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-and-forget notification describing a user-triggered slide change.
///
/// `slide_number` is one-indexed and names the slide the carousel shows
/// after the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionReport {
    pub label: InteractionLabel,
    pub slide_number: u32,
}

/// Injected reporting collaborator. The carousel never depends on the
/// sink's result; a missing sink simply means no reports go out.
pub type InteractionSink = Rc<dyn Fn(InteractionReport)>;

/// Everything the view layer needs to draw the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFrame {
    pub current_slide: usize,
    /// Horizontal track translation, in percent of one slide width.
    pub track_offset_pct: i32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Displacement samples accumulated between gesture start and end.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSample {
    start: Point,
    start_time_ms: f64,
    dist_x: f64,
    dist_y: f64,
}

/// At most one gesture is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    Idle,
    Tracking(GestureSample),
}

/// Classify a finished gesture as a directional swipe.
///
/// A gesture qualifies only when it ended within the allowed time,
/// travelled far enough horizontally, and stayed inside the vertical drift
/// tolerance. A purely vertical gesture (`dist_x == 0`) never qualifies.
pub fn classify_swipe(
    dist_x: f64,
    dist_y: f64,
    elapsed_ms: f64,
    thresholds: &GestureThresholds,
) -> Option<SwipeDirection> {
    if elapsed_ms > thresholds.max_duration_ms {
        return None;
    }
    if dist_x.abs() < thresholds.min_distance || dist_y.abs() > thresholds.max_cross_axis_drift {
        return None;
    }
    if dist_x > 0.0 {
        Some(SwipeDirection::Right)
    } else if dist_x < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Slide-index state machine plus swipe-gesture recognizer.
///
/// Owns the active-slide index, tracks at most one pointer gesture at a
/// time, and reports every transition to the injected sink. All operations
/// are synchronous and none returns a recoverable error.
pub struct SwipeCarousel {
    current_slide: usize,
    total_slides: usize,
    thresholds: GestureThresholds,
    phase: GesturePhase,
    sink: Option<InteractionSink>,
}

impl SwipeCarousel {
    /// Create a carousel over `config.total_slides` slides.
    ///
    /// # Panics
    /// Panics if the configured slide count is zero.
    pub fn new(config: CarouselConfig, sink: Option<InteractionSink>) -> Self {
        assert!(config.total_slides > 0, "carousel needs at least one slide");
        Self {
            current_slide: 0,
            total_slides: config.total_slides,
            thresholds: config.thresholds,
            phase: GesturePhase::Idle,
            sink,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Move to the next slide, wrapping from the last slide to the first.
    pub fn advance(&mut self) {
        self.step_to(self.wrapped_next());
        self.report(InteractionLabel::Next);
    }

    /// Move to the previous slide, wrapping from the first slide to the last.
    pub fn retreat(&mut self) {
        self.step_to(self.wrapped_prev());
        self.report(InteractionLabel::Previous);
    }

    /// Jump to `index`.
    ///
    /// Out-of-range input is a programming error: the UI layer only ever
    /// supplies indices from the fixed set of indicator controls.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(
            index < self.total_slides,
            "go_to index {index} out of range for {} slides",
            self.total_slides
        );
        self.step_to(index);
        self.report(InteractionLabel::Goto);
    }

    /// Begin tracking a new gesture. A second start before a matching end
    /// overwrites the in-flight gesture; the stale one is never acted upon.
    pub fn on_gesture_start(&mut self, position: Point, time_ms: f64) {
        self.phase = GesturePhase::Tracking(GestureSample {
            start: position,
            start_time_ms: time_ms,
            dist_x: 0.0,
            dist_y: 0.0,
        });
    }

    /// Update the in-flight displacement. No-op while idle, which guards
    /// against spurious move events firing outside a recognized gesture.
    pub fn on_gesture_move(&mut self, position: Point) {
        if let GesturePhase::Tracking(sample) = &mut self.phase {
            sample.dist_x = position.x - sample.start.x;
            sample.dist_y = position.y - sample.start.y;
        }
    }

    /// Finalize the gesture and run the swipe classification. Returns the
    /// carousel to idle regardless of the outcome.
    pub fn on_gesture_end(&mut self, position: Point, time_ms: f64) {
        let sample = match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
            GesturePhase::Tracking(sample) => sample,
            GesturePhase::Idle => return,
        };

        let dist_x = position.x - sample.start.x;
        let dist_y = position.y - sample.start.y;
        let elapsed_ms = time_ms - sample.start_time_ms;

        match classify_swipe(dist_x, dist_y, elapsed_ms, &self.thresholds) {
            Some(SwipeDirection::Left) => {
                self.step_to(self.wrapped_next());
                self.report(InteractionLabel::SwipeLeft);
            }
            Some(SwipeDirection::Right) => {
                self.step_to(self.wrapped_prev());
                self.report(InteractionLabel::SwipeRight);
            }
            None => {
                debug!("gesture discarded: dx={dist_x:.1} dy={dist_y:.1} elapsed={elapsed_ms:.0}ms");
            }
        }
    }

    /// Signed displacement of the in-flight gesture, if any. Lets the view
    /// layer give live drag feedback without reaching into gesture state.
    pub fn drag_delta(&self) -> Option<(f64, f64)> {
        match self.phase {
            GesturePhase::Tracking(sample) => Some((sample.dist_x, sample.dist_y)),
            GesturePhase::Idle => None,
        }
    }

    /// Compute the view snapshot for the current slide.
    ///
    /// The previous button disables on the first slide and the next button
    /// on the last, even though `advance`/`retreat` and swipes wrap.
    pub fn render(&self) -> RenderFrame {
        RenderFrame {
            current_slide: self.current_slide,
            track_offset_pct: -(self.current_slide as i32) * 100,
            prev_disabled: self.current_slide == 0,
            next_disabled: self.current_slide == self.total_slides - 1,
        }
    }

    fn wrapped_next(&self) -> usize {
        (self.current_slide + 1) % self.total_slides
    }

    fn wrapped_prev(&self) -> usize {
        (self.current_slide + self.total_slides - 1) % self.total_slides
    }

    fn step_to(&mut self, index: usize) {
        debug!("slide {} -> {}", self.current_slide, index);
        self.current_slide = index;
    }

    fn report(&self, label: InteractionLabel) {
        if let Some(sink) = &self.sink {
            sink(InteractionReport {
                label,
                slide_number: self.current_slide as u32 + 1,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn thresholds() -> GestureThresholds {
        GestureThresholds {
            min_distance: 50.0,
            max_cross_axis_drift: 100.0,
            max_duration_ms: 300.0,
        }
    }

    fn carousel(total_slides: usize) -> SwipeCarousel {
        SwipeCarousel::new(CarouselConfig::new(total_slides), None)
    }

    /// Carousel wired to a sink that records every report.
    fn recording_carousel(
        total_slides: usize,
    ) -> (SwipeCarousel, Rc<RefCell<Vec<InteractionReport>>>) {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let reports = reports.clone();
            Rc::new(move |report| reports.borrow_mut().push(report)) as InteractionSink
        };
        let carousel = SwipeCarousel::new(CarouselConfig::new(total_slides), Some(sink));
        (carousel, reports)
    }

    /// Drive a full down-move-up cycle ending `(dx, dy)` away from the
    /// start after `elapsed_ms`.
    fn swipe(carousel: &mut SwipeCarousel, dx: f64, dy: f64, elapsed_ms: f64) {
        carousel.on_gesture_start(Point::new(200.0, 300.0), 1_000.0);
        carousel.on_gesture_move(Point::new(200.0 + dx / 2.0, 300.0 + dy / 2.0));
        carousel.on_gesture_end(Point::new(200.0 + dx, 300.0 + dy), 1_000.0 + elapsed_ms);
    }

    #[test]
    fn test_advance_wraps_modulo_total() {
        let mut c = carousel(4);
        for n in 1..=9 {
            c.advance();
            assert_eq!(c.current_slide(), n % 4);
        }
    }

    #[test]
    fn test_retreat_wraps_non_negative() {
        let mut c = carousel(4);
        c.retreat();
        assert_eq!(c.current_slide(), 3);
        for expected in [2, 1, 0, 3, 2] {
            c.retreat();
            assert_eq!(c.current_slide(), expected);
        }
    }

    #[test]
    fn test_go_to_sets_exact_index() {
        let mut c = carousel(4);
        c.go_to(2);
        assert_eq!(c.current_slide(), 2);
        c.advance();
        c.go_to(2);
        assert_eq!(c.current_slide(), 2);
        c.go_to(0);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn test_classify_left_swipe() {
        assert_eq!(
            classify_swipe(-60.0, 10.0, 200.0, &thresholds()),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_classify_right_swipe() {
        assert_eq!(
            classify_swipe(60.0, 10.0, 200.0, &thresholds()),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn test_classify_rejects_short_distance() {
        assert_eq!(classify_swipe(30.0, 5.0, 200.0, &thresholds()), None);
    }

    #[test]
    fn test_classify_rejects_slow_gesture() {
        assert_eq!(classify_swipe(-60.0, 10.0, 400.0, &thresholds()), None);
    }

    #[test]
    fn test_classify_rejects_excessive_drift() {
        assert_eq!(classify_swipe(-60.0, 150.0, 200.0, &thresholds()), None);
    }

    #[test]
    fn test_classify_rejects_zero_horizontal_delta() {
        // A purely vertical flick never changes slides, even with the
        // distance threshold lowered to zero.
        let mut t = thresholds();
        t.min_distance = 0.0;
        assert_eq!(classify_swipe(0.0, 80.0, 100.0, &t), None);
    }

    #[test]
    fn test_left_swipe_advances_once_with_gesture_label() {
        let (mut c, reports) = recording_carousel(4);
        swipe(&mut c, -60.0, 10.0, 200.0);
        assert_eq!(c.current_slide(), 1);
        let reports = reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].label, InteractionLabel::SwipeLeft);
        assert_eq!(reports[0].slide_number, 2);
    }

    #[test]
    fn test_right_swipe_retreats_once_with_gesture_label() {
        let (mut c, reports) = recording_carousel(4);
        c.go_to(2);
        reports.borrow_mut().clear();
        swipe(&mut c, 60.0, 10.0, 200.0);
        assert_eq!(c.current_slide(), 1);
        let reports = reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].label, InteractionLabel::SwipeRight);
        assert_eq!(reports[0].slide_number, 2);
    }

    #[test]
    fn test_unclassified_gesture_changes_nothing() {
        let (mut c, reports) = recording_carousel(4);
        swipe(&mut c, 30.0, 5.0, 200.0);
        assert_eq!(c.current_slide(), 0);
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_gesture_state_resets_after_end() {
        let mut c = carousel(4);
        swipe(&mut c, -60.0, 10.0, 200.0);
        // The gesture is consumed: stray moves and a second end are inert.
        c.on_gesture_move(Point::new(0.0, 0.0));
        assert_eq!(c.drag_delta(), None);
        c.on_gesture_end(Point::new(0.0, 0.0), 2_000.0);
        assert_eq!(c.current_slide(), 1);
    }

    #[test]
    fn test_move_while_idle_is_noop() {
        let mut c = carousel(4);
        c.on_gesture_move(Point::new(500.0, 500.0));
        assert_eq!(c.drag_delta(), None);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn test_restart_overwrites_inflight_gesture() {
        let mut c = carousel(4);
        c.on_gesture_start(Point::new(0.0, 0.0), 0.0);
        c.on_gesture_move(Point::new(-80.0, 0.0));
        // Pointer re-entered: the stale leftward gesture must not fire.
        c.on_gesture_start(Point::new(100.0, 0.0), 1_000.0);
        c.on_gesture_end(Point::new(160.0, 10.0), 1_200.0);
        assert_eq!(c.current_slide(), 3);
    }

    #[test]
    fn test_drag_delta_tracks_moves() {
        let mut c = carousel(4);
        c.on_gesture_start(Point::new(100.0, 100.0), 0.0);
        assert_eq!(c.drag_delta(), Some((0.0, 0.0)));
        c.on_gesture_move(Point::new(70.0, 110.0));
        assert_eq!(c.drag_delta(), Some((-30.0, 10.0)));
    }

    #[test]
    fn test_render_frame_offsets_and_button_states() {
        let mut c = carousel(3);
        let frame = c.render();
        assert_eq!(frame.track_offset_pct, 0);
        assert!(frame.prev_disabled);
        assert!(!frame.next_disabled);

        c.advance();
        let frame = c.render();
        assert_eq!(frame.track_offset_pct, -100);
        assert!(!frame.prev_disabled);
        assert!(!frame.next_disabled);

        c.advance();
        let frame = c.render();
        assert_eq!(frame.track_offset_pct, -200);
        assert!(!frame.prev_disabled);
        assert!(frame.next_disabled);
    }

    #[test]
    fn test_generic_labels_and_one_indexed_slide_numbers() {
        let (mut c, reports) = recording_carousel(4);
        c.advance();
        c.retreat();
        c.go_to(3);
        let reports = reports.borrow();
        let labels: Vec<_> = reports.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["next", "previous", "goto"]);
        let slides: Vec<_> = reports.iter().map(|r| r.slide_number).collect();
        assert_eq!(slides, [2, 1, 4]);
    }

    #[test]
    fn test_missing_sink_is_safe() {
        let mut c = carousel(2);
        c.advance();
        swipe(&mut c, 60.0, 0.0, 100.0);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn test_zero_slides_is_a_construction_error() {
        let _ = carousel(0);
    }
}
