//! Layout and scrolling for the circular gallery strip.
//!
//! Distances are in CSS pixels except where a name says `units`. A unit is the
//! world unit of a 45 degree camera placed 20 units from the strip, so the
//! band height always spans `view_height_units()` of them.

use std::rc::Rc;

use yew::prelude::*;

const CAMERA_FOV_DEG: f64 = 45.0;
const CAMERA_DISTANCE: f64 = 20.0;
const ITEM_HEIGHT_RATIO: f64 = 900.0 / 1500.0;
const ITEM_WIDTH_RATIO: f64 = 700.0 / 1500.0;
const ITEM_PADDING_UNITS: f64 = 2.0;

/// Fraction of the remaining distance covered per tick.
pub const EASE: f64 = 0.05;
/// Closer than this and the track jumps onto its target.
pub const SETTLE_EPSILON: f64 = 0.01;
const WHEEL_FACTOR: f64 = 0.2;
const DRAG_FACTOR: f64 = 0.025;

pub fn view_height_units() -> f64 {
    2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_DISTANCE
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn px_per_unit(&self) -> f64 {
        self.height / view_height_units()
    }

    pub fn item_width(&self) -> f64 {
        self.height * ITEM_WIDTH_RATIO
    }

    pub fn item_height(&self) -> f64 {
        self.height * ITEM_HEIGHT_RATIO
    }

    /// Distance between the centers of neighbouring items.
    pub fn stride(&self) -> f64 {
        self.item_width() + ITEM_PADDING_UNITS * self.px_per_unit()
    }
}

/// Folds `position` into `[-total / 2, total / 2)`.
pub fn wrap(position: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return position;
    }
    (position + total / 2.0).rem_euclid(total) - total / 2.0
}

/// Drop and tilt of a point `x` px from the center on an arc whose sagitta
/// over `half_width` is `sagitta` px. Both are zero for a flat strip.
pub fn arc(x: f64, half_width: f64, sagitta: f64) -> (f64, f64) {
    if sagitta <= 0.0 || half_width <= 0.0 {
        return (0.0, 0.0);
    }
    let radius = (half_width * half_width + sagitta * sagitta) / (2.0 * sagitta);
    let reach = x.abs().min(half_width);
    let drop = radius - (radius * radius - reach * reach).sqrt();
    let tilt = (reach / radius).asin();
    (drop, tilt)
}

/// Where one item is drawn, relative to the band center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    /// Positive is down.
    pub y: f64,
    /// Radians, positive is clockwise.
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripLayout {
    pub viewport: Viewport,
    pub count: usize,
    /// Arc sagitta in units. Positive bends the ends down, negative bends them up.
    pub bend: f64,
}

impl StripLayout {
    pub fn total_width(&self) -> f64 {
        self.viewport.stride() * self.count as f64
    }

    pub fn place(&self, index: usize, scroll: f64) -> Placement {
        let x = wrap(index as f64 * self.viewport.stride() - scroll, self.total_width());
        let sagitta = self.bend.abs() * self.viewport.px_per_unit();
        let (drop, tilt) = arc(x, self.viewport.width / 2.0, sagitta);
        let side = if x < 0.0 { -1.0 } else { 1.0 };
        if self.bend >= 0.0 {
            Placement { x, y: drop, rotation: side * tilt }
        } else {
            Placement { x, y: -drop, rotation: -side * tilt }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    start_x: f64,
    start_scroll: f64,
}

/// Eased scroll position of the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTrack {
    pub current: f64,
    pub target: f64,
    drag: Option<Drag>,
}

impl ScrollTrack {
    pub fn tick(self) -> Self {
        if self.is_settled() {
            return self;
        }
        let mut current = self.current + (self.target - self.current) * EASE;
        if (self.target - current).abs() < SETTLE_EPSILON {
            current = self.target;
        }
        Self { current, ..self }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// One wheel notch moves the target a fixed step in the wheel's direction.
    pub fn wheel(self, delta: f64, step: f64) -> Self {
        if delta == 0.0 {
            return self;
        }
        Self { target: self.target + delta.signum() * step, ..self }
    }

    pub fn press(self, x: f64) -> Self {
        Self {
            drag: Some(Drag { start_x: x, start_scroll: self.current }),
            ..self
        }
    }

    /// `gain` converts pointer travel into scroll distance.
    pub fn drag_to(self, x: f64, gain: f64) -> Self {
        match self.drag {
            Some(drag) => Self {
                target: drag.start_scroll + (drag.start_x - x) * gain,
                ..self
            },
            None => self,
        }
    }

    pub fn release(self, stride: f64) -> Self {
        if self.drag.is_none() {
            return self;
        }
        Self { drag: None, ..self }.snap(stride)
    }

    /// Moves the target onto the nearest whole item.
    pub fn snap(self, stride: f64) -> Self {
        if stride <= 0.0 {
            return self;
        }
        Self { target: (self.target / stride).round() * stride, ..self }
    }

    fn rescale(self, factor: f64) -> Self {
        Self {
            current: self.current * factor,
            target: self.target * factor,
            drag: self.drag.map(|drag| Drag {
                start_scroll: drag.start_scroll * factor,
                ..drag
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryAction {
    Tick,
    Resize(Viewport),
    Wheel(f64),
    Press(f64),
    Drag(f64),
    Release,
    Snap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryState {
    pub track: ScrollTrack,
    pub viewport: Viewport,
    /// Scroll speed in units per wheel step.
    pub scroll_speed: f64,
}

impl GalleryState {
    pub fn new(scroll_speed: f64) -> Self {
        Self {
            track: ScrollTrack::default(),
            viewport: Viewport::default(),
            scroll_speed,
        }
    }

    fn step(&self, action: GalleryAction) -> Self {
        let stride = self.viewport.stride();
        let px_per_unit = self.viewport.px_per_unit();
        let track = match action {
            GalleryAction::Tick => self.track.tick(),
            GalleryAction::Wheel(delta) => self
                .track
                .wheel(delta, self.scroll_speed * WHEEL_FACTOR * px_per_unit),
            GalleryAction::Press(x) => self.track.press(x),
            GalleryAction::Drag(x) => self
                .track
                .drag_to(x, self.scroll_speed * DRAG_FACTOR * px_per_unit),
            GalleryAction::Release => self.track.release(stride),
            GalleryAction::Snap => self.track.snap(stride),
            GalleryAction::Resize(viewport) => {
                let old_stride = stride;
                let new_stride = viewport.stride();
                let track = if old_stride > 0.0 && new_stride > 0.0 {
                    self.track.rescale(new_stride / old_stride)
                } else {
                    self.track
                };
                return Self { track, viewport, ..*self };
            }
        };
        Self { track, ..*self }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.step(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn flat_strip_has_no_drop_or_tilt() {
        let layout = StripLayout { viewport: Viewport::new(1200.0, 600.0), count: 10, bend: 0.0 };
        for index in 0..10 {
            let placement = layout.place(index, 0.0);
            assert_eq!(placement.y, 0.0);
            assert_eq!(placement.rotation, 0.0);
        }
    }

    #[test]
    fn arc_reaches_the_sagitta_at_the_edge() {
        let (drop, tilt) = arc(600.0, 600.0, 80.0);
        assert!(close(drop, 80.0));
        assert!(tilt > 0.0);
        // clamped past the edge
        assert_eq!(arc(900.0, 600.0, 80.0), arc(600.0, 600.0, 80.0));
        assert_eq!(arc(0.0, 600.0, 80.0), (0.0, 0.0));
    }

    #[test]
    fn arc_drop_grows_away_from_center() {
        let mut previous = 0.0;
        for step in 1..=12 {
            let (drop, _) = arc(step as f64 * 50.0, 600.0, 80.0);
            assert!(drop > previous);
            previous = drop;
        }
    }

    #[test]
    fn bend_is_symmetric_and_its_sign_mirrors() {
        let viewport = Viewport::new(1200.0, 600.0);
        let down = StripLayout { viewport, count: 10, bend: 3.0 };
        let up = StripLayout { bend: -3.0, ..down };
        let stride = viewport.stride();

        let right = down.place(1, 0.0);
        let left = down.place(9, 0.0);
        assert!(close(right.x, stride));
        assert!(close(left.x, -stride));
        assert!(close(right.y, left.y));
        assert!(right.y > 0.0);
        assert!(close(right.rotation, -left.rotation));
        assert!(right.rotation > 0.0);

        let mirrored = up.place(1, 0.0);
        assert!(close(mirrored.y, -right.y));
        assert!(close(mirrored.rotation, -right.rotation));
    }

    #[test]
    fn wrap_is_periodic_and_centered() {
        let total = 1000.0;
        for raw in [-2600.0, -501.0, -500.0, 0.0, 499.0, 500.0, 1700.0] {
            let folded = wrap(raw, total);
            assert!((-500.0..500.0).contains(&folded), "{} -> {}", raw, folded);
            assert!(close(wrap(raw + total, total), folded));
        }
    }

    #[test]
    fn scrolling_a_full_loop_returns_every_item() {
        let layout = StripLayout { viewport: Viewport::new(1200.0, 600.0), count: 10, bend: 3.0 };
        let loop_length = layout.total_width();
        for index in 0..10 {
            let start = layout.place(index, 0.0);
            let after = layout.place(index, loop_length);
            assert!(close(start.x, after.x));
        }
    }

    #[test]
    fn tick_converges_and_settles() {
        let mut track = ScrollTrack { target: 300.0, ..ScrollTrack::default() };
        let mut ticks = 0;
        while !track.is_settled() {
            let before = (track.target - track.current).abs();
            track = track.tick();
            assert!((track.target - track.current).abs() < before);
            ticks += 1;
            assert!(ticks < 1000, "never settled");
        }
        assert_eq!(track.current, 300.0);
    }

    #[test]
    fn wheel_moves_by_whole_steps() {
        let track = ScrollTrack::default().wheel(120.0, 10.0).wheel(3.0, 10.0);
        assert_eq!(track.target, 20.0);
        assert_eq!(track.wheel(-50.0, 10.0).target, 10.0);
        assert_eq!(track.wheel(0.0, 10.0), track);
    }

    #[test]
    fn drag_then_release_snaps_to_a_stride() {
        let track = ScrollTrack::default()
            .press(500.0)
            .drag_to(380.0, 1.5)
            .release(100.0);
        assert!(!track.is_dragging());
        assert_eq!(track.target, 200.0);

        let negative = ScrollTrack { target: -149.0, ..ScrollTrack::default() }.snap(100.0);
        assert_eq!(negative.target, -100.0);
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let track = ScrollTrack::default();
        assert_eq!(track.drag_to(10.0, 1.0), track);
        assert_eq!(track.release(100.0), track);
    }

    #[test]
    fn settled_tick_keeps_the_same_state() {
        let state = Rc::new(GalleryState::new(2.0));
        let next = state.clone().reduce(GalleryAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));
    }

    fn measured(scroll_speed: f64) -> GalleryState {
        GalleryState::new(scroll_speed).step(GalleryAction::Resize(Viewport::new(1200.0, 600.0)))
    }

    #[test]
    fn wheel_event_moves_a_fifth_of_the_speed_in_units() {
        let state = measured(2.0);
        let px_per_unit = state.viewport.px_per_unit();
        let down = state.step(GalleryAction::Wheel(120.0));
        assert!(close(down.track.target, 2.0 * 0.2 * px_per_unit));
        let back = down.step(GalleryAction::Wheel(-4.0));
        assert!(close(back.track.target, 0.0));
        // current only moves on ticks
        assert_eq!(down.track.current, 0.0);
    }

    #[test]
    fn drag_distance_scales_with_speed_in_units() {
        let state = measured(2.0);
        let px_per_unit = state.viewport.px_per_unit();
        let dragged = state
            .step(GalleryAction::Press(500.0))
            .step(GalleryAction::Drag(400.0));
        assert!(dragged.track.is_dragging());
        assert!(close(dragged.track.target, 100.0 * 2.0 * 0.025 * px_per_unit));

        let faster = measured(4.0)
            .step(GalleryAction::Press(500.0))
            .step(GalleryAction::Drag(600.0));
        assert!(close(faster.track.target, -100.0 * 4.0 * 0.025 * px_per_unit));
    }

    #[test]
    fn wheel_settle_snaps_onto_an_item() {
        let state = measured(2.0);
        let stride = state.viewport.stride();
        let mut wheeled = state;
        for _ in 0..7 {
            wheeled = wheeled.step(GalleryAction::Wheel(100.0));
        }
        let snapped = wheeled.step(GalleryAction::Snap);
        let items = snapped.track.target / stride;
        assert!(close(items, items.round()));
        assert!((snapped.track.target - wheeled.track.target).abs() <= stride / 2.0);
    }

    #[test]
    fn input_before_measuring_does_not_move_the_strip() {
        let state = GalleryState::new(2.0);
        assert_eq!(state.step(GalleryAction::Wheel(120.0)).track.target, 0.0);
        assert_eq!(state.step(GalleryAction::Snap), state);
    }

    #[test]
    fn resize_keeps_the_same_item_in_front() {
        let state = GalleryState::new(2.0).step(GalleryAction::Resize(Viewport::new(1200.0, 600.0)));
        let stride = state.viewport.stride();
        let state = GalleryState {
            track: ScrollTrack { current: stride * 3.0, target: stride * 3.0, drag: None },
            ..state
        };
        let resized = state.step(GalleryAction::Resize(Viewport::new(800.0, 400.0)));
        let new_stride = resized.viewport.stride();
        assert!(close(resized.track.current / new_stride, 3.0));
    }
}
