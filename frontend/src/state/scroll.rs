use std::fmt;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::dom::{self, DomError};

/// Fraction of the document scrolled, 0 at the top and 1 at the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);
    #[cfg(test)]
    pub const BOTTOM: ScrollProgress = ScrollProgress(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        ScrollProgress(value.clamp(0.0, 1.0))
    }

    /// Overscroll (rubber banding) can report positions outside the
    /// scrollable range, so the result is clamped.
    pub fn from_metrics(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let scrollable = scroll_height - viewport_height;
        if scrollable <= 0.0 {
            return Self::TOP;
        }
        Self::new(scroll_top / scrollable)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A length expressed in percent of the element it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.3}", self.0);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        let text = if text == "-0" { "0" } else { text };
        write!(f, "{}%", text)
    }
}

/// Straight-line interpolation from an input range onto an output range.
/// Inputs outside the input range extrapolate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTransform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl LinearTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 {
            return out_start;
        }
        out_start + (value - in_start) / span * (out_end - out_start)
    }
}

pub const DECORATION_OFFSET: LinearTransform = LinearTransform::new((0.0, 1.0), (0.0, 30.0));

pub fn decoration_offset(progress: ScrollProgress) -> Percent {
    Percent(DECORATION_OFFSET.apply(progress.value()))
}

fn read_progress() -> Result<ScrollProgress, DomError> {
    let window = dom::window()?;
    let root = dom::document_element()?;
    let scroll_top = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or_default();
    Ok(ScrollProgress::from_metrics(
        scroll_top,
        f64::from(root.scroll_height()),
        viewport_height,
    ))
}

/// Document scroll progress, re-sampled on scroll and resize.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = use_state_eq(ScrollProgress::default);

    let sample: Rc<dyn Fn()> = {
        let progress = progress.clone();
        Rc::new(move || match read_progress() {
            Ok(value) => progress.set(value),
            Err(err) => warn!("could not sample scroll progress: {}", err),
        })
    };

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                sample();
                || ()
            },
            (),
        );
    }
    {
        let sample = sample.clone();
        use_event_with_window("scroll", move |_: Event| sample());
    }
    use_event_with_window("resize", move |_: Event| sample());

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_endpoints() {
        assert_eq!(decoration_offset(ScrollProgress::TOP).to_string(), "0%");
        assert_eq!(decoration_offset(ScrollProgress::BOTTOM).to_string(), "30%");
    }

    #[test]
    fn offset_is_monotonic() {
        let mut previous = decoration_offset(ScrollProgress::TOP);
        for step in 1..=100 {
            let current = decoration_offset(ScrollProgress::new(step as f64 / 100.0));
            assert!(current >= previous, "{} < {} at step {}", current, previous, step);
            previous = current;
        }
    }

    #[test]
    fn half_way_down_is_fifteen_percent() {
        let frames: Vec<String> = [0.0, 0.25, 0.5]
            .iter()
            .map(|p| decoration_offset(ScrollProgress::new(*p)).to_string())
            .collect();
        assert_eq!(frames, ["0%", "7.5%", "15%"]);
    }

    #[test]
    fn from_metrics_clamps_overscroll() {
        assert_eq!(ScrollProgress::from_metrics(-40.0, 3000.0, 1000.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::from_metrics(2100.0, 3000.0, 1000.0), ScrollProgress::BOTTOM);
        assert_eq!(ScrollProgress::from_metrics(500.0, 3000.0, 1000.0).value(), 0.25);
    }

    #[test]
    fn unscrollable_document_is_at_top() {
        assert_eq!(ScrollProgress::from_metrics(0.0, 800.0, 900.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::TOP);
    }

    #[test]
    fn transform_does_not_clamp() {
        assert_eq!(DECORATION_OFFSET.apply(2.0), 60.0);
        assert_eq!(LinearTransform::new((1.0, 1.0), (5.0, 9.0)).apply(3.0), 5.0);
    }

    #[test]
    fn percent_formatting_trims_zeros() {
        assert_eq!(Percent(12.3456).to_string(), "12.346%");
        assert_eq!(Percent(-0.0001).to_string(), "0%");
        assert_eq!(Percent(4.10).to_string(), "4.1%");
    }
}
