use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom::DomError;
use crate::motion::transition::Trigger;

/// Any visible pixel counts as entered.
pub const VIEWPORT_THRESHOLD: f64 = 0.0;

/// Delay before a `Trigger::Mount` entrance flips to visible, so the hidden
/// style is painted first and the transition has something to animate from.
const MOUNT_DELAY_MS: u32 = 16;

/// Edge-triggered latch over intersection observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnterOnce {
    threshold: f64,
    fired: bool,
}

impl EnterOnce {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, fired: false }
    }

    /// Returns `true` for the first observation that crosses the threshold
    /// and `false` for every other one.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if self.fired || !intersecting || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, threshold: f64, on_enter: Callback<()>) -> Result<Observation, DomError> {
    let mut latch = EnterOnce::new(threshold);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_enter.emit(());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(Observation { observer, _callback: callback })
}

/// Held by the effect until unmount; dropping it cancels whatever is pending.
enum Pending {
    Timer(Timeout),
    Observer(Observation),
    Nothing,
}

/// Becomes `true` once, when `trigger` fires for the element behind `node`,
/// and stays `true` afterwards.
#[hook]
pub fn use_entrance(node: NodeRef, trigger: Trigger) -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |(node, trigger): &(NodeRef, Trigger)| {
                let pending = match trigger {
                    Trigger::Mount => {
                        let entered = entered.clone();
                        Pending::Timer(Timeout::new(MOUNT_DELAY_MS, move || entered.set(true)))
                    }
                    Trigger::Viewport => {
                        let on_enter = {
                            let entered = entered.clone();
                            Callback::from(move |_| entered.set(true))
                        };
                        let observed = node
                            .cast::<Element>()
                            .ok_or(DomError::MissingElement("entrance target"))
                            .and_then(|element| observe_once(&element, VIEWPORT_THRESHOLD, on_enter));
                        match observed {
                            Ok(observation) => Pending::Observer(observation),
                            Err(err) => {
                                // never leave content hidden
                                warn!("viewport trigger unavailable, showing immediately: {}", err);
                                entered.set(true);
                                Pending::Nothing
                            }
                        }
                    }
                };
                move || drop(pending)
            },
            (node, trigger),
        );
    }

    *entered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut latch = EnterOnce::new(0.0);
        assert!(latch.observe(0.2, true));
        assert!(!latch.observe(0.9, true));
        assert!(!latch.observe(0.0, false));
        assert!(!latch.observe(1.0, true));
    }

    #[test]
    fn ignores_observations_outside_the_viewport() {
        let mut latch = EnterOnce::new(0.0);
        assert!(!latch.observe(0.0, false));
        assert!(!latch.observe(0.6, false));
        assert!(latch.observe(0.0, true));
    }

    #[test]
    fn waits_for_threshold() {
        let mut latch = EnterOnce::new(0.5);
        assert!(!latch.observe(0.3, true));
        assert!(!latch.observe(0.49, true));
        assert!(latch.observe(0.5, true));
        assert!(!latch.observe(0.8, true));
    }
}
