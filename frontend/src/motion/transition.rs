/// Where an element starts before its entrance animation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    FadeUp(f64),
    FadeDown(f64),
    SlideFromLeft(f64),
    SlideFromRight(f64),
    ScaleIn(f64),
}

impl Motion {
    fn hidden_transform(self) -> String {
        match self {
            Motion::FadeUp(px) => format!("translateY({}px)", px),
            Motion::FadeDown(px) => format!("translateY({}px)", -px),
            Motion::SlideFromLeft(px) => format!("translateX({}px)", -px),
            Motion::SlideFromRight(px) => format!("translateX({}px)", px),
            Motion::ScaleIn(from) => format!("scale({})", from),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    /// Section blocks.
    pub const SECTION: Transition = Transition::new(800, 0);
    /// Gallery tiles.
    pub const TILE: Transition = Transition::new(600, 0);
    /// Nav bar items.
    pub const QUICK: Transition = Transition::new(300, 0);

    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self { duration_ms, delay_ms }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms: self.delay_ms + delay_ms, ..self }
    }

    /// Adds `index * step_ms` to the delay so siblings enter one after another.
    pub const fn staggered(self, index: u32, step_ms: u32) -> Self {
        self.delayed(index * step_ms)
    }
}

/// What starts an entrance animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// One frame after the element is mounted.
    Mount,
    /// The first time the element scrolls into view.
    Viewport,
}

pub fn reveal_style(motion: Motion, transition: Transition, visible: bool) -> String {
    if visible {
        let Transition { duration_ms, delay_ms } = transition;
        format!(
            "opacity: 1; transform: none; transition: opacity {d}ms ease-out {l}ms, transform {d}ms ease-out {l}ms;",
            d = duration_ms,
            l = delay_ms,
        )
    } else {
        format!("opacity: 0; transform: {};", motion.hidden_transform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_styles_offset_the_element() {
        assert_eq!(
            reveal_style(Motion::FadeUp(50.0), Transition::SECTION, false),
            "opacity: 0; transform: translateY(50px);"
        );
        assert_eq!(
            reveal_style(Motion::SlideFromLeft(50.0), Transition::SECTION, false),
            "opacity: 0; transform: translateX(-50px);"
        );
        assert_eq!(
            reveal_style(Motion::ScaleIn(0.8), Transition::TILE, false),
            "opacity: 0; transform: scale(0.8);"
        );
    }

    #[test]
    fn visible_style_carries_the_timing() {
        let style = reveal_style(Motion::FadeDown(20.0), Transition::new(800, 200), true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 800ms ease-out 200ms"));
        assert!(style.contains("transform 800ms ease-out 200ms"));
    }

    #[test]
    fn stagger_adds_per_index_delay() {
        let delays: Vec<u32> = (0..4)
            .map(|index| Transition::TILE.staggered(index, 100).delay_ms)
            .collect();
        assert_eq!(delays, [0, 100, 200, 300]);
        assert_eq!(Transition::SECTION.delayed(200).staggered(2, 100).delay_ms, 400);
    }
}
