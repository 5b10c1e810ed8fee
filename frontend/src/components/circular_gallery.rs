use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use stylist::yew::styled_component;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::carousel::{GalleryAction, GalleryState, StripLayout, Viewport};
use crate::content::PhotoEntry;
use crate::dom::DomError;

const FRAME_MS: u32 = 16;
/// Quiet time after the last wheel event before snapping to an item.
const WHEEL_SETTLE_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct CircularGalleryProps {
    pub photos: &'static [PhotoEntry],
    #[prop_or(3.0)]
    pub bend: f64,
    /// Corner radius as a fraction of the item size.
    #[prop_or(0.05)]
    pub border_radius: f64,
    #[prop_or(2.0)]
    pub scroll_speed: f64,
    #[prop_or(600)]
    pub height: u32,
}

fn measure(node: &NodeRef) -> Result<Viewport, DomError> {
    let element = node
        .cast::<Element>()
        .ok_or(DomError::MissingElement("circular gallery"))?;
    Ok(Viewport::new(
        f64::from(element.client_width()),
        f64::from(element.client_height()),
    ))
}

/// Endless strip of photos bent along an arc. Scrolls with the mouse wheel
/// anywhere on the page and with pointer drags on the strip itself.
#[styled_component(CircularGallery)]
pub fn circular_gallery(props: &CircularGalleryProps) -> Html {
    let node = use_node_ref();
    let gallery = use_reducer({
        let scroll_speed = props.scroll_speed;
        move || GalleryState::new(scroll_speed)
    });
    let wheel_settle = use_mut_ref(|| None::<Timeout>);

    let resize: Rc<dyn Fn()> = {
        let node = node.clone();
        let dispatcher = gallery.dispatcher();
        Rc::new(move || match measure(&node) {
            Ok(viewport) => dispatcher.dispatch(GalleryAction::Resize(viewport)),
            Err(err) => warn!("could not measure gallery: {}", err),
        })
    };

    {
        let resize = resize.clone();
        let dispatcher = gallery.dispatcher();
        use_effect_with_deps(
            move |_| {
                resize();
                let frames = Interval::new(FRAME_MS, move || dispatcher.dispatch(GalleryAction::Tick));
                move || drop(frames)
            },
            (),
        );
    }

    use_event_with_window("resize", move |_: Event| resize());

    {
        let dispatcher = gallery.dispatcher();
        let wheel_settle = wheel_settle.clone();
        use_event_with_window("wheel", move |e: WheelEvent| {
            dispatcher.dispatch(GalleryAction::Wheel(e.delta_y()));
            let dispatcher = dispatcher.clone();
            // replacing the old timeout cancels it
            *wheel_settle.borrow_mut() = Some(Timeout::new(WHEEL_SETTLE_MS, move || {
                dispatcher.dispatch(GalleryAction::Snap)
            }));
        });
    }

    let on_pointer_down = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |e: PointerEvent| {
            dispatcher.dispatch(GalleryAction::Press(f64::from(e.client_x())))
        })
    };
    let on_pointer_move = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |e: PointerEvent| {
            dispatcher.dispatch(GalleryAction::Drag(f64::from(e.client_x())))
        })
    };
    let on_pointer_release = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |_: PointerEvent| dispatcher.dispatch(GalleryAction::Release))
    };

    let layout = StripLayout {
        viewport: gallery.viewport,
        count: props.photos.len(),
        bend: props.bend,
    };
    let item_width = gallery.viewport.item_width();
    let item_height = gallery.viewport.item_height();
    let radius = props.border_radius * 100.0;

    let band = css!(
        r#"
        position: relative;
        height: ${height}px;
        overflow: hidden;
        cursor: grab;
        touch-action: pan-y;
        user-select: none;

        &.dragging {
            cursor: grabbing;
        }

        & > .strip-item {
            position: absolute;
            top: 50%;
            left: 50%;
            overflow: hidden;
            background: #e5e7eb;
            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
            will-change: transform;
        }

        & > .strip-item > img {
            width: 100%;
            height: 100%;
            object-fit: cover;
            pointer-events: none;
        }
        "#,
        height = props.height,
    );

    html! {
        <div
            ref={node}
            class={classes!(band, "circular-gallery", gallery.track.is_dragging().then_some("dragging"))}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_release.clone()}
            onpointerleave={on_pointer_release}
        >
            {
                if gallery.viewport.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>{ for props.photos.iter().enumerate().map(|(index, photo)| {
                            let placement = layout.place(index, gallery.track.current);
                            let style = format!(
                                "width: {:.2}px; height: {:.2}px; border-radius: {}%; transform: translate(-50%, -50%) translate({:.2}px, {:.2}px) rotate({:.4}rad);",
                                item_width, item_height, radius, placement.x, placement.y, placement.rotation,
                            );
                            html! {
                                <div key={index} class="strip-item" style={style}>
                                    <img src={photo.path} alt={format!("Gallery photo {}", index + 1)} draggable="false" />
                                </div>
                            }
                        }) }</>
                    }
                }
            }
        </div>
    }
}
