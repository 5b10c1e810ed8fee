use yew::prelude::*;

use crate::state::scroll::Percent;

#[derive(Properties, PartialEq)]
pub struct DecorationLayerProps {
    /// Vertical shift of the whole layer, driven by scroll progress.
    pub offset: Percent,
}

/// Two blurred blobs drifting behind the page.
#[function_component(DecorationLayer)]
pub fn decoration_layer(props: &DecorationLayerProps) -> Html {
    let style = format!("transform: translateY({});", props.offset);

    html! {
        <div class="decoration-layer" style={style} aria-hidden="true">
            <style>
                {r#"
                .decoration-layer {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                    will-change: transform;
                }
                .blob {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    opacity: 0.3;
                }
                .blob-red {
                    top: 5rem;
                    right: 5rem;
                    width: 8rem;
                    height: 8rem;
                    background: #fee2e2;
                    animation: blob-pulse 20s linear infinite;
                }
                .blob-sky {
                    bottom: 5rem;
                    left: 5rem;
                    width: 10rem;
                    height: 10rem;
                    background: #e0f2fe;
                    animation: blob-pulse-reverse 25s linear infinite;
                }
                @keyframes blob-pulse {
                    0% { transform: scale(1) rotate(0deg); }
                    50% { transform: scale(1.2) rotate(180deg); }
                    100% { transform: scale(1) rotate(360deg); }
                }
                @keyframes blob-pulse-reverse {
                    0% { transform: scale(1.2) rotate(360deg); }
                    50% { transform: scale(1) rotate(180deg); }
                    100% { transform: scale(1.2) rotate(0deg); }
                }
                "#}
            </style>
            <div class="blob blob-red"></div>
            <div class="blob blob-sky"></div>
        </div>
    }
}
