use yew::prelude::*;

use crate::motion::transition::{reveal_style, Motion, Transition, Trigger};
use crate::motion::viewport::use_entrance;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: Motion,
    #[prop_or(Transition::SECTION)]
    pub transition: Transition,
    #[prop_or(Trigger::Viewport)]
    pub trigger: Trigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a block that plays an entrance animation once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_entrance(node.clone(), props.trigger);
    let style = reveal_style(props.motion, props.transition, visible);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
