use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::transition::Motion;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: &'static str,
    #[prop_or_default]
    pub blurb: Option<&'static str>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal motion={Motion::FadeUp(50.0)} class="section-heading">
            <h2 class="section-title">{ props.title }</h2>
            <div class="section-rule"></div>
            {
                if let Some(blurb) = props.blurb {
                    html! { <p class="section-blurb">{ blurb }</p> }
                } else {
                    html! {}
                }
            }
        </Reveal>
    }
}
