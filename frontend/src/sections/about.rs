use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{anchor, PROFILE};
use crate::motion::transition::Motion;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={anchor::ABOUT} class="section section-light">
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                .about-story > * + * {
                    margin-top: 1.5rem;
                }
                .about-story h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #111827;
                }
                .about-story p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .about-origin {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding-top: 1rem;
                    color: #6b7280;
                    font-size: 1.125rem;
                }
                .about-origin .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #991b1b;
                }
                .about-card {
                    position: relative;
                    width: 100%;
                    max-width: 24rem;
                    aspect-ratio: 1 / 1;
                    margin: 0 auto;
                    border-radius: 1rem;
                    overflow: hidden;
                    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                }
                .about-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-card-tint {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top right, rgba(153, 27, 27, 0.1), rgba(2, 132, 199, 0.1));
                }
                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <SectionHeading title="Who I Am" />
                <div class="about-grid">
                    <Reveal motion={Motion::SlideFromLeft(50.0)} class="about-story">
                        <h3>{"My Story"}</h3>
                        { for PROFILE.story.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                        <div class="about-origin">
                            <Icon kind={IconKind::MapPin} />
                            <span>{ PROFILE.origin }</span>
                        </div>
                    </Reveal>
                    <Reveal motion={Motion::SlideFromRight(50.0)}>
                        <div class="about-card">
                            <img src={PROFILE.portrait} alt={format!("About {}", PROFILE.first_name)} width="500" height="500" />
                            <div class="about-card-tint"></div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
