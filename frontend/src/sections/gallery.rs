use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{anchor, PhotoEntry};
use crate::motion::transition::{Motion, Transition};

const TILE_STAGGER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub photos: &'static [PhotoEntry],
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <section id={anchor::GALLERY} class="section section-muted">
            <style>
                {r#"
                .photo-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                }
                .photo-tile {
                    position: relative;
                    aspect-ratio: 1 / 1;
                    border-radius: 0.75rem;
                    overflow: hidden;
                }
                .photo-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .photo-tile:hover img {
                    transform: scale(1.1);
                }
                .photo-shade {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.3), transparent);
                    transition: opacity 0.3s;
                }
                .photo-tile:hover .photo-shade {
                    opacity: 1;
                }
                @media (min-width: 768px) {
                    .photo-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                }
                @media (min-width: 1024px) {
                    .photo-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
                }
                "#}
            </style>
            <div class="container">
                <SectionHeading
                    title="Personal Moments"
                    blurb={Some("A glimpse into my life beyond work - moments that matter, places I've been, and memories I cherish.")}
                />
                <div class="photo-grid">
                    { for props.photos.iter().enumerate().map(|(index, photo)| html! {
                        <Reveal
                            key={index}
                            motion={Motion::ScaleIn(0.8)}
                            transition={Transition::TILE.staggered(index as u32, TILE_STAGGER_MS)}
                        >
                            <div class="photo-tile">
                                <img src={photo.path} alt={format!("Personal photo {}", index + 1)} width="300" height="300" loading="lazy" />
                                <div class="photo-shade"></div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
