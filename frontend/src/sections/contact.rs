use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{anchor, ContactKind, SocialNetwork, CONTACT_DETAILS, SOCIAL_LINKS};
use crate::motion::transition::Motion;

fn contact_badge(kind: ContactKind) -> (IconKind, &'static str) {
    match kind {
        ContactKind::Email => (IconKind::Mail, "badge-red"),
        ContactKind::Phone => (IconKind::Phone, "badge-sky"),
        ContactKind::Location => (IconKind::MapPin, "badge-blend"),
    }
}

fn social_badge(network: SocialNetwork) -> (IconKind, &'static str) {
    match network {
        SocialNetwork::Facebook => (IconKind::Facebook, "badge-facebook"),
        SocialNetwork::Instagram => (IconKind::Instagram, "badge-instagram"),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={anchor::CONTACT} class="section section-muted contact">
            <style>
                {r#"
                .contact {
                    padding-left: 1.25rem;
                    padding-right: 1.25rem;
                }
                .contact-body {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact-grid {
                    display: grid;
                    gap: 3rem;
                }
                .contact-grid h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .contact-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .contact-item + .contact-item {
                    margin-top: 1.5rem;
                }
                .contact-label {
                    font-weight: 500;
                    color: #111827;
                }
                .contact-value {
                    color: #4b5563;
                }
                .badge {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    color: #ffffff;
                }
                .badge .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .badge-red { background: #991b1b; }
                .badge-sky { background: #0284c7; }
                .badge-blend { background: linear-gradient(to right, #991b1b, #0284c7); }
                .badge-facebook { background: #2563eb; }
                .badge-instagram { background: #db2777; }
                .social-links {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .social-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1rem;
                    background: #ffffff;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: box-shadow 0.2s;
                }
                .social-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .social-card .badge {
                    width: 2.5rem;
                    height: 2.5rem;
                }
                .social-card .badge .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .social-tagline {
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                @media (min-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr 1fr; }
                    .social-links { flex-direction: row; }
                    .social-card { width: 50%; }
                }
                "#}
            </style>
            <div class="container">
                <SectionHeading
                    title="Let's Connect"
                    blurb={Some("I'd love to hear from you! Whether you want to chat about visual storytelling, Nepal, or just say hello - feel free to reach out.")}
                />
                <Reveal motion={Motion::FadeUp(50.0)} class="contact-body">
                    <div class="contact-grid">
                        <div>
                            <h3>{"Get in Touch"}</h3>
                            { for CONTACT_DETAILS.iter().map(|detail| {
                                let (icon, badge) = contact_badge(detail.kind);
                                html! {
                                    <div class="contact-item">
                                        <div class={classes!("badge", badge)}><Icon kind={icon} /></div>
                                        <div>
                                            <p class="contact-label">{ detail.kind.label() }</p>
                                            <p class="contact-value">{ detail.value }</p>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                        <div>
                            <h3>{"Follow Me"}</h3>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| {
                                    let (icon, badge) = social_badge(link.network);
                                    html! {
                                        <a href={link.url} class="social-card" target="_blank" rel="noopener noreferrer">
                                            <div class={classes!("badge", badge)}><Icon kind={icon} /></div>
                                            <div>
                                                <p class="contact-label">{ link.network.name() }</p>
                                                <p class="social-tagline">{ link.tagline }</p>
                                            </div>
                                        </a>
                                    }
                                }) }
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
