use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{anchor, timeline, TimelineCategory};
use crate::motion::transition::Motion;

#[derive(Properties, PartialEq)]
struct TimelineColumnProps {
    category: TimelineCategory,
}

#[function_component(TimelineColumn)]
fn timeline_column(props: &TimelineColumnProps) -> Html {
    let category = props.category;
    let (motion, icon) = match category {
        TimelineCategory::Work => (Motion::SlideFromLeft(50.0), IconKind::Briefcase),
        TimelineCategory::Education => (Motion::SlideFromRight(50.0), IconKind::GraduationCap),
    };

    html! {
        <Reveal motion={motion} class={classes!("timeline", category.accent_class())}>
            <h3 class="timeline-heading">
                <Icon kind={icon} />
                { category.heading() }
            </h3>
            <div class="timeline-track">
                <div class="timeline-line"></div>
                { for timeline(category).iter().map(|entry| html! {
                    <div class="timeline-card">
                        <div class="timeline-dot"></div>
                        <h4>{ entry.title }</h4>
                        <p class="timeline-org">{ entry.organization }</p>
                        <p class="timeline-period">{ entry.period }</p>
                        <p class="timeline-text">{ entry.description }</p>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(Journey)]
pub fn journey() -> Html {
    html! {
        <section id={anchor::JOURNEY} class="section section-light">
            <style>
                {r#"
                .journey-grid {
                    display: grid;
                    gap: 4rem;
                }
                .timeline > * + * {
                    margin-top: 2rem;
                }
                .timeline-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #111827;
                }
                .timeline-heading .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: var(--accent);
                }
                .timeline-track {
                    position: relative;
                    padding-left: 2rem;
                }
                .timeline-line {
                    position: absolute;
                    left: 0;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: linear-gradient(to bottom, var(--accent), var(--accent-end));
                }
                .timeline-card {
                    position: relative;
                    padding: 1.5rem;
                    background: #ffffff;
                    border-radius: 0.5rem;
                    border-left: 4px solid var(--accent);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .timeline-card + .timeline-card {
                    margin-top: 1.5rem;
                }
                .timeline-dot {
                    position: absolute;
                    left: -2.5rem;
                    top: 1.5rem;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    border: 4px solid #ffffff;
                }
                .timeline-card h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .timeline-org {
                    color: var(--accent);
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .timeline-period {
                    color: #4b5563;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .timeline-text {
                    color: #374151;
                    line-height: 1.7;
                }
                .accent-red { --accent: #991b1b; --accent-end: #0284c7; }
                .accent-sky { --accent: #0284c7; --accent-end: #991b1b; }
                @media (min-width: 1024px) {
                    .journey-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
            <div class="container">
                <SectionHeading title="My Journey" />
                <div class="journey-grid">
                    <TimelineColumn category={TimelineCategory::Work} />
                    <TimelineColumn category={TimelineCategory::Education} />
                </div>
            </div>
        </section>
    }
}
