use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{anchor, HERO_STATS, PROFILE};
use crate::motion::transition::{Motion, Transition, Trigger};

/// Plays on page load rather than on viewport entry.
#[function_component(Hero)]
pub fn hero() -> Html {
    let copy = |delay_ms: u32| Transition::QUICK.delayed(delay_ms);

    html! {
        <section id={anchor::HOME} class="hero">
            <style>{HERO_CSS}</style>
            <div class="container hero-grid">
                <Reveal motion={Motion::SlideFromLeft(50.0)} trigger={Trigger::Mount} class="hero-copy">
                    <Reveal motion={Motion::FadeUp(20.0)} transition={copy(200)} trigger={Trigger::Mount}>
                        <h1 class="hero-title">
                            {"Bringing Stories to "}<span class="text-red">{"Life"}</span>{" Through "}
                            <span class="text-sky">{"Visual"}</span>{" Storytelling"}
                        </h1>
                    </Reveal>
                    <Reveal motion={Motion::FadeUp(20.0)} transition={copy(400)} trigger={Trigger::Mount}>
                        <p class="hero-intro">{ PROFILE.intro }</p>
                    </Reveal>
                    <Reveal motion={Motion::FadeUp(20.0)} transition={copy(600)} trigger={Trigger::Mount} class="hero-actions">
                        <a href={format!("#{}", anchor::ABOUT)} class="button button-primary">{"Get to Know Me"}</a>
                        <a href={format!("#{}", anchor::GALLERY)} class="button button-outline">{"View Photos"}</a>
                    </Reveal>
                    <Reveal motion={Motion::FadeUp(20.0)} transition={copy(800)} trigger={Trigger::Mount} class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="hero-stat">
                                <div class={classes!("hero-stat-value", stat.accent.text_class())}>{ stat.value }</div>
                                <div class="hero-stat-label">{ stat.label }</div>
                            </div>
                        }) }
                    </Reveal>
                </Reveal>

                <Reveal
                    motion={Motion::SlideFromRight(50.0)}
                    transition={Transition::SECTION.delayed(200)}
                    trigger={Trigger::Mount}
                    class="hero-visual"
                >
                    <div class="hero-portrait">
                        <div class="hero-portrait-frame">
                            <img src={PROFILE.portrait} alt={PROFILE.name} width="400" height="400" />
                            <div class="hero-portrait-tint"></div>
                        </div>
                    </div>
                    <div class="shape shape-spin"><div class="shape-core"></div></div>
                    <div class="shape shape-bob"><div class="shape-dot"></div></div>
                    <div class="shape shape-turn"></div>
                    <div class="shape shape-pulse"></div>
                </Reveal>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 8rem 1rem 0;
}
.hero-grid {
    display: grid;
    gap: 3rem;
    align-items: center;
}
.hero-copy > * + * {
    margin-top: 2rem;
}
.hero-title {
    font-family: 'Press Start 2P', monospace;
    font-size: 1.5rem;
    line-height: 1.4;
    color: #111827;
}
.hero-intro {
    color: #4b5563;
    line-height: 1.7;
    max-width: 32rem;
}
.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.hero-stats {
    display: flex;
    flex-wrap: wrap;
    gap: 2rem;
    padding-top: 2rem;
}
.hero-stat {
    text-align: center;
}
.hero-stat-value {
    font-size: 1.875rem;
    font-weight: 700;
}
.hero-stat-label {
    font-size: 0.875rem;
    color: #4b5563;
}
.hero-visual {
    position: relative;
}
.hero-portrait {
    position: relative;
    z-index: 10;
    width: 20rem;
    height: 20rem;
    margin: 0 auto;
}
.hero-portrait-frame {
    position: relative;
    width: 100%;
    height: 100%;
    padding: 0.5rem;
    border-radius: 9999px;
    overflow: hidden;
    background: linear-gradient(to bottom right, #fef2f2, #f0f9ff);
}
.hero-portrait-frame img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 9999px;
}
.hero-portrait-tint {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    pointer-events: none;
    background: linear-gradient(135deg, rgba(220, 38, 38, 0.18) 0%, rgba(2, 132, 199, 0.18) 100%);
}
.shape {
    position: absolute;
    display: flex;
    align-items: center;
    justify-content: center;
}
.shape-spin {
    top: -1rem;
    right: -1rem;
    width: 4rem;
    height: 4rem;
    background: #fee2e2;
    border-radius: 0.5rem;
    animation: shape-rotate 20s linear infinite;
}
.shape-core {
    width: 2rem;
    height: 2rem;
    background: #991b1b;
    border-radius: 0.375rem;
}
.shape-bob {
    top: 5rem;
    left: -2rem;
    width: 3rem;
    height: 3rem;
    background: #e0f2fe;
    border-radius: 9999px;
    animation: shape-bob 3s ease-in-out infinite;
}
.shape-dot {
    width: 1.5rem;
    height: 1.5rem;
    background: #0284c7;
    border-radius: 9999px;
}
.shape-turn {
    bottom: 4rem;
    right: -2rem;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 0.5rem;
    background: linear-gradient(to bottom right, #fecaca, #bae6fd);
    animation: shape-rotate 15s linear infinite;
}
.shape-pulse {
    bottom: 1rem;
    left: -1rem;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    background: #fef08a;
    animation: shape-pulse 4s ease-in-out infinite;
}
@keyframes shape-rotate {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
@keyframes shape-bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
@keyframes shape-pulse {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.1); }
}
@media (min-width: 640px) {
    .hero-actions { flex-direction: row; }
}
@media (min-width: 768px) {
    .hero-title { font-size: 2.25rem; }
    .hero-intro { font-size: 1.125rem; }
}
@media (min-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr 1fr; }
    .hero-portrait { width: 24rem; height: 24rem; }
}
"#;
