use log::info;
use yew::prelude::*;

use crate::components::circular_gallery::CircularGallery;
use crate::components::decoration::DecorationLayer;
use crate::components::nav::Nav;
use crate::content::PERSONAL_PHOTOS;
use crate::sections::{
    about::About, contact::Contact, footer::Footer, gallery::Gallery, hero::Hero,
    journey::Journey,
};
use crate::state::menu::{MenuAction, MenuState};
use crate::state::scroll::{decoration_offset, use_scroll_progress};

/// Owns the page-wide state. Children get plain values plus callbacks.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let menu = use_reducer(MenuState::default);
    let progress = use_scroll_progress();
    let offset = decoration_offset(progress);

    {
        use_effect_with_deps(
            move |_| {
                info!("Portfolio mounted");
                || ()
            },
            (),
        );
    }

    let on_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |action: MenuAction| dispatcher.dispatch(action))
    };

    html! {
        <div class="portfolio">
            <style>{PAGE_CSS}</style>
            <DecorationLayer offset={offset} />
            <Nav menu={*menu} on_action={on_menu} />
            <main class="page-content">
                <Hero />
                <About />
                <CircularGallery photos={PERSONAL_PHOTOS} bend={3.0} border_radius={0.05} />
                <Gallery photos={PERSONAL_PHOTOS} />
                <Journey />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

const PAGE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    font-family: 'Raleway', sans-serif;
    -webkit-font-smoothing: antialiased;
}
h1, h2, h3, h4, p {
    margin: 0;
}
.portfolio {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: #f9fafb;
}
.page-content {
    position: relative;
    z-index: 1;
}
.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}
.section {
    padding: 5rem 0;
    scroll-margin-top: 6rem;
}
.section-light {
    background: #ffffff;
}
.section-muted {
    background: #f9fafb;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-title {
    font-family: 'Press Start 2P', monospace;
    font-size: 1.5rem;
    font-weight: 700;
    color: #111827;
    margin-bottom: 1.5rem;
}
.section-rule {
    width: 5rem;
    height: 0.25rem;
    margin: 0 auto 2rem;
    background: linear-gradient(to right, #991b1b, #0284c7);
}
.section-blurb {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: #4b5563;
}
.text-red { color: #991b1b; }
.text-sky { color: #0284c7; }
.text-dark { color: #1f2937; }
.button {
    display: inline-block;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-weight: 500;
    text-align: center;
    text-decoration: none;
    transition: background 0.2s;
}
.button-primary {
    background: #991b1b;
    color: #ffffff;
}
.button-primary:hover {
    background: #7f1d1d;
}
.button-outline {
    border: 1px solid #0284c7;
    color: #0284c7;
    background: transparent;
}
.button-outline:hover {
    background: #f0f9ff;
}
@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}
@media (min-width: 768px) {
    .section-title { font-size: 2.25rem; }
}
@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}
"#;

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::components::nav::nav_layout;
    use crate::content::NAV_ITEMS;
    use crate::state::scroll::ScrollProgress;

    #[test]
    fn open_menu_then_follow_gallery_link() {
        let menu = Rc::new(MenuState::default());
        assert_eq!(nav_layout(*menu, NAV_ITEMS).overlay, None);

        let menu = menu.reduce(MenuAction::Toggle);
        assert_eq!(*menu, MenuState::Open);
        let overlay = nav_layout(*menu, NAV_ITEMS).overlay.expect("overlay shown when open");
        let gallery = overlay.iter().find(|item| item.label == "Gallery").unwrap();

        let menu = menu.reduce(MenuAction::Select);
        assert_eq!(*menu, MenuState::Closed);
        assert_eq!(nav_layout(*menu, NAV_ITEMS).overlay, None);
        assert_eq!(gallery.href(), "#gallery");
    }

    #[test]
    fn scrolling_half_way_shifts_decoration_fifteen_percent() {
        let start = decoration_offset(ScrollProgress::from_metrics(0.0, 5000.0, 1000.0));
        let middle = decoration_offset(ScrollProgress::from_metrics(2000.0, 5000.0, 1000.0));
        assert_eq!(start.to_string(), "0%");
        assert_eq!(middle.to_string(), "15%");
    }
}
