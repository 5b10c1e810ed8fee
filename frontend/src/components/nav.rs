use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal::Reveal;
use crate::content::{NavItem, NAV_ITEMS, PROFILE};
use crate::motion::transition::{Motion, Transition, Trigger};
use crate::state::menu::{MenuAction, MenuState};

/// Which link lists are on screen for a given menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout<'a> {
    /// Link behind the logo, the first item.
    pub logo: Option<&'a NavItem>,
    pub desktop: &'a [NavItem],
    pub overlay: Option<&'a [NavItem]>,
}

pub fn nav_layout(menu: MenuState, items: &[NavItem]) -> NavLayout<'_> {
    NavLayout {
        logo: items.first(),
        desktop: items,
        overlay: menu.is_open().then_some(items),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MenuState,
    pub on_action: Callback<MenuAction>,
    #[prop_or(NAV_ITEMS)]
    pub items: &'static [NavItem],
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu, on_action, items } = props;
    let layout = nav_layout(*menu, items);

    let toggle_menu = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(MenuAction::Toggle);
        })
    };

    // no prevent_default: the browser still scrolls to the anchor
    let select_item = {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(MenuAction::Select))
    };

    html! {
        <nav class="top-nav">
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <div class="nav-bar">
                    <Reveal motion={Motion::SlideFromLeft(20.0)} transition={Transition::QUICK} trigger={Trigger::Mount} class="nav-logo">
                        <a href={layout.logo.map(NavItem::href).unwrap_or_else(|| "#".to_string())}>
                            <img src={PROFILE.logo} width="150" height="100" alt="logo" />
                        </a>
                    </Reveal>

                    <div class="nav-links">
                        { for layout.desktop.iter().enumerate().map(|(index, item)| html! {
                            <Reveal
                                motion={Motion::FadeDown(20.0)}
                                transition={Transition::QUICK.staggered(index as u32, 100)}
                                trigger={Trigger::Mount}
                            >
                                <a href={item.href()} class="nav-link">{ item.label }</a>
                            </Reveal>
                        }) }
                    </div>

                    <button
                        class="burger-menu"
                        aria-label="Toggle navigation"
                        aria-expanded={menu.is_open().to_string()}
                        onclick={toggle_menu}
                    >
                        <Icon kind={if menu.is_open() { IconKind::Close } else { IconKind::Menu }} />
                    </button>
                </div>

                {
                    if let Some(overlay) = layout.overlay {
                        html! {
                            <div class="mobile-menu">
                                { for overlay.iter().map(|item| html! {
                                    <a href={item.href()} class="mobile-link" onclick={select_item.clone()}>
                                        { item.label }
                                    </a>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    font-family: 'Bree Serif', serif;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid #f3f4f6;
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}
.nav-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: 6rem;
}
.nav-logo {
    cursor: pointer;
}
.nav-logo img {
    display: block;
    height: auto;
    transition: transform 0.3s;
}
.nav-logo img:hover {
    transform: scale(1.1);
}
.nav-links {
    display: none;
    gap: 2rem;
}
.nav-link, .mobile-link {
    color: #4b5563;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.2s;
}
.nav-link:hover, .mobile-link:hover {
    color: #991b1b;
}
.burger-menu {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border: none;
    border-radius: 0.375rem;
    background: transparent;
    color: #111827;
    cursor: pointer;
}
.burger-menu:hover {
    background: #f3f4f6;
}
.burger-menu .icon {
    width: 1.5rem;
    height: 1.5rem;
}
.mobile-menu {
    padding: 1rem 0;
    border-top: 1px solid #f3f4f6;
    overflow: hidden;
    animation: menu-drop 0.25s ease-out;
}
.mobile-link {
    display: block;
    padding: 0.5rem 0;
}
@keyframes menu-drop {
    from { opacity: 0; max-height: 0; }
    to { opacity: 1; max-height: 20rem; }
}
@media (min-width: 768px) {
    .nav-links { display: flex; }
    .burger-menu, .mobile-menu { display: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_row_always_lists_every_item() {
        for menu in [MenuState::Closed, MenuState::Open] {
            let layout = nav_layout(menu, NAV_ITEMS);
            assert_eq!(layout.desktop.len(), 5);
        }
    }

    #[test]
    fn overlay_only_when_open() {
        assert_eq!(nav_layout(MenuState::Closed, NAV_ITEMS).overlay, None);
        let open = nav_layout(MenuState::Open, NAV_ITEMS);
        assert_eq!(open.overlay.map(|items| items.len()), Some(5));
    }

    #[test]
    fn logo_follows_the_given_items() {
        const SHORT: &[NavItem] = &[
            NavItem { label: "Journey", anchor: "journey" },
            NavItem { label: "Contact", anchor: "contact" },
        ];
        let layout = nav_layout(MenuState::Closed, SHORT);
        assert_eq!(layout.logo.map(NavItem::href).as_deref(), Some("#journey"));
        assert_eq!(nav_layout(MenuState::Open, NAV_ITEMS).logo, NAV_ITEMS.first());
        assert_eq!(nav_layout(MenuState::Closed, &[]).logo, None);
    }
}
