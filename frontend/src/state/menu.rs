use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Visibility of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// A nav link was followed. Always closes.
    pub fn select(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Select,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::Select => self.select(),
        };
        if next == *self {
            // same Rc, no re-render
            return self;
        }
        debug!("menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_twice_is_identity() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.toggle().toggle(), state);
            assert_ne!(state.toggle(), state);
        }
    }

    #[test]
    fn select_always_closes() {
        assert_eq!(MenuState::Open.select(), MenuState::Closed);
        assert_eq!(MenuState::Closed.select(), MenuState::Closed);
        assert_eq!(MenuState::Open.select().select(), MenuState::Closed);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let closed = Rc::new(MenuState::Closed);
        let reduced = closed.clone().reduce(MenuAction::Select);
        assert!(Rc::ptr_eq(&closed, &reduced));

        let opened = closed.clone().reduce(MenuAction::Toggle);
        assert_eq!(*opened, MenuState::Open);
        assert!(!Rc::ptr_eq(&closed, &opened));
    }
}
