use dioxus::prelude::*;

/// Open/closed state for a `NavBar`, owned by the parent component.
#[derive(Clone, Copy, PartialEq)]
pub struct MenuState {
    pub is_open: Signal<bool>,
}

pub fn use_menu_state() -> MenuState {
    let is_open = use_signal(|| false);

    MenuState { is_open }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self.is_open.read()
    }

    pub fn open(&mut self) {
        self.is_open.set(true);
    }

    pub fn close(&mut self) {
        self.is_open.set(false);
    }

    /// Handler for the `open_menu` prop.
    pub fn open_handler(&self) -> EventHandler<()> {
        let mut state = *self;
        EventHandler::new(move |_| state.open())
    }

    /// Handler for the `close_menu` prop.
    pub fn close_handler(&self) -> EventHandler<()> {
        let mut state = *self;
        EventHandler::new(move |_| state.close())
    }
}
