pub mod use_menu_state;

pub use use_menu_state::{use_menu_state, MenuState};
