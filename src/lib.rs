//! Office Fabric style navigation bar for Dioxus.
//!
//! The bar takes a list of tagged children, splits them into a title and menu items,
//! and renders a toggle for narrow viewports. Whether the menu is open is decided by
//! the parent; the bar only asks for changes through its `open_menu` and `close_menu`
//! callbacks.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use fabric_navbar::prelude::*;
//!
//! #[component]
//! fn Header() -> Element {
//!     let menu = use_menu_state();
//!
//!     rsx! {
//!         NavBar {
//!             is_menu_open: menu.is_open(),
//!             open_menu: menu.open_handler(),
//!             close_menu: menu.close_handler(),
//!             entries: vec![
//!                 NavBarChild::title(rsx! { "Brand" }),
//!                 NavBarChild::item(rsx! { "Home" }),
//!                 NavBarChild::link("/contact", rsx! { "Contact" }),
//!             ],
//!         }
//!     }
//! }
//! ```

pub mod components;
pub mod error;
pub mod hooks;
pub mod styles;
pub mod types;

pub mod prelude {
    pub use crate::components::navigation::{classify, validate};
    pub use crate::components::{Icon, NavBar, NavBarItem, NavBarLink, NavBarTitle};
    pub use crate::error::{NavBarError, NavBarResult};
    pub use crate::hooks::{use_menu_state, MenuState};
    pub use crate::styles::NavBarStyles;
    pub use crate::types::{ChildKind, Classification, NavBarChild, NavChildren};
}
