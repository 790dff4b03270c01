pub mod children;
pub mod nav_bar;
pub mod nav_bar_item;

pub use children::{classify, unreported, validate};
pub use nav_bar::{request_close, request_open, take_classes, NavBar};
pub use nav_bar_item::{NavBarItem, NavBarLink, NavBarTitle};
