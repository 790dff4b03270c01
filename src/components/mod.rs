pub mod icon;
pub mod navigation;

pub use icon::Icon;
pub use navigation::{NavBar, NavBarItem, NavBarLink, NavBarTitle};
