use dioxus::prelude::*;

use crate::types::{ChildKind, NavBarChild};

#[component]
pub fn NavBarItem(children: Element) -> Element {
    rsx! {
        li { class: "ms-NavBar-item",
            {children}
        }
    }
}

#[component]
pub fn NavBarLink(href: String, children: Element) -> Element {
    rsx! {
        li { class: "ms-NavBar-item ms-NavBar-link",
            a { class: "ms-NavBar-link-anchor", href: "{href}",
                {children}
            }
        }
    }
}

#[component]
pub fn NavBarTitle(children: Element) -> Element {
    rsx! {
        div { class: "ms-NavBar-title",
            {children}
        }
    }
}

impl NavBarChild {
    /// Plain menu entry wrapped in a [`NavBarItem`].
    pub fn item(content: Element) -> Self {
        Self::new(ChildKind::Item, rsx! { NavBarItem { {content} } })
    }

    /// Entry pointing at `href`, wrapped in a [`NavBarLink`].
    pub fn link(href: impl Into<String>, content: Element) -> Self {
        let href = href.into();
        Self::new(ChildKind::Link, rsx! { NavBarLink { href: href, {content} } })
    }

    /// Bar title wrapped in a [`NavBarTitle`].
    pub fn title(content: Element) -> Self {
        Self::new(ChildKind::Title, rsx! { NavBarTitle { {content} } })
    }
}
