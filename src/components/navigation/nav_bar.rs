use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::components::navigation::children::{classify, unreported, validate};
use crate::styles::NavBarStyles;
use crate::types::NavChildren;

/// Ask the owner to close the menu.
///
/// Only fires while the menu is open and a callback was supplied. Returns whether the
/// callback ran.
pub fn request_close<F: FnOnce()>(is_menu_open: bool, close_menu: Option<F>) -> bool {
    match close_menu {
        Some(close) if is_menu_open => {
            close();
            true
        }
        _ => false,
    }
}

/// Ask the owner to open the menu, whatever its current state.
pub fn request_open<F: FnOnce()>(open_menu: Option<F>) -> bool {
    match open_menu {
        Some(open) => {
            open();
            true
        }
        None => false,
    }
}

/// Pull caller `class` values out of the passthrough attributes so they can be merged
/// into the bar's own class list.
pub fn take_classes(attributes: Vec<Attribute>) -> (Vec<String>, Vec<Attribute>) {
    let (classes, rest): (Vec<Attribute>, Vec<Attribute>) = attributes
        .into_iter()
        .partition(|attribute| attribute.name == "class" && attribute.namespace.is_none());

    let classes = classes
        .into_iter()
        .filter_map(|attribute| match attribute.value {
            AttributeValue::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        })
        .collect();

    (classes, rest)
}

/// Horizontal navigation bar with a collapsible menu.
///
/// The open state belongs to the caller: the bar reads `is_menu_open` and reports clicks
/// through `open_menu` and `close_menu`. `entries` takes one child or a list of
/// [`NavBarChild`](crate::types::NavBarChild) values; items and links fill the list, a
/// title child takes the title slot and the `default_title` node is used when none is
/// given. A plain `title` attribute is forwarded like any other.
/// Any other attribute is forwarded to the root element; a caller `class` is appended
/// to the bar's classes.
#[component]
pub fn NavBar(
    #[props(default, into)] entries: NavChildren,
    #[props(default)] default_title: Option<Element>,
    #[props(default)] open_menu: Option<EventHandler<()>>,
    #[props(default)] close_menu: Option<EventHandler<()>>,
    #[props(default)] is_menu_open: bool,
    #[props(default)] styles: Option<NavBarStyles>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let reported = use_hook(|| Rc::new(RefCell::new(HashSet::<String>::new())));
    for diagnostic in unreported(&mut reported.borrow_mut(), validate(&entries)) {
        tracing::warn!("{}", diagnostic);
    }

    let split = classify(&entries);
    let styles = styles.unwrap_or_default();
    let (caller_classes, attributes) = take_classes(attributes);
    let title = split.title.map(|child| child.content).or(default_title);

    rsx! {
        div {
            "data-fabric": "NavBar",
            class: styles.root_class_with(is_menu_open, &caller_classes),
            onclick: move |_| {
                if request_close(is_menu_open, close_menu.map(|handler| move || handler.call(()))) {
                    tracing::debug!("NavBar requested menu close");
                }
            },
            ..attributes,

            if !split.items.is_empty() {
                div {
                    class: styles.toggle_class(is_menu_open),
                    onclick: move |_| {
                        if request_open(open_menu.map(|handler| move || handler.call(()))) {
                            tracing::debug!("NavBar requested menu open");
                        }
                    },
                    Icon { glyph: "menu" }
                }
            }

            {title}

            ul { class: styles.items.clone(),
                for item in split.items.iter() {
                    {item.content.clone()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_close_fires_only_when_open() {
        let calls = Cell::new(0);
        assert!(request_close(true, Some(|| calls.set(calls.get() + 1))));
        assert_eq!(calls.get(), 1);

        assert!(!request_close(false, Some(|| calls.set(calls.get() + 1))));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_close_without_callback_is_noop() {
        assert!(!request_close::<fn()>(true, None));
        assert!(!request_close::<fn()>(false, None));
    }

    #[test]
    fn test_take_classes_keeps_other_attributes() {
        let attributes = vec![
            Attribute::new("class", "custom", None, false),
            Attribute::new("title", "tip", None, false),
            Attribute::new("class", "  ", None, false),
        ];

        let (classes, rest) = take_classes(attributes);
        assert_eq!(classes, vec!["custom".to_string()]);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "title");
    }

    #[test]
    fn test_open_fires_regardless_of_state() {
        let calls = Cell::new(0);
        assert!(request_open(Some(|| calls.set(calls.get() + 1))));
        assert!(request_open(Some(|| calls.set(calls.get() + 1))));
        assert_eq!(calls.get(), 2);
        assert!(!request_open::<fn()>(None));
    }
}
