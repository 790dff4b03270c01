use std::collections::HashSet;

use crate::error::NavBarError;
use crate::types::{ChildKind, Classification, NavBarChild, NavChildren};

const COMPONENT_NAME: &str = "NavBar";
const PROP_NAME: &str = "entries";

/// Split children into the title slot and the item list.
///
/// Items and links keep their order. Every title overwrites the previous one, so the
/// last title wins when more than one is supplied. Unrecognized children are dropped.
pub fn classify<'a>(children: impl IntoIterator<Item = &'a NavBarChild>) -> Classification {
    let mut split = Classification::default();

    for child in children {
        match child.kind {
            ChildKind::Item | ChildKind::Link => split.items.push(child.clone()),
            ChildKind::Title => split.title = Some(child.clone()),
            ChildKind::Other(_) => {}
        }
    }

    split
}

/// Check the `entries` prop and collect every violation.
///
/// The result is advisory; callers render the bar regardless.
pub fn validate(children: &NavChildren) -> Vec<NavBarError> {
    let mut errors = Vec::new();

    for (index, child) in children.iter().enumerate() {
        if !child.kind.is_recognized() {
            let prop = match children {
                NavChildren::Single(_) => PROP_NAME.to_string(),
                _ => format!("{PROP_NAME}[{index}]"),
            };
            errors.push(NavBarError::InvalidChild {
                prop,
                component: COMPONENT_NAME.to_string(),
                found: child.kind.to_string(),
            });
        }
    }

    let titles = children
        .iter()
        .filter(|child| child.kind == ChildKind::Title)
        .count();
    if titles > 1 {
        errors.push(NavBarError::MultipleTitles {
            component: COMPONENT_NAME.to_string(),
        });
    }

    errors
}

/// Keep only diagnostics whose message has not been seen yet, remembering them in `seen`.
pub fn unreported(seen: &mut HashSet<String>, errors: Vec<NavBarError>) -> Vec<NavBarError> {
    errors
        .into_iter()
        .filter(|error| seen.insert(error.to_string()))
        .collect()
}
