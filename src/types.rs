use std::fmt;

use dioxus::prelude::*;

/// Identity tag carried by every child handed to a `NavBar`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildKind {
    Item,
    Link,
    Title,
    /// Anything else; the name is only used in diagnostics.
    Other(String),
}

impl ChildKind {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ChildKind::Other(_))
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKind::Item => f.write_str("NavBarItem"),
            ChildKind::Link => f.write_str("NavBarLink"),
            ChildKind::Title => f.write_str("NavBarTitle"),
            ChildKind::Other(name) => f.write_str(name),
        }
    }
}

/// A renderable child tagged with its identity.
#[derive(Clone, Debug, PartialEq)]
pub struct NavBarChild {
    pub kind: ChildKind,
    pub content: Element,
}

impl NavBarChild {
    pub fn new(kind: ChildKind, content: Element) -> Self {
        Self { kind, content }
    }

    pub fn other(name: impl Into<String>, content: Element) -> Self {
        Self::new(ChildKind::Other(name.into()), content)
    }
}

/// The `entries` prop: either one child or an ordered list of them.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum NavChildren {
    #[default]
    Empty,
    Single(NavBarChild),
    Many(Vec<NavBarChild>),
}

impl NavChildren {
    pub fn iter(&self) -> std::slice::Iter<'_, NavBarChild> {
        match self {
            NavChildren::Empty => Default::default(),
            NavChildren::Single(child) => std::slice::from_ref(child).iter(),
            NavChildren::Many(children) => children.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<NavBarChild> for NavChildren {
    fn from(child: NavBarChild) -> Self {
        NavChildren::Single(child)
    }
}

impl From<Vec<NavBarChild>> for NavChildren {
    fn from(children: Vec<NavBarChild>) -> Self {
        NavChildren::Many(children)
    }
}

impl FromIterator<NavBarChild> for NavChildren {
    fn from_iter<I: IntoIterator<Item = NavBarChild>>(iter: I) -> Self {
        NavChildren::Many(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NavChildren {
    type Item = &'a NavBarChild;
    type IntoIter = std::slice::Iter<'a, NavBarChild>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Children split into the title slot and the ordered item list.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Classification {
    pub title: Option<NavBarChild>,
    pub items: Vec<NavBarChild>,
}
