//! Class names used by the navigation bar.
//!
//! The defaults match the Office Fabric stylesheet bundled in `assets/navbar.css`. A CSS
//! module build can emit a JSON map of hashed class names, which is loaded with
//! [`NavBarStyles::from_json`]; any key missing from the map keeps its default.

use serde::{Deserialize, Serialize};

use crate::error::NavBarResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarStyles {
    #[serde(rename = "ms-NavBar")]
    pub bar: String,
    #[serde(rename = "ms-NavBar-openMenu")]
    pub open_menu: String,
    #[serde(rename = "ms-NavBar-items")]
    pub items: String,
    #[serde(rename = "is-open")]
    pub open: String,
}

impl Default for NavBarStyles {
    fn default() -> Self {
        Self {
            bar: "ms-NavBar".to_string(),
            open_menu: "ms-NavBar-openMenu".to_string(),
            items: "ms-NavBar-items".to_string(),
            open: "is-open".to_string(),
        }
    }
}

impl NavBarStyles {
    pub fn from_json(json: &str) -> NavBarResult<Self> {
        let styles = serde_json::from_str(json)?;
        Ok(styles)
    }

    /// Class list for the root element.
    pub fn root_class(&self, is_open: bool) -> String {
        self.with_open(&self.bar, is_open)
    }

    /// Class list for the menu toggle.
    pub fn toggle_class(&self, is_open: bool) -> String {
        self.with_open(&self.open_menu, is_open)
    }

    fn with_open(&self, base: &str, is_open: bool) -> String {
        if is_open {
            format!("{} {}", base, self.open)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let styles = NavBarStyles::default();
        assert_eq!(styles.root_class(false), "ms-NavBar");
        assert_eq!(styles.root_class(true), "ms-NavBar is-open");
        assert_eq!(styles.toggle_class(true), "ms-NavBar-openMenu is-open");
    }

    #[test]
    fn test_caller_classes_follow_modifier() {
        let styles = NavBarStyles::default();
        let extra = vec!["custom".to_string(), "sticky".to_string()];
        assert_eq!(styles.root_class_with(true, &extra), "ms-NavBar is-open custom sticky");
        assert_eq!(styles.root_class_with(false, &[]), "ms-NavBar");
    }

    #[test]
    fn test_partial_map_keeps_defaults() {
        let styles = NavBarStyles::from_json(r#"{ "ms-NavBar": "NavBar_a1b2", "is-open": "open_x9" }"#)
            .unwrap();
        assert_eq!(styles.bar, "NavBar_a1b2");
        assert_eq!(styles.items, "ms-NavBar-items");
        assert_eq!(styles.root_class(true), "NavBar_a1b2 open_x9");
    }

    #[test]
    fn test_malformed_map() {
        let err = NavBarStyles::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid style map"));
    }
}
