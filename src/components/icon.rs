use dioxus::prelude::*;

/// Fabric glyph, e.g. `Icon { glyph: "menu" }` renders `ms-Icon--menu`.
#[component]
pub fn Icon(glyph: String) -> Element {
    rsx! {
        i {
            class: "ms-Icon ms-Icon--{glyph}",
            aria_hidden: "true",
        }
    }
}
