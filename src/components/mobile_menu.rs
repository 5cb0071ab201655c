//! Mobile Menu Button
//!
//! Floating hamburger shown on narrow layouts. Hidden while scrolling
//! down past the top of the page, brought back on any upward scroll.

use dioxus::prelude::*;

/// Class for the toggle button given its scroll-hidden state
fn button_class(hidden: bool) -> &'static str {
    if hidden {
        "mobile-menu-btn hidden"
    } else {
        "mobile-menu-btn"
    }
}

#[component]
pub fn MobileMenuButton(hidden: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: button_class(hidden),
            "aria-label": "Toggle navigation menu",
            onclick: move |_| on_toggle.call(()),
            svg {
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                path {
                    d: "M3 12h18M3 6h18M3 18h18",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_visible() {
        assert_eq!(button_class(false), "mobile-menu-btn");
    }

    #[test]
    fn test_button_class_hidden() {
        assert_eq!(button_class(true), "mobile-menu-btn hidden");
    }
}
