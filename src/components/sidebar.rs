//! Sidebar Navigation
//!
//! Fixed column with the owner's name and one link per section. The
//! link matching the highlighted section carries the active class. On
//! narrow layouts the column slides off-canvas and the open state
//! comes from the shared menu signal.

use dioxus::prelude::*;
use vitrine_core::SectionId;

use crate::context::{use_highlighter, use_menu_open};

/// Class for a nav link given its active state
fn link_class(active: bool) -> &'static str {
    if active {
        "side-link active"
    } else {
        "side-link"
    }
}

/// Class for the sidebar given the mobile menu state
fn sidebar_class(open: bool) -> &'static str {
    if open {
        "sidebar open"
    } else {
        "sidebar"
    }
}

#[component]
pub fn Sidebar(on_navigate: EventHandler<SectionId>) -> Element {
    let content = crate::content();
    let highlighter = use_highlighter();
    let menu_open = use_menu_open();

    // Resolve nav entries once per render, carrying the active flag so
    // the loop below owns everything its handlers capture.
    let links: Vec<(String, SectionId, bool)> = content
        .resolved_nav()
        .into_iter()
        .map(|link| {
            let active = highlighter.read().is_active(&link.target);
            (link.label, link.target, active)
        })
        .collect();

    rsx! {
        aside { class: sidebar_class(menu_open()),
            header { class: "sidebar-header",
                h1 { class: "owner-name", "{content.name}" }
                if !content.tagline.is_empty() {
                    p { class: "owner-tagline", "{content.tagline}" }
                }
            }

            nav { class: "side-nav", "aria-label": "Sections",
                for (label , target , active) in links {
                    a {
                        class: link_class(active),
                        href: "#{target}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_navigate.call(target.clone());
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class_idle() {
        assert_eq!(link_class(false), "side-link");
    }

    #[test]
    fn test_link_class_active() {
        assert_eq!(link_class(true), "side-link active");
    }

    #[test]
    fn test_sidebar_class_tracks_menu() {
        assert_eq!(sidebar_class(false), "sidebar");
        assert_eq!(sidebar_class(true), "sidebar open");
    }
}
