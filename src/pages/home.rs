//! Home page - the whole portfolio in one scrollable view.
//!
//! Owns the measurement loop: on every gated scroll event the mounted
//! sections and reveal targets are measured against the scroll
//! container, and the resulting ratios drive the sidebar highlight and
//! the reveal animations.

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use vitrine_core::visibility::{visibility_ratio, Band, ElementRect};
use vitrine_core::{FrameGate, ScrollDirection, ScrollWatcher, SectionId, VisibilitySample};

use crate::components::{LightboxOverlay, MobileMenuButton, SectionCard, Sidebar};
use crate::context::{
    use_highlighter, use_measure_registry, use_menu_open, use_reveal, use_viewer,
};

/// Scroll offset below which the mobile menu button never hides
const MENU_HIDE_MIN_OFFSET: f64 = 100.0;

/// The single page: sidebar, content column, viewer overlay.
#[component]
pub fn Home() -> Element {
    let mut registry = use_measure_registry();
    let mut highlighter = use_highlighter();
    let mut reveal = use_reveal();
    let viewer = use_viewer();
    let mut menu_open = use_menu_open();

    let mut gate = use_signal(FrameGate::new);
    let mut watcher = use_signal(ScrollWatcher::new);
    let mut menu_hidden = use_signal(|| false);

    // One visibility pass: measure every registered element against the
    // container, feed the highlighter one batch and the latch the
    // reveal ratios.
    let run_measure_pass = move || {
        spawn(async move {
            let (container, sections, reveals) = {
                let reg = registry.read();
                (
                    reg.container.clone(),
                    reg.sections.clone(),
                    reg.reveals.clone(),
                )
            };
            let Some(container) = container else { return };
            let Ok(frame) = container.get_client_rect().await else { return };

            let section_band = Band::section(frame.size.height);
            let reveal_band = Band::reveal(frame.size.height);

            // Batch order follows the nav, so ratio ties resolve to the
            // earliest section on the page.
            let mut samples = Vec::new();
            for id in crate::content().resolved_section_ids() {
                let Some(el) = sections.get(&id) else { continue };
                if let Ok(rect) = el.get_client_rect().await {
                    let local =
                        ElementRect::new(rect.origin.y - frame.origin.y, rect.size.height);
                    samples.push(VisibilitySample {
                        id,
                        ratio: visibility_ratio(local, section_band),
                    });
                }
            }
            highlighter.write().observe(&samples, Instant::now());

            if !crate::reduced_motion() {
                for (key, el) in reveals {
                    if reveal.read().is_revealed(&key) {
                        continue;
                    }
                    if let Ok(rect) = el.get_client_rect().await {
                        let local =
                            ElementRect::new(rect.origin.y - frame.origin.y, rect.size.height);
                        reveal
                            .write()
                            .observe(&key, visibility_ratio(local, reveal_band));
                    }
                }
            }
        });
    };

    let on_scroll = move |_| {
        let now = Instant::now();
        if !gate.write().try_pass(now) {
            return;
        }

        // Direction drives the mobile menu button visibility.
        spawn(async move {
            let container = registry.read().container.clone();
            let Some(container) = container else { return };
            if let Ok(offset) = container.get_scroll_offset().await {
                let direction = watcher.write().observe(offset.y);
                menu_hidden
                    .set(direction == ScrollDirection::Down && offset.y > MENU_HIDE_MIN_OFFSET);
            }
        });

        run_measure_pass();
    };

    let handle_navigate = move |target: SectionId| {
        highlighter.write().note_click(&target, Instant::now());
        menu_open.set(false);

        spawn(async move {
            let el = registry.read().sections.get(&target).cloned();
            if let Some(el) = el {
                let behavior = if crate::reduced_motion() {
                    ScrollBehavior::Instant
                } else {
                    ScrollBehavior::Smooth
                };
                if let Err(e) = el.scroll_to(behavior).await {
                    tracing::warn!("Scroll to section '{}' failed: {}", target, e);
                }
            }
        });
    };

    // Sections paired with their first item's page-wide stagger index.
    let mut item_offset = 0usize;
    let mut section_list = Vec::with_capacity(crate::content().sections.len());
    for section in &crate::content().sections {
        section_list.push((section.clone(), item_offset));
        item_offset += section.items.len();
    }

    let content_class = if viewer.read().is_open() {
        "content locked"
    } else {
        "content"
    };

    rsx! {
        div { class: "layout",
            MobileMenuButton {
                hidden: menu_hidden(),
                on_toggle: move |_| {
                    let open = menu_open();
                    menu_open.set(!open);
                },
            }

            Sidebar { on_navigate: handle_navigate }

            // Outside click closes the mobile menu
            if menu_open() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| menu_open.set(false),
                }
            }

            main {
                class: content_class,
                onmounted: move |evt| {
                    registry.write().container = Some(evt.data());
                    spawn(async move {
                        // Cards mount just after the container; give
                        // layout a beat before the first pass.
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        run_measure_pass();
                    });
                },
                onscroll: on_scroll,
                onresize: move |_| run_measure_pass(),

                div { class: "content-inner",
                    for (section, first_item_index) in section_list {
                        SectionCard {
                            key: "{section.id}",
                            section,
                            first_item_index,
                        }
                    }
                }
            }

            LightboxOverlay {}
        }
    }
}
