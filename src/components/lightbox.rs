//! Fullscreen Viewer
//!
//! Overlay shown while the gallery viewer is open: one image at a
//! time, wrap-around prev/next, a position counter and keyboard
//! navigation. Clicking the backdrop or pressing Escape closes it;
//! clicks inside the content area stay inside.

use dioxus::prelude::*;
use vitrine_core::Lightbox;

use crate::components::FullImage;
use crate::context::use_viewer;

/// Keyboard controls while the viewer is open
fn handle_viewer_key(viewer: &mut Lightbox, key: Key) {
    match key {
        Key::Escape => viewer.close(),
        Key::ArrowLeft => {
            viewer.prev();
        }
        Key::ArrowRight => {
            viewer.next();
        }
        _ => {}
    }
}

#[component]
pub fn LightboxOverlay() -> Element {
    let mut viewer = use_viewer();
    let gallery = crate::gallery();

    let Some(index) = viewer.read().current() else {
        return rsx! {};
    };
    let Some(entry) = gallery.get(index) else {
        return rsx! {};
    };
    let shown = index + 1;
    let total = gallery.len();

    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            // Key events only reach the overlay while it holds focus, and
            // focus stays wherever the opening click left it. Take it on
            // mount; each open re-mounts the overlay.
            onmounted: move |evt| {
                spawn(async move {
                    if let Err(e) = evt.data().set_focus(true).await {
                        tracing::warn!("Viewer focus failed: {}", e);
                    }
                });
            },
            onclick: move |_| viewer.write().close(),
            onkeydown: move |evt| handle_viewer_key(&mut viewer.write(), evt.key()),

            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "lightbox-close",
                    "aria-label": "Close viewer",
                    onclick: move |_| viewer.write().close(),
                    svg {
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        path {
                            d: "M18 6L6 18M6 6l12 12",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                        }
                    }
                }

                button {
                    class: "lightbox-prev",
                    "aria-label": "Previous image",
                    onclick: move |_| {
                        viewer.write().prev();
                    },
                    svg {
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        path {
                            d: "M15 18l-6-6 6-6",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                }

                button {
                    class: "lightbox-next",
                    "aria-label": "Next image",
                    onclick: move |_| {
                        viewer.write().next();
                    },
                    svg {
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        path {
                            d: "M9 18l6-6-6-6",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                }

                FullImage { image: entry.image.clone() }

                div { class: "lightbox-counter",
                    span { class: "current", "{shown}" }
                    " / "
                    span { class: "total", "{total}" }
                }
            }
        }
    }
}
