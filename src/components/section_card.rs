//! Section Card
//!
//! One portfolio section rendered as a card: heading, markdown intro,
//! staggered info rows and the section's slice of the gallery grid.
//! The card registers itself for visibility passes (highlighting and
//! reveal) and carries the pointer tilt effect.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};
use vitrine_core::{stagger_delay, GalleryImage, Section, SectionId, Tilt};

use crate::components::GalleryThumb;
use crate::context::{use_highlighter, use_measure_registry, use_reveal};

/// Reveal key for the card itself
fn card_key(id: &SectionId) -> String {
    format!("card-{}", id.as_str())
}

/// Reveal key for one info row
fn item_key(id: &SectionId, index: usize) -> String {
    format!("{}-item-{}", id.as_str(), index)
}

/// Classes for the card wrapper
fn card_class(active: bool, revealed: bool) -> String {
    let mut class = String::from("card reveal");
    if active {
        class.push_str(" active");
    }
    if revealed {
        class.push_str(" animate-in");
    }
    class
}

/// Classes for one info row
fn item_class(revealed: bool) -> &'static str {
    if revealed {
        "info-item reveal animate-in"
    } else {
        "info-item reveal"
    }
}

#[component]
pub fn SectionCard(section: Section, first_item_index: usize) -> Element {
    let mut registry = use_measure_registry();
    let highlighter = use_highlighter();
    let reveal = use_reveal();

    let mut card_size = use_signal(|| Option::<(f64, f64)>::None);
    let mut tilt = use_signal(|| Option::<Tilt>::None);

    let card_reveal_key = card_key(&section.id);
    let active = highlighter.read().is_active(&section.id);
    let revealed = reveal.read().is_revealed(&card_reveal_key);

    let section_id = section.id.clone();
    let mount_key = card_reveal_key.clone();

    // Parsed once and cached; the card re-renders on every highlight
    // change but the intro text never does.
    let intro = section.intro.clone();
    let intro_html = use_memo(move || {
        intro.as_ref().map(|markdown| {
            let mut options = Options::empty();
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TABLES);
            let parser = Parser::new_ext(markdown, options);
            let mut out = String::new();
            html::push_html(&mut out, parser);
            out
        })
    });

    let tilt_style = match tilt() {
        Some(t) => format!("transform: {};", t.transform()),
        None => String::new(),
    };

    let thumbs: Vec<(usize, Option<usize>, GalleryImage)> = section
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            (
                i,
                crate::context::gallery().index_of(&section.id, i),
                image.clone(),
            )
        })
        .collect();

    rsx! {
        article {
            id: "{section.id}",
            class: card_class(active, revealed),
            style: "{tilt_style}",
            onmounted: move |evt| {
                let mut reg = registry.write();
                reg.sections.insert(section_id.clone(), evt.data());
                reg.reveals.insert(mount_key.clone(), evt.data());
            },
            onresize: move |evt| {
                if let Ok(size) = evt.data().get_content_box_size() {
                    card_size.set(Some((size.width, size.height)));
                }
            },
            onmousemove: move |evt| {
                if crate::reduced_motion() {
                    return;
                }
                if let Some((width, height)) = card_size() {
                    let point = evt.element_coordinates();
                    tilt.set(Some(Tilt::at(point.x, point.y, width, height)));
                }
            },
            onmouseleave: move |_| {
                if tilt.peek().is_some() {
                    tilt.set(Some(Tilt::rest()));
                }
            },

            h2 { class: "card-title", "{section.title}" }

            if let Some(rendered) = intro_html() {
                div { class: "card-intro", dangerous_inner_html: "{rendered}" }
            }

            if !section.items.is_empty() {
                div { class: "info-list",
                    for (i , item) in section.items.iter().enumerate() {
                        InfoRow {
                            key: "{section.id}-item-{i}",
                            section_id: section.id.clone(),
                            index: i,
                            global_index: first_item_index + i,
                            label: item.label.clone(),
                            text: item.text.clone(),
                        }
                    }
                }
            }

            if !thumbs.is_empty() {
                div { class: "gallery-grid",
                    for (local , global , image) in thumbs {
                        GalleryThumb {
                            key: "{section.id}-img-{local}",
                            image: image,
                            gallery_index: global,
                        }
                    }
                }
            }
        }
    }
}

/// One labelled row inside a card, revealed with a staggered delay.
#[component]
fn InfoRow(
    section_id: SectionId,
    index: usize,
    global_index: usize,
    label: Option<String>,
    text: String,
) -> Element {
    let mut registry = use_measure_registry();
    let reveal = use_reveal();

    let row_key = item_key(&section_id, index);
    let revealed = reveal.read().is_revealed(&row_key);
    let delay = stagger_delay(global_index);
    let mount_key = row_key.clone();

    rsx! {
        div {
            class: item_class(revealed),
            style: "animation-delay: {delay}",
            onmounted: move |evt| {
                registry.write().reveals.insert(mount_key.clone(), evt.data());
            },
            if let Some(label) = label {
                span { class: "info-label", "{label}" }
            }
            span { class: "info-text", "{text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_idle() {
        assert_eq!(card_class(false, false), "card reveal");
    }

    #[test]
    fn test_card_class_active_and_revealed() {
        assert_eq!(card_class(true, false), "card reveal active");
        assert_eq!(card_class(false, true), "card reveal animate-in");
        assert_eq!(card_class(true, true), "card reveal active animate-in");
    }

    #[test]
    fn test_item_class_toggles_animation() {
        assert_eq!(item_class(false), "info-item reveal");
        assert_eq!(item_class(true), "info-item reveal animate-in");
    }

    #[test]
    fn test_reveal_keys_are_distinct_per_row() {
        let id = SectionId::new("projects");
        assert_eq!(card_key(&id), "card-projects");
        assert_eq!(item_key(&id, 0), "projects-item-0");
        assert_ne!(item_key(&id, 0), item_key(&id, 1));
    }
}
