use dioxus::prelude::*;

use vitrine_core::{Lightbox, RevealLatch, SectionHighlighter};

use crate::context::MeasureRegistry;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared interaction state, then
/// renders the single portfolio page. The state machines are built once
/// from the startup-loaded content: the highlighter tracks the resolved
/// nav targets, the viewer spans the flattened gallery.
#[component]
pub fn App() -> Element {
    let highlighter: Signal<SectionHighlighter> =
        use_signal(|| SectionHighlighter::new(crate::content().resolved_section_ids()));
    let viewer: Signal<Lightbox> = use_signal(|| Lightbox::new(crate::gallery().len()));
    let reveal: Signal<RevealLatch> = use_signal(RevealLatch::new);
    let menu_open: Signal<bool> = use_signal(|| false);
    let registry: Signal<MeasureRegistry> = use_signal(MeasureRegistry::default);

    // Provide interaction state to all child components
    use_context_provider(|| highlighter);
    use_context_provider(|| viewer);
    use_context_provider(|| reveal);
    use_context_provider(|| menu_open);
    use_context_provider(|| registry);

    let shell_class = if crate::reduced_motion() {
        "app-shell reduced-motion"
    } else {
        "app-shell"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: shell_class,
            Home {}
        }
    }
}
