//! Portfolio content model
//!
//! The page structure the app renders: owner identity, sidebar navigation
//! links, and content sections. Loaded from a JSON file or built from the
//! built-in defaults; immutable after load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineResult;

/// Identifier for a content section
///
/// Section ids pair navigation links with the sections they point at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    /// Create a new section id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display label shown in the sidebar
    pub label: String,
    /// Id of the section this link scrolls to
    pub target: SectionId,
}

impl NavLink {
    /// Create a new navigation link
    pub fn new(label: impl Into<String>, target: impl Into<SectionId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl From<&str> for NavLink {
    /// Shorthand for links whose label is the capitalized target id
    fn from(target: &str) -> Self {
        let mut label = target.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        Self::new(label, target)
    }
}

/// A labeled line of section content (an info/hobby/project/contact row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoItem {
    /// Optional short label ("Location", "Stack", ...)
    #[serde(default)]
    pub label: Option<String>,
    /// Item text
    pub text: String,
}

impl InfoItem {
    /// Create an unlabeled item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    /// Create a labeled item
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// An entry in the gallery: a source locator plus optional description
///
/// `src` is either a path (resolved against the content base directory)
/// or an http(s) URL passed straight through to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image path or URL
    pub src: String,
    /// Optional description, used as alt text and viewer caption
    #[serde(default)]
    pub description: Option<String>,
}

impl GalleryImage {
    /// Create a gallery image entry
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the source is a remote URL rather than a local path
    pub fn is_remote(&self) -> bool {
        let lower = self.src.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

/// A named region of page content, rendered as one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section id, matched against nav link targets
    pub id: SectionId,
    /// Section heading
    pub title: String,
    /// Optional markdown intro paragraph
    #[serde(default)]
    pub intro: Option<String>,
    /// Itemized rows (rendered with staggered reveal delays)
    #[serde(default)]
    pub items: Vec<InfoItem>,
    /// Images contributed to the gallery, in order
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

impl Section {
    /// Create an empty section with the given id and title
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            intro: None,
            items: Vec::new(),
            images: Vec::new(),
        }
    }
}

/// The whole page: identity plus navigation plus sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Owner name (window title, sidebar header)
    pub name: String,
    /// Short tagline under the name
    #[serde(default)]
    pub tagline: String,
    /// Sidebar links, in display order
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Content sections, in document order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PortfolioContent {
    /// Load content from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> VitrineResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Structural validation: section ids must be unique
    pub fn validate(&self) -> VitrineResult<()> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            if !seen.insert(&section.id) {
                return Err(crate::error::VitrineError::InvalidContent(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a section by id
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Nav links whose target section exists, in nav order
    ///
    /// Links pointing at missing sections are excluded so the sidebar
    /// never renders a dead link.
    pub fn resolved_nav(&self) -> Vec<NavLink> {
        self.nav
            .iter()
            .filter(|link| {
                let found = self.section(&link.target).is_some();
                if !found {
                    tracing::debug!(target_id = %link.target, "excluding nav link with no matching section");
                }
                found
            })
            .cloned()
            .collect()
    }

    /// Target ids of the resolved nav links, in nav order
    pub fn resolved_section_ids(&self) -> Vec<SectionId> {
        self.resolved_nav()
            .into_iter()
            .map(|link| link.target)
            .collect()
    }

    /// Built-in sample content, used when no content file is found
    pub fn sample() -> Self {
        Self {
            name: "Ada Moreno".to_string(),
            tagline: "systems programmer & occasional photographer".to_string(),
            nav: vec![
                NavLink::new("About", "about"),
                NavLink::new("Projects", "projects"),
                NavLink::new("Photos", "photos"),
                NavLink::new("Contact", "contact"),
            ],
            sections: vec![
                Section {
                    id: "about".into(),
                    title: "About".to_string(),
                    intro: Some(
                        "I build storage engines by day and hike with a camera by \
                         weekend. Currently poking at *log-structured* everything."
                            .to_string(),
                    ),
                    items: vec![
                        InfoItem::labeled("Location", "Lisbon, Portugal"),
                        InfoItem::labeled("Focus", "storage, compilers, render loops"),
                        InfoItem::labeled("Elsewhere", "ada@moreno.dev"),
                    ],
                    images: Vec::new(),
                },
                Section {
                    id: "projects".into(),
                    title: "Projects".to_string(),
                    intro: None,
                    items: vec![
                        InfoItem::labeled("ledgerette", "append-only notebook database"),
                        InfoItem::labeled("shutterctl", "camera tethering CLI in Rust"),
                        InfoItem::labeled("vitrine", "this very portfolio viewer"),
                    ],
                    images: Vec::new(),
                },
                Section {
                    id: "photos".into(),
                    title: "Photos".to_string(),
                    intro: Some("A few frames from recent walks.".to_string()),
                    items: Vec::new(),
                    images: vec![
                        GalleryImage::new("https://picsum.photos/seed/vitrine-granite/1200/800")
                            .with_description("Granite ridge above the fog line"),
                        GalleryImage::new("https://picsum.photos/seed/vitrine-harbor/1200/800")
                            .with_description("Harbor cranes at dusk"),
                        GalleryImage::new("https://picsum.photos/seed/vitrine-pines/1200/800")
                            .with_description("Pine shadows on the trail"),
                    ],
                },
                Section {
                    id: "contact".into(),
                    title: "Contact".to_string(),
                    intro: None,
                    items: vec![
                        InfoItem::labeled("Email", "ada@moreno.dev"),
                        InfoItem::labeled("Code", "git.sr.ht/~adamoreno"),
                    ],
                    images: Vec::new(),
                },
            ],
        }
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::sample()
    }
}
