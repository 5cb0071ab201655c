//! Gallery indexing
//!
//! The fullscreen viewer navigates one flat, page-ordered list of
//! images, regardless of which section each image sits in. This module
//! builds that list and maps between section-local and global positions.

use crate::content::{GalleryImage, PortfolioContent, SectionId};

/// One image in the flattened gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    /// Section the image belongs to
    pub section: SectionId,
    /// The image itself
    pub image: GalleryImage,
}

impl GalleryEntry {
    /// Alt text for the image: its description, or empty
    pub fn alt_text(&self) -> &str {
        self.image.description.as_deref().unwrap_or("")
    }
}

/// All page images in document order
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Flatten the images of every section, in section then image order
    pub fn from_content(content: &PortfolioContent) -> Self {
        let entries = content
            .sections
            .iter()
            .flat_map(|section| {
                section.images.iter().map(|image| GalleryEntry {
                    section: section.id.clone(),
                    image: image.clone(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a global gallery index
    pub fn get(&self, index: usize) -> Option<&GalleryEntry> {
        self.entries.get(index)
    }

    /// All entries, in gallery order
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Global index of the `position`-th image inside `section`
    ///
    /// This is what a thumbnail click passes to the viewer, so clicking
    /// the second photo of a later section opens at its page-wide index.
    pub fn index_of(&self, section: &SectionId, position: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| &entry.section == section)
            .nth(position)
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;

    fn content_with_images() -> PortfolioContent {
        let mut photos = Section::new("photos", "Photos");
        photos.images = vec![
            GalleryImage::new("a.png"),
            GalleryImage::new("b.png").with_description("second"),
        ];
        let mut travel = Section::new("travel", "Travel");
        travel.images = vec![GalleryImage::new("c.png")];

        PortfolioContent {
            name: "x".to_string(),
            tagline: String::new(),
            nav: Vec::new(),
            sections: vec![photos, Section::new("words", "Words"), travel],
        }
    }

    #[test]
    fn test_flattens_in_document_order() {
        let gallery = Gallery::from_content(&content_with_images());
        assert_eq!(gallery.len(), 3);
        let srcs: Vec<&str> = gallery
            .entries()
            .iter()
            .map(|e| e.image.src.as_str())
            .collect();
        assert_eq!(srcs, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_index_of_spans_sections() {
        let gallery = Gallery::from_content(&content_with_images());
        assert_eq!(gallery.index_of(&SectionId::new("photos"), 1), Some(1));
        assert_eq!(gallery.index_of(&SectionId::new("travel"), 0), Some(2));
        assert_eq!(gallery.index_of(&SectionId::new("travel"), 1), None);
        assert_eq!(gallery.index_of(&SectionId::new("words"), 0), None);
    }

    #[test]
    fn test_alt_text_falls_back_to_empty() {
        let gallery = Gallery::from_content(&content_with_images());
        assert_eq!(gallery.get(0).map(GalleryEntry::alt_text), Some(""));
        assert_eq!(gallery.get(1).map(GalleryEntry::alt_text), Some("second"));
    }

    #[test]
    fn test_empty_content_gives_empty_gallery() {
        let content = PortfolioContent {
            name: "x".to_string(),
            tagline: String::new(),
            nav: Vec::new(),
            sections: Vec::new(),
        };
        let gallery = Gallery::from_content(&content);
        assert!(gallery.is_empty());
        assert_eq!(gallery.get(0), None);
    }
}
