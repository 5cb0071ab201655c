//! Edge case and boundary condition tests
//!
//! These tests verify the state machines and content loading handle
//! unusual inputs, error conditions, and boundary values correctly.

use std::time::{Duration, Instant};

use vitrine_core::visibility::{visibility_ratio, Band, ElementRect};
use vitrine_core::{
    Gallery, Lightbox, PortfolioContent, SectionHighlighter, SectionId, VisibilitySample,
    VitrineError, SUPPRESS_WINDOW,
};

// ============================================================================
// Empty Input Tests
// ============================================================================

/// Test content with no nav and no sections
#[test]
fn test_empty_content() {
    let content: PortfolioContent = serde_json::from_str(r#"{ "name": "Nobody" }"#).unwrap();
    content.validate().unwrap();

    assert!(content.resolved_nav().is_empty());
    assert!(Gallery::from_content(&content).is_empty());
}

/// Test a highlighter over zero sections stays inert forever
#[test]
fn test_highlighter_with_no_sections() {
    let mut h = SectionHighlighter::new(Vec::new());
    let now = Instant::now();

    assert!(!h.observe(&[VisibilitySample::new("ghost", 1.0)], now));
    assert!(!h.note_click(&SectionId::new("ghost"), now));
    assert_eq!(h.active(), None);
    assert!(!h.is_suppressed(now));
}

/// Test the viewer over an empty gallery rejects everything
#[test]
fn test_viewer_over_empty_gallery() {
    let mut lb = Lightbox::new(0);

    assert!(!lb.open(0));
    assert_eq!(lb.next(), None);
    assert_eq!(lb.prev(), None);
    lb.close();
    assert!(!lb.is_open());
    assert_eq!(lb.counter_label(), None);
}

// ============================================================================
// Content Loading Tests
// ============================================================================

/// Test loading a valid content file from disk
#[test]
fn test_load_content_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(
        &path,
        r#"{
            "name": "Edge Tester",
            "nav": [{ "label": "One", "target": "one" }],
            "sections": [{ "id": "one", "title": "One" }]
        }"#,
    )
    .unwrap();

    let content = PortfolioContent::load(&path).unwrap();
    assert_eq!(content.name, "Edge Tester");
    assert_eq!(content.resolved_nav().len(), 1);
}

/// Test loading a missing file reports an IO error
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortfolioContent::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VitrineError::Io(_)));
}

/// Test loading malformed JSON reports a parse error
#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(matches!(err, VitrineError::Parse(_)));
}

/// Test duplicate section ids are rejected at load time
#[test]
fn test_load_duplicate_section_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"{
            "name": "Dupes",
            "sections": [
                { "id": "twin", "title": "A" },
                { "id": "twin", "title": "B" }
            ]
        }"#,
    )
    .unwrap();

    let err = PortfolioContent::load(&path).unwrap_err();
    assert!(matches!(err, VitrineError::InvalidContent(_)));
}

/// Test unicode section ids and labels survive loading
#[test]
fn test_unicode_content() {
    let content: PortfolioContent = serde_json::from_str(
        r#"{
            "name": "Tester",
            "nav": [{ "label": "Fotografia", "target": "fotos-siete" }],
            "sections": [{ "id": "fotos-siete", "title": "Fotos 7" }]
        }"#,
    )
    .unwrap();

    let resolved = content.resolved_nav();
    assert_eq!(resolved[0].target.as_str(), "fotos-siete");
}

// ============================================================================
// Geometry Boundary Tests
// ============================================================================

/// Test a zero-height viewport produces empty bands and zero ratios
#[test]
fn test_zero_viewport() {
    let rect = ElementRect::new(0.0, 100.0);
    for band in [Band::section(0.0), Band::reveal(0.0)] {
        assert_eq!(band.height(), 0.0);
        assert_eq!(visibility_ratio(rect, band), 0.0);
    }
}

/// Test a rect exactly touching the band edge does not intersect
#[test]
fn test_rect_touching_band_edge() {
    let band = Band::section(1000.0);
    // Band is [200, 800]; rect ends exactly at 200.
    let rect = ElementRect::new(100.0, 100.0);
    assert_eq!(visibility_ratio(rect, band), 0.0);
}

/// Test a rect far above the viewport (negative coordinates)
#[test]
fn test_rect_scrolled_past() {
    let band = Band::section(1000.0);
    let rect = ElementRect::new(-3000.0, 400.0);
    assert_eq!(visibility_ratio(rect, band), 0.0);
}

// ============================================================================
// Viewer Boundary Tests
// ============================================================================

/// Test walking a three-image gallery forward through the wrap
#[test]
fn test_viewer_walks_gallery_in_order() {
    let mut lb = Lightbox::new(3);
    assert!(lb.open(0));
    assert_eq!(lb.counter_label().as_deref(), Some("1 / 3"));

    assert_eq!(lb.next(), Some(1));
    assert_eq!(lb.counter_label().as_deref(), Some("2 / 3"));

    assert_eq!(lb.next(), Some(2));
    assert_eq!(lb.counter_label().as_deref(), Some("3 / 3"));

    assert_eq!(lb.next(), Some(0));
    assert_eq!(lb.counter_label().as_deref(), Some("1 / 3"));
}

/// Test opening at the last valid index and walking off the end
#[test]
fn test_viewer_at_last_index() {
    let mut lb = Lightbox::new(3);
    assert!(lb.open(2));
    assert_eq!(lb.counter_label().as_deref(), Some("3 / 3"));

    lb.next();
    assert_eq!(lb.current(), Some(0));
    assert_eq!(lb.counter_label().as_deref(), Some("1 / 3"));
}

/// Test the open guard boundary: len - 1 opens, len does not
#[test]
fn test_viewer_open_guard_boundary() {
    let mut lb = Lightbox::new(4);
    assert!(!lb.open(4));
    assert!(!lb.is_open());
    assert!(lb.open(3));
    assert!(lb.is_open());
}

/// Test close is idempotent
#[test]
fn test_viewer_double_close() {
    let mut lb = Lightbox::new(2);
    lb.open(1);
    lb.close();
    lb.close();
    assert_eq!(lb.current(), None);
}

// ============================================================================
// Suppression Timing Tests
// ============================================================================

/// Test the observation landing exactly on the deadline is processed
#[test]
fn test_observation_exactly_at_deadline() {
    let sections = vec![SectionId::new("a"), SectionId::new("b")];
    let mut h = SectionHighlighter::new(sections.clone());
    let t0 = Instant::now();

    h.note_click(&sections[0], t0);
    h.observe(&[VisibilitySample::new("b", 1.0)], t0 + SUPPRESS_WINDOW);
    assert_eq!(h.active(), Some(&sections[1]));
}

/// Test the observation one tick before the deadline is dropped
#[test]
fn test_observation_just_before_deadline() {
    let sections = vec![SectionId::new("a"), SectionId::new("b")];
    let mut h = SectionHighlighter::new(sections.clone());
    let t0 = Instant::now();

    h.note_click(&sections[0], t0);
    let just_before = t0 + SUPPRESS_WINDOW - Duration::from_millis(1);
    h.observe(&[VisibilitySample::new("b", 1.0)], just_before);
    assert_eq!(h.active(), Some(&sections[0]));
}

/// Test suppression does not decay while no events arrive
#[test]
fn test_suppression_expires_lazily() {
    let sections = vec![SectionId::new("a"), SectionId::new("b")];
    let mut h = SectionHighlighter::new(sections.clone());
    let t0 = Instant::now();

    h.note_click(&sections[0], t0);
    assert!(h.is_suppressed(t0 + Duration::from_millis(999)));
    assert!(!h.is_suppressed(t0 + SUPPRESS_WINDOW));

    // Long after the window, the first observation through wins.
    let much_later = t0 + Duration::from_secs(60);
    h.observe(&[VisibilitySample::new("b", 0.4)], much_later);
    assert_eq!(h.active(), Some(&sections[1]));
}
