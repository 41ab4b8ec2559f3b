//! End-to-end scenarios: scan a document, bind, and drive the lightbox the
//! way the web host does.

use lightbox_core::testing::{MemoryDocument, MemoryImage, RecordingTarget};
use lightbox_core::{
    GalleryId, GalleryScanner, LightboxConfig, LightboxController, Trigger, normalize_dom_key,
};
use pretty_assertions::assert_eq;

fn page_doc() -> MemoryDocument {
    MemoryDocument::new()
        .with_container(
            "image-gallery-grid",
            vec![
                MemoryImage::new("gallery-image", "/a0.jpg", "A0"),
                MemoryImage::new("gallery-image", "/a1.jpg", "A1"),
                MemoryImage::new("gallery-image", "/a2.jpg", "A2"),
            ],
        )
        .with_container(
            "image-gallery-grid",
            vec![MemoryImage::new("gallery-image", "/b0.jpg", "B0")],
        )
}

#[test]
fn two_galleries_stay_isolated() {
    let config = LightboxConfig::default();
    let mut doc = page_doc();
    let page = GalleryScanner::new(config.scan.clone()).scan(&mut doc);
    let mut ctl = LightboxController::new(RecordingTarget::new());

    // Open A at index 2.
    assert!(page.activate(2, &mut ctl));
    assert_eq!(ctl.target().presentation().source, "/a2.jpg");
    assert!(ctl.target().presentation().nav_visible);

    // Next wraps to A0, previous comes back to A2.
    ctl.next();
    assert_eq!(ctl.target().presentation().source, "/a0.jpg");
    ctl.previous();
    assert_eq!(ctl.target().presentation().source, "/a2.jpg");

    // Open B at index 0: single image, controls hidden.
    assert!(page.open(GalleryId(1), 0, &mut ctl));
    assert_eq!(ctl.target().presentation().source, "/b0.jpg");
    assert_eq!(ctl.target().presentation().caption, "B0");
    assert!(!ctl.target().presentation().nav_visible);

    // Navigation never crosses into gallery A.
    ctl.next();
    assert_eq!(ctl.target().presentation().source, "/b0.jpg");

    ctl.close();
    assert!(!ctl.target().presentation().overlay_visible);
    assert!(!ctl.target().presentation().scroll_locked);
}

#[test]
fn open_at_minus_one_shows_last() {
    let mut doc = page_doc();
    let page = GalleryScanner::default().scan(&mut doc);
    let mut ctl = LightboxController::new(RecordingTarget::new());

    assert!(page.open(GalleryId(0), -1, &mut ctl));
    assert_eq!(ctl.current_index(), Some(2));
    assert_eq!(ctl.target().presentation().label, "A2");
}

#[test]
fn keyboard_session() {
    let config = LightboxConfig::default();
    let mut doc = page_doc();
    let page = GalleryScanner::new(config.scan.clone()).scan(&mut doc);
    let mut ctl = LightboxController::new(RecordingTarget::new());

    // Arrow keys before opening do nothing.
    assert!(!ctl.handle_key(&normalize_dom_key("ArrowRight"), &config.keys));

    assert!(page.activate_with_key(0, &normalize_dom_key("Enter"), &mut ctl));
    assert!(ctl.handle_key(&normalize_dom_key("ArrowLeft"), &config.keys));
    assert_eq!(ctl.current_index(), Some(2));
    assert!(ctl.handle_key(&normalize_dom_key("ArrowRight"), &config.keys));
    assert_eq!(ctl.current_index(), Some(0));
    assert!(ctl.handle_key(&normalize_dom_key("Escape"), &config.keys));
    assert!(!ctl.is_open());
}

#[test]
fn custom_keys_from_json() {
    let config =
        LightboxConfig::from_json_str(r#"{"keys":{"dismiss":"q","previous":"h","next":"l"}}"#)
            .expect("config");
    let mut doc = page_doc();
    let page = GalleryScanner::new(config.scan.clone()).scan(&mut doc);
    let mut ctl = LightboxController::new(RecordingTarget::new());

    assert!(page.activate(0, &mut ctl));
    assert!(!ctl.handle_key(&normalize_dom_key("ArrowRight"), &config.keys));
    assert!(ctl.handle_key(&normalize_dom_key("l"), &config.keys));
    assert_eq!(ctl.current_index(), Some(1));
    assert!(ctl.handle_key(&normalize_dom_key("q"), &config.keys));
    assert!(!ctl.is_open());
}

#[test]
fn backdrop_and_close_button_dismiss() {
    let mut doc = page_doc();
    let page = GalleryScanner::default().scan(&mut doc);
    let mut ctl = LightboxController::new(RecordingTarget::new());

    page.activate(1, &mut ctl);
    ctl.handle_trigger(Trigger::Backdrop);
    assert!(!ctl.is_open());

    page.activate(1, &mut ctl);
    ctl.handle_trigger(Trigger::NextButton);
    assert_eq!(ctl.current_index(), Some(2));
    ctl.handle_trigger(Trigger::CloseButton);
    assert!(!ctl.is_open());
    assert!(!ctl.target().presentation().scroll_locked);
}
