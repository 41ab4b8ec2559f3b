#![forbid(unsafe_code)]

//! DOM implementations of the core host contracts.

use lightbox_core::{ControlLabels, GalleryDocument, ImageRef, LightboxError, RenderTarget};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Node, NodeList};

use crate::options::{INTERACTIVE_ATTRIBUTES, body_overflow_value, display_value};

pub(crate) fn dom_error(err: JsValue) -> LightboxError {
    LightboxError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, LightboxError> {
    let el = document.create_element(tag).map_err(dom_error)?;
    el.set_class_name(class);
    el.dyn_into::<T>()
        .map_err(|_| LightboxError::Dom(format!("<{tag}> did not create the expected element")))
}

fn create_button(
    document: &Document,
    class: &str,
    label: &str,
    glyph: &str,
) -> Result<HtmlElement, LightboxError> {
    let button: HtmlElement = create(document, "button", class)?;
    button.set_attribute("type", "button").map_err(dom_error)?;
    button.set_attribute("aria-label", label).map_err(dom_error)?;
    button.set_text_content(Some(glyph));
    Ok(button)
}

fn set_display(el: &HtmlElement, visible: bool) {
    let _ = el.style().set_property("display", display_value(visible));
}

/// Elements that receive pointer triggers, cloned out before the target is
/// handed to the controller.
#[derive(Clone)]
pub(crate) struct OverlayControls {
    pub backdrop: Element,
    pub close: Element,
    pub previous: Element,
    pub next: Element,
}

/// The lightbox overlay mounted into `document.body`.
///
/// ```text
/// div#<overlay_id>.lightbox
/// ├── div.lightbox-overlay          (backdrop)
/// └── div.lightbox-content
///     ├── button.lightbox-close
///     ├── button.lightbox-prev
///     ├── button.lightbox-next
///     ├── img.lightbox-image
///     └── div.lightbox-caption
/// ```
pub(crate) struct DomRenderTarget {
    body: HtmlElement,
    root: HtmlElement,
    backdrop: Element,
    close: HtmlElement,
    previous: HtmlElement,
    next: HtmlElement,
    image: HtmlImageElement,
    caption: Element,
}

impl DomRenderTarget {
    /// Build the overlay (hidden) and append it to `body`.
    pub(crate) fn mount(
        document: &Document,
        overlay_id: &str,
        labels: &ControlLabels,
    ) -> Result<Self, LightboxError> {
        let body = document.body().ok_or(LightboxError::MissingElement("body"))?;
        if document.get_element_by_id(overlay_id).is_some() {
            return Err(LightboxError::Dom(format!(
                "an element with id {overlay_id:?} already exists"
            )));
        }

        let root: HtmlElement = create(document, "div", "lightbox")?;
        root.set_id(overlay_id);
        set_display(&root, false);

        let backdrop: Element = create(document, "div", "lightbox-overlay")?;
        let content: Element = create(document, "div", "lightbox-content")?;
        let close = create_button(document, "lightbox-close", &labels.close, "\u{00d7}")?;
        let previous = create_button(document, "lightbox-prev", &labels.previous, "\u{2039}")?;
        let next = create_button(document, "lightbox-next", &labels.next, "\u{203a}")?;
        let image: HtmlImageElement = create(document, "img", "lightbox-image")?;
        image.set_alt("");
        let caption: Element = create(document, "div", "lightbox-caption")?;

        let children: [&Node; 5] = [
            close.as_ref(),
            previous.as_ref(),
            next.as_ref(),
            image.as_ref(),
            caption.as_ref(),
        ];
        for child in children {
            content.append_child(child).map_err(dom_error)?;
        }
        root.append_child(&backdrop).map_err(dom_error)?;
        root.append_child(&content).map_err(dom_error)?;
        body.append_child(&root).map_err(dom_error)?;

        Ok(Self {
            body,
            root,
            backdrop,
            close,
            previous,
            next,
            image,
            caption,
        })
    }

    pub(crate) fn controls(&self) -> OverlayControls {
        OverlayControls {
            backdrop: self.backdrop.clone(),
            close: self.close.clone().into(),
            previous: self.previous.clone().into(),
            next: self.next.clone().into(),
        }
    }

    /// Remove the overlay and release the scroll lock.
    pub(crate) fn unmount(&mut self) {
        self.set_scroll_locked(false);
        self.root.remove();
    }
}

impl RenderTarget for DomRenderTarget {
    fn set_overlay_visible(&mut self, visible: bool) {
        set_display(&self.root, visible);
    }

    fn set_image(&mut self, source: &str, label: &str) {
        self.image.set_src(source);
        self.image.set_alt(label);
    }

    fn set_caption(&mut self, text: &str) {
        self.caption.set_text_content(Some(text));
    }

    fn set_nav_visible(&mut self, visible: bool) {
        set_display(&self.previous, visible);
        set_display(&self.next, visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let _ = self
            .body
            .style()
            .set_property("overflow", body_overflow_value(locked));
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// [`GalleryDocument`] over the live page.
pub(crate) struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl GalleryDocument for DomDocument {
    type Element = Element;

    fn gallery_containers(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements_of(&list),
            Err(err) => {
                warn!(selector, error = ?err, "gallery selector rejected by host");
                Vec::new()
            }
        }
    }

    fn container_images(&self, container: &Element, selector: &str) -> Vec<Element> {
        match container.query_selector_all(selector) {
            Ok(list) => elements_of(&list),
            Err(err) => {
                warn!(selector, error = ?err, "image selector rejected by host");
                Vec::new()
            }
        }
    }

    fn read_image(&self, image: &Element) -> ImageRef {
        match image.dyn_ref::<HtmlImageElement>() {
            // `src` is the resolved absolute URL, as the browser would load it.
            Some(img) => ImageRef::new(img.src(), img.alt()),
            None => ImageRef::new(
                image.get_attribute("src").unwrap_or_default(),
                image.get_attribute("alt").unwrap_or_default(),
            ),
        }
    }

    fn mark_interactive(&mut self, image: &Element) {
        for (name, value) in INTERACTIVE_ATTRIBUTES {
            if let Err(err) = image.set_attribute(name, value) {
                warn!(attribute = name, error = ?err, "gallery image not made interactive");
            }
        }
    }
}
