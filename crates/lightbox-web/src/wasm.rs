#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use lightbox_core::{
    GalleryId, GalleryScanner, LightboxConfig, LightboxController, LightboxError, ScannedPage,
};
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::bindings::{
    SharedController, bind_gallery_images, bind_global_keys, bind_overlay_controls,
};
use crate::dom::{DomDocument, DomRenderTarget};
use crate::lifecycle::MountPhase;
use crate::{logging, options};

fn host_document() -> Result<Document, LightboxError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(LightboxError::MissingElement("document"))
}

/// Everything that exists once the overlay is in the page.
struct Mounted {
    controller: SharedController,
    page: Rc<ScannedPage<Element>>,
    listeners: Vec<EventListener>,
}

impl Mounted {
    fn new(document: &Document, config: &LightboxConfig) -> Result<Self, LightboxError> {
        let target = DomRenderTarget::mount(document, &config.overlay_id, &config.labels)?;
        let controls = target.controls();
        let controller: SharedController = Rc::new(RefCell::new(LightboxController::new(target)));

        let mut doc = DomDocument::new(document.clone());
        let page = Rc::new(GalleryScanner::new(config.scan.clone()).scan(&mut doc));

        let mut listeners = bind_overlay_controls(&controls, &controller);
        listeners.extend(bind_gallery_images(&page, &controller));
        listeners.push(bind_global_keys(document, &controller, config.keys.clone()));

        info!(
            overlay = %config.overlay_id,
            galleries = page.galleries().len(),
            listeners = listeners.len(),
            "lightbox mounted"
        );
        Ok(Self {
            controller,
            page,
            listeners,
        })
    }

    fn teardown(self) {
        drop(self.listeners);
        match self.controller.try_borrow_mut() {
            Ok(mut ctl) => {
                ctl.close();
                ctl.target_mut().unmount();
                debug!("lightbox unmounted");
            }
            Err(_) => warn!("lightbox teardown skipped: controller busy"),
        };
    }
}

/// Page-wide gallery lightbox.
///
/// One instance owns the single overlay. Typical use from JS:
///
/// ```text
/// const viewer = installLightbox({ gallerySelector: ".photos" });
/// viewer.open(0, 2);
/// ```
#[wasm_bindgen]
pub struct GalleryViewer {
    config: LightboxConfig,
    mounted: Rc<RefCell<Option<Mounted>>>,
    phase: Rc<RefCell<MountPhase>>,
    pending: Option<EventListener>,
}

#[wasm_bindgen]
impl GalleryViewer {
    /// Parse options and install the console log sink. Nothing touches the
    /// page until [`install`](Self::install).
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<GalleryViewer, JsValue> {
        let json = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => Some(
                js_sys::JSON::stringify(&value)?
                    .as_string()
                    .unwrap_or_default(),
            ),
            _ => None,
        };
        let config = options::config_from_json(json.as_deref())?;
        logging::init(&config.log_level);
        Ok(Self {
            config,
            mounted: Rc::new(RefCell::new(None)),
            phase: Rc::new(RefCell::new(MountPhase::Idle)),
            pending: None,
        })
    }

    /// Mount the overlay and bind every gallery.
    ///
    /// While the document is still loading, mounting is deferred until
    /// `DOMContentLoaded`; a deferred failure shows up in
    /// [`last_error`](Self::last_error). Calling again while mounted or
    /// waiting is a no-op; after a failure it retries.
    pub fn install(&mut self) -> Result<(), JsValue> {
        if !self.phase.borrow().accepts_install() {
            return Ok(());
        }
        let document = host_document()?;

        if options::defer_until_ready(&document.ready_state()) {
            debug!("deferring lightbox mount until DOMContentLoaded");
            *self.phase.borrow_mut() = MountPhase::Deferred;
            let slot = Rc::clone(&self.mounted);
            let phase = Rc::clone(&self.phase);
            let config = self.config.clone();
            let doc = document.clone();
            self.pending = Some(EventListener::once(
                &document,
                "DOMContentLoaded",
                move |_event| {
                    let outcome = phase.borrow_mut().settle(Mounted::new(&doc, &config));
                    match outcome {
                        Ok(mounted) => *slot.borrow_mut() = Some(mounted),
                        Err(err) => error!(%err, "deferred lightbox mount failed"),
                    }
                },
            ));
            return Ok(());
        }

        self.pending = None;
        let mounted = self
            .phase
            .borrow_mut()
            .settle(Mounted::new(&document, &self.config))?;
        *self.mounted.borrow_mut() = Some(mounted);
        Ok(())
    }

    /// Message of the last failed mount, `undefined` otherwise.
    #[wasm_bindgen(getter, js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.phase.borrow().last_error().map(str::to_string)
    }

    /// Open gallery `gallery` (document order) at `index`; out-of-range
    /// indices wrap. Returns `false` if not mounted or the gallery is unknown.
    pub fn open(&self, gallery: u32, index: i32) -> bool {
        let mounted = self.mounted.borrow();
        let Some(m) = mounted.as_ref() else {
            return false;
        };
        let Ok(mut ctl) = m.controller.try_borrow_mut() else {
            return false;
        };
        m.page
            .open(GalleryId(gallery as usize), i64::from(index), &mut *ctl)
    }

    pub fn close(&self) {
        self.with_controller(|ctl| ctl.close());
    }

    pub fn next(&self) {
        self.with_controller(|ctl| ctl.next());
    }

    pub fn previous(&self) {
        self.with_controller(|ctl| ctl.previous());
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.with_controller(|ctl| ctl.is_open()).unwrap_or(false)
    }

    /// Index on display, `undefined` while closed.
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> Option<u32> {
        self.with_controller(|ctl| ctl.current_index())
            .flatten()
            .and_then(|i| u32::try_from(i).ok())
    }

    #[wasm_bindgen(getter, js_name = galleryCount)]
    pub fn gallery_count(&self) -> u32 {
        self.mounted
            .borrow()
            .as_ref()
            .map_or(0, |m| m.page.galleries().len() as u32)
    }

    #[wasm_bindgen(getter, js_name = imageCount)]
    pub fn image_count(&self) -> u32 {
        self.mounted
            .borrow()
            .as_ref()
            .map_or(0, |m| m.page.image_count() as u32)
    }

    /// Unbind all listeners, remove the overlay and restore page scrolling.
    pub fn destroy(&mut self) {
        self.pending = None;
        *self.phase.borrow_mut() = MountPhase::Idle;
        if let Some(mounted) = self.mounted.borrow_mut().take() {
            mounted.teardown();
        }
    }
}

impl GalleryViewer {
    fn with_controller<T>(
        &self,
        f: impl FnOnce(&mut LightboxController<DomRenderTarget>) -> T,
    ) -> Option<T> {
        let mounted = self.mounted.borrow();
        let m = mounted.as_ref()?;
        let mut ctl = m.controller.try_borrow_mut().ok()?;
        Some(f(&mut ctl))
    }
}

/// Create a viewer from `options` and install it in one step.
#[wasm_bindgen(js_name = installLightbox)]
pub fn install_lightbox(options: Option<JsValue>) -> Result<GalleryViewer, JsValue> {
    let mut viewer = GalleryViewer::new(options)?;
    viewer.install()?;
    Ok(viewer)
}
