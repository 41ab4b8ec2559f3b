#![forbid(unsafe_code)]

//! Event-listener registration.
//!
//! Binding is a separate step from the state machine: these functions only
//! translate DOM events into controller calls. Every listener is a RAII
//! [`EventListener`]; dropping the returned vector unbinds everything.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use lightbox_core::{KeyBindings, LightboxController, ScannedPage, Trigger, normalize_dom_key};
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

use crate::dom::{DomRenderTarget, OverlayControls};

pub(crate) type SharedController = Rc<RefCell<LightboxController<DomRenderTarget>>>;

/// Run `f` against the controller unless a transition is already in flight.
fn with_controller<T>(
    controller: &SharedController,
    f: impl FnOnce(&mut LightboxController<DomRenderTarget>) -> T,
) -> Option<T> {
    match controller.try_borrow_mut() {
        Ok(mut ctl) => Some(f(&mut ctl)),
        Err(_) => {
            warn!("lightbox event dropped: controller busy");
            None
        }
    }
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Click and keyboard activation for every scanned gallery image.
pub(crate) fn bind_gallery_images(
    page: &Rc<ScannedPage<Element>>,
    controller: &SharedController,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(page.bindings().len() * 2);
    for (i, binding) in page.bindings().iter().enumerate() {
        let (p, ctl) = (Rc::clone(page), Rc::clone(controller));
        listeners.push(EventListener::new(&binding.element, "click", move |_event| {
            with_controller(&ctl, |ctl| p.activate(i, ctl));
        }));

        let (p, ctl) = (Rc::clone(page), Rc::clone(controller));
        listeners.push(EventListener::new(&binding.element, "keypress", move |event| {
            let Some(key) = key_of(event) else {
                return;
            };
            let opened = with_controller(&ctl, |ctl| {
                p.activate_with_key(i, &normalize_dom_key(&key), ctl)
            });
            if opened == Some(true) {
                event.prevent_default();
            }
        }));
    }
    listeners
}

/// Clicks on the overlay's backdrop and buttons.
pub(crate) fn bind_overlay_controls(
    controls: &OverlayControls,
    controller: &SharedController,
) -> Vec<EventListener> {
    [
        (&controls.close, Trigger::CloseButton),
        (&controls.backdrop, Trigger::Backdrop),
        (&controls.previous, Trigger::PreviousButton),
        (&controls.next, Trigger::NextButton),
    ]
    .into_iter()
    .map(|(element, trigger)| {
        let ctl = Rc::clone(controller);
        EventListener::new(element, "click", move |_event| {
            trace!(?trigger, "overlay control clicked");
            with_controller(&ctl, |ctl| ctl.handle_trigger(trigger));
        })
    })
    .collect()
}

/// Global `keydown` handler; the controller ignores keys while closed.
pub(crate) fn bind_global_keys(
    document: &Document,
    controller: &SharedController,
    keys: KeyBindings,
) -> EventListener {
    let ctl = Rc::clone(controller);
    EventListener::new(document, "keydown", move |event| {
        let Some(key) = key_of(event) else {
            return;
        };
        let handled = with_controller(&ctl, |ctl| ctl.handle_key(&normalize_dom_key(&key), &keys));
        if handled == Some(true) {
            event.prevent_default();
        }
    })
}
