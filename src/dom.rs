//! Lifecycle-scoped wrappers around raw DOM listeners and intersection
//! observers.
//!
//! Every effect on this page owns its browser-side resources through one of
//! these guards. A guard detaches its listener / disconnects its observer when
//! released, release is idempotent, and dropping an already-released guard is
//! a no-op. Guards are kept as the value of the `Effect` that created them, so
//! they die with the component that mounted them.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// An event listener attached to a target, removed when the handle goes away.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl ListenerHandle {
    /// Attach `handler` to `target` for `event`.
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Like [`listen`](Self::listen), but registers a passive listener so the
    /// handler can never block scrolling.
    pub fn listen_passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        }
    }

    /// Detach the listener. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
            log::debug!("released {} listener", self.event);
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// An `IntersectionObserver` plus the closure backing its callback,
/// disconnected when the handle goes away.
pub struct ObserverHandle {
    observer: Option<web::IntersectionObserver>,
    _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl ObserverHandle {
    /// Build an observer with `init` options; `on_entries` receives each
    /// notification batch. Returns `None` when the browser rejects the
    /// options.
    pub fn new(
        init: &web::IntersectionObserverInit,
        mut on_entries: impl FnMut(&[web::IntersectionObserverEntry]) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let entries: Vec<web::IntersectionObserverEntry> =
                    entries.iter().filter_map(|e| e.dyn_into().ok()).collect();
                on_entries(&entries);
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), init)
                .ok()?;
        Some(Self {
            observer: Some(observer),
            _closure: closure,
        })
    }

    pub fn observe(&self, element: &web::Element) {
        if let Some(observer) = &self.observer {
            observer.observe(element);
        }
    }

    /// Disconnect the observer. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
            log::debug!("released intersection observer");
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.release();
    }
}
