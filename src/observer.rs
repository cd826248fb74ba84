use crate::config::{RevealDetection, RevealMode};
use crate::constants::*;
use crate::dom;
use crate::error::SiteError;
use crate::reveal::{parse_delay, RevealAction, RevealController};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Shows `.hidden` elements as they scroll into view.
pub struct Reveal {
    window: web::Window,
    elements: Vec<web::Element>,
    controller: RefCell<RevealController>,
    timers: RefCell<HashMap<usize, Timeout>>,
    observer: RefCell<Option<(web::IntersectionObserver, ObserverCallback)>>,
    scroll_listener: RefCell<Option<EventListener>>,
}

impl Reveal {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        mode: RevealMode,
        detection: RevealDetection,
    ) -> Result<Rc<Self>, SiteError> {
        let elements = dom::query_all(document, SEL_REVEAL);
        let delays = elements
            .iter()
            .map(|el| parse_delay(el.get_attribute("data-delay").as_deref()))
            .collect();
        let reveal = Rc::new(Self {
            window: window.clone(),
            elements,
            controller: RefCell::new(RevealController::new(mode, delays)),
            timers: RefCell::new(HashMap::new()),
            observer: RefCell::new(None),
            scroll_listener: RefCell::new(None),
        });
        log::info!(
            "[reveal] {} elements, mode={:?}, detection={:?}",
            reveal.elements.len(),
            mode,
            detection
        );
        if reveal.elements.is_empty() {
            return Ok(reveal);
        }
        match detection {
            RevealDetection::Observer => reveal.observe()?,
            RevealDetection::ScrollCheck => reveal.listen_scroll(),
        }
        Ok(reveal)
    }

    fn observe(self: &Rc<Self>) -> Result<(), SiteError> {
        let weak = Rc::downgrade(self);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let Some(reveal) = weak.upgrade() else {
                    return;
                };
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    if let Some(i) = reveal.elements.iter().position(|el| *el == target) {
                        reveal.report(i, entry.is_intersecting());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| SiteError::Js(format!("{:?}", e)))?;
        for el in &self.elements {
            observer.observe(el);
        }
        *self.observer.borrow_mut() = Some((observer, callback));
        Ok(())
    }

    fn listen_scroll(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&self.window, "scroll", move |_| {
            if let Some(reveal) = weak.upgrade() {
                reveal.check_all();
            }
        });
        *self.scroll_listener.borrow_mut() = Some(listener);
        // Elements already on screen at load.
        self.check_all();
    }

    fn check_all(self: &Rc<Self>) {
        let viewport = dom::viewport(&self.window);
        for (i, el) in self.elements.iter().enumerate() {
            self.report(i, viewport.shows(&dom::rect_of(el)));
        }
    }

    fn report(self: &Rc<Self>, index: usize, visible: bool) {
        let action = self.controller.borrow_mut().observe(index, visible);
        match action {
            RevealAction::None => {}
            RevealAction::Schedule { index, delay_ms } => {
                let weak: Weak<Self> = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    if let Some(reveal) = weak.upgrade() {
                        reveal.show(index);
                    }
                });
                self.timers.borrow_mut().insert(index, timeout);
            }
            RevealAction::Cancel { index } => {
                self.timers.borrow_mut().remove(&index);
            }
            RevealAction::Hide { index } => {
                dom::set_class(&self.elements[index], CLASS_SHOW, false);
            }
        }
    }

    fn show(&self, index: usize) {
        if !self.controller.borrow_mut().fire(index) {
            return;
        }
        let el = &self.elements[index];
        dom::set_class(el, CLASS_SHOW, true);
        log::debug!("[reveal] shown #{}", index);
        if let Some((observer, _)) = self.observer.borrow().as_ref() {
            if self.controller.borrow().is_settled() {
                observer.disconnect();
            }
        }
    }

    /// Stop observing and drop any pending timers.
    pub fn dispose(&self) {
        if let Some((observer, _callback)) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.scroll_listener.borrow_mut().take();
        self.timers.borrow_mut().clear();
    }
}
