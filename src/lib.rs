#![cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
use crate::site::Site;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod geometry;
mod i18n;
mod language;
mod marker;
mod navigation;
mod observer;
mod reveal;
mod sections;
mod site;
mod tracker;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    static LIFECYCLE: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if navigation::is_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return;
    }
    wire_lifecycle();
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let body = document.body();
    let config = SiteConfig::from_lookup(|key| body.as_ref().and_then(|b| b.get_attribute(key)));
    let site = Site::mount(&window, &document, config)?;
    SITE.with(|s| {
        if let Some(old) = s.borrow_mut().replace(site) {
            old.dispose();
        }
    });
    Ok(())
}

/// Tear down on navigation away; remount when restored from the back/forward cache.
fn wire_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    let hide = EventListener::new(&window, "pagehide", |_| {
        if let Some(site) = SITE.with(|s| s.borrow_mut().take()) {
            site.dispose();
        }
    });
    let show = EventListener::new(&window, "pageshow", |event| {
        let restored = event
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if restored && SITE.with(|s| s.borrow().is_none()) {
            log::info!("[site] restored from cache, remounting");
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        }
    });
    LIFECYCLE.with(|l| l.borrow_mut().extend([hide, show]));
}
