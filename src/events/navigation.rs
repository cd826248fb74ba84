use crate::constants::{HASH_SCROLL_DELAY_MS, SEL_HASH_LINKS};
use crate::dom;
use crate::navigation::{anchor_scroll_top, hash_target};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys as web;

fn scroll_to_anchor(window: &web::Window, document: &web::Document, target: &str) -> bool {
    match dom::query(document, target) {
        Some(section) => {
            dom::smooth_scroll_to(window, anchor_scroll_top(dom::offset_top(&section)));
            true
        }
        None => false,
    }
}

/// Smooth-scroll in-page links below the sticky header and record them in history.
pub fn wire_hash_links(window: &web::Window, document: &web::Document) -> Vec<EventListener> {
    dom::query_all(document, SEL_HASH_LINKS)
        .into_iter()
        .map(|link| {
            let window = window.clone();
            let document = document.clone();
            let link_for_click = link.clone();
            EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let Some(href) = link_for_click.get_attribute("href") else {
                        return;
                    };
                    let Some(target) = hash_target(&href) else {
                        return;
                    };
                    if scroll_to_anchor(&window, &document, target) {
                        if let Ok(history) = window.history() {
                            _ = history.push_state_with_url(&JsValue::NULL, "", Some(target));
                        }
                        log::debug!("[nav] {}", target);
                    }
                },
            )
        })
        .collect()
}

/// Honour a `#fragment` in the initial URL once layout has settled.
pub fn scroll_to_hash_on_load(window: &web::Window, document: &web::Document) -> Option<Timeout> {
    let hash = window.location().hash().ok()?;
    hash_target(&hash)?;
    let window = window.clone();
    let document = document.clone();
    Some(Timeout::new(HASH_SCROLL_DELAY_MS, move || {
        if !scroll_to_anchor(&window, &document, &hash) {
            log::debug!("[nav] no element for {}", hash);
        }
    }))
}
