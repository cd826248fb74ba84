use crate::constants::{CLASS_SHOW, ID_SCROLL_TO_TOP, SEL_PARALLAX_IMAGE};
use crate::dom;
use crate::navigation::{parallax_offset, scroll_top_visible};
use gloo::events::EventListener;
use web_sys as web;

/// Show the back-to-top control past the fold; clicking it scrolls home.
pub fn wire_scroll_to_top(window: &web::Window, document: &web::Document) -> Vec<EventListener> {
    let Some(button) = document.get_element_by_id(ID_SCROLL_TO_TOP) else {
        log::debug!("[nav] no #{} control", ID_SCROLL_TO_TOP);
        return Vec::new();
    };

    let w = window.clone();
    let b = button.clone();
    let on_scroll = EventListener::new(window, "scroll", move |_| {
        dom::set_class(&b, CLASS_SHOW, scroll_top_visible(dom::scroll_y(&w)));
    });

    let w = window.clone();
    let on_click = EventListener::new(&button, "click", move |_| {
        dom::smooth_scroll_to(&w, 0.0);
    });

    vec![on_scroll, on_click]
}

pub fn wire_parallax(window: &web::Window, document: &web::Document) -> Option<EventListener> {
    let image = dom::query(document, SEL_PARALLAX_IMAGE)?;
    let w = window.clone();
    Some(EventListener::new(window, "scroll", move |_| {
        let y = parallax_offset(dom::scroll_y(&w));
        dom::set_style(&image, "transform", &format!("translateY({}px)", y));
    }))
}
