use crate::constants::*;
use crate::dom;
use gloo::events::EventListener;
use web_sys as web;

fn on_hover(
    el: &web::Element,
    listeners: &mut Vec<EventListener>,
    enter: impl Fn(&web::Element) + 'static,
    leave: impl Fn(&web::Element) + 'static,
) {
    let target = el.clone();
    listeners.push(EventListener::new(el, "mouseenter", move |_| enter(&target)));
    let target = el.clone();
    listeners.push(EventListener::new(el, "mouseleave", move |_| leave(&target)));
}

fn style_child(parent: &web::Element, selector: &str, property: &str, value: &str) {
    if let Some(child) = dom::query_in(parent, selector) {
        dom::set_style(&child, property, value);
    }
}

/// Lift service cards, fade project overlays and nudge the CTA arrow on hover.
pub fn wire_hover_effects(document: &web::Document) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for card in dom::query_all(document, SEL_SERVICE_CARDS) {
        on_hover(
            &card,
            &mut listeners,
            |el| dom::set_style(el, "transform", SERVICE_HOVER_TRANSFORM),
            |el| dom::set_style(el, "transform", SERVICE_REST_TRANSFORM),
        );
    }

    for card in dom::query_all(document, SEL_PROJECT_CARDS) {
        on_hover(
            &card,
            &mut listeners,
            |el| style_child(el, SEL_PROJECT_OVERLAY, "opacity", "1"),
            |el| style_child(el, SEL_PROJECT_OVERLAY, "opacity", "0"),
        );
    }

    if let Some(cta) = dom::query(document, SEL_CTA_BUTTON) {
        on_hover(
            &cta,
            &mut listeners,
            |el| style_child(el, SEL_CTA_ARROW, "transform", CTA_ARROW_HOVER_TRANSFORM),
            |el| style_child(el, SEL_CTA_ARROW, "transform", CTA_ARROW_REST_TRANSFORM),
        );
    }

    log::debug!("[site] {} hover listeners", listeners.len());
    listeners
}
