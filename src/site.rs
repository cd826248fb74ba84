use crate::config::SiteConfig;
use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::events;
use crate::frame::FrameLoop;
use crate::language::LanguageToggle;
use crate::marker::Marker;
use crate::observer::Reveal;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything mounted on the page; `dispose` tears it all down.
pub struct Site {
    frame_loop: FrameLoop,
    reveal: Rc<Reveal>,
    _language: LanguageToggle,
    resize_timer: Rc<RefCell<Option<Timeout>>>,
    hash_timer: Option<Timeout>,
    listeners: Vec<EventListener>,
}

impl Site {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        config: SiteConfig,
    ) -> anyhow::Result<Self> {
        let marker = Rc::new(RefCell::new(Marker::mount(window, document, config.strategy)?));
        log::info!("[tracker] strategy={:?}", config.strategy);

        let marker_tick = marker.clone();
        let frame_loop = FrameLoop::start(move || marker_tick.borrow_mut().frame());

        let reveal = Reveal::mount(
            window,
            document,
            config.reveal_mode,
            config.reveal_detection,
        )?;

        let mut listeners = Vec::new();

        let resize_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        {
            let timer = resize_timer.clone();
            let marker = marker.clone();
            listeners.push(EventListener::new(window, "resize", move |_| {
                let marker = marker.clone();
                // Replacing the handle cancels the previous timeout.
                *timer.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    marker.borrow_mut().place();
                }));
            }));
        }

        {
            let marker_click = marker.clone();
            let dot = marker.borrow().dot().clone();
            listeners.push(EventListener::new(&dot, "click", move |_| {
                marker_click.borrow().jump_next();
            }));
        }

        listeners.extend(events::wire_scroll_to_top(window, document));
        listeners.extend(events::wire_hover_effects(document));
        listeners.extend(events::wire_hash_links(window, document));
        listeners.extend(events::wire_parallax(window, document));
        let hash_timer = events::scroll_to_hash_on_load(window, document);

        let language = LanguageToggle::mount(window, document);

        log::info!("[site] mounted with {} listeners", listeners.len());
        Ok(Self {
            frame_loop,
            reveal,
            _language: language,
            resize_timer,
            hash_timer,
            listeners,
        })
    }

    /// Stop the frame loop, cancel timers and remove listeners.
    pub fn dispose(self) {
        self.frame_loop.stop();
        self.reveal.dispose();
        self.resize_timer.borrow_mut().take();
        drop(self.hash_timer);
        drop(self.listeners);
        log::info!("[site] disposed");
    }
}
