use crate::constants::{ID_LANGUAGE_SELECT, LANGUAGE_STORAGE_KEY};
use crate::error::SiteError;
use crate::i18n::{load_language, select_language, Language, MemoryStore, PreferenceStore};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `localStorage` slot holding the raw language code.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Result<Self, SiteError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(SiteError::Storage("localStorage is not available".into())),
            Err(e) => Err(SiteError::Storage(format!("{:?}", e))),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        self.storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(LANGUAGE_STORAGE_KEY, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }
}

/// Write every translated string into the page and sync the selector.
pub fn apply(document: &web::Document, lang: Language) {
    for (id, text) in lang.strings().entries() {
        match document.get_element_by_id(id) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::debug!("[lang] no #{} element", id),
        }
    }
    if let Some(select) = selector(document) {
        select.set_value(lang.code());
    }
}

fn selector(document: &web::Document) -> Option<web::HtmlSelectElement> {
    document
        .get_element_by_id(ID_LANGUAGE_SELECT)?
        .dyn_into::<web::HtmlSelectElement>()
        .ok()
}

/// Language selector wiring; dropping it removes the change listener.
pub struct LanguageToggle {
    _listener: Option<EventListener>,
}

impl LanguageToggle {
    pub fn mount(window: &web::Window, document: &web::Document) -> Self {
        let store: Box<dyn PreferenceStore> = match LocalStore::open(window) {
            Ok(s) => Box::new(s),
            Err(e) => {
                log::warn!("[lang] {}; preference will not persist", e);
                Box::new(MemoryStore::default())
            }
        };
        let lang = load_language(store.as_ref());
        apply(document, lang);
        log::info!("[lang] applied {}", lang.code());

        let Some(select) = selector(document) else {
            return Self { _listener: None };
        };
        let store = Rc::new(RefCell::new(store));
        let doc = document.clone();
        let select_for_change = select.clone();
        let listener = EventListener::new(&select, "change", move |_| {
            let code = select_for_change.value();
            let result = select_language(store.borrow_mut().as_mut(), &code);
            match result {
                Ok(lang) => {
                    apply(&doc, lang);
                    log::info!("[lang] switched to {}", lang.code());
                }
                Err(e) => log::warn!("[lang] {}", e),
            }
        });
        Self {
            _listener: Some(listener),
        }
    }
}
