use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    #[cfg(test)]
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, SiteError> {
        match code.trim() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(SiteError::UnknownLanguage(other.to_string())),
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

/// Display strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub slogan: &'static str,
    pub services_title: &'static str,
    pub footer: &'static str,
    pub email_label: &'static str,
}

impl Strings {
    /// `(element id, text)` pairs to write into the page.
    pub fn entries(&self) -> [(&'static str, &'static str); 4] {
        [
            ("slogan", self.slogan),
            ("services-title", self.services_title),
            ("footer-text", self.footer),
            ("email-label", self.email_label),
        ]
    }
}

pub static EN: Strings = Strings {
    slogan: "Websites that move with you",
    services_title: "Our services",
    footer: "All rights reserved.",
    email_label: "Email us",
};

pub static FR: Strings = Strings {
    slogan: "Des sites qui bougent avec vous",
    services_title: "Nos services",
    footer: "Tous droits réservés.",
    email_label: "Écrivez-nous",
};

/// Single key-value slot holding the language preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), SiteError>;
}

/// In-memory store, used when browser storage is unavailable.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Stored preference, defaulting to English when unset or unrecognised.
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    match store.load() {
        Some(code) => Language::from_code(&code).unwrap_or_else(|e| {
            log::warn!("[lang] {}; using {}", e, Language::default().code());
            Language::default()
        }),
        None => Language::default(),
    }
}

/// Persist a user selection. Unknown codes are rejected and nothing is written.
pub fn select_language(store: &mut dyn PreferenceStore, code: &str) -> Result<Language, SiteError> {
    let lang = Language::from_code(code)?;
    store.save(lang.code())?;
    Ok(lang)
}
