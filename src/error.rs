/// Failure modes surfaced by the page behaviours.
///
/// Optional elements never produce an error; their effect is skipped.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("missing required element `{0}`")]
    MissingElement(&'static str),
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("browser call failed: {0}")]
    Js(String),
}
