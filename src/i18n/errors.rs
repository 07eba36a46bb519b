/// Localization errors.
#[derive(thiserror::Error, Debug)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),
}
