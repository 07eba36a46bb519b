//! Localized UI strings.
//!
//! Messages are looked up in the active locale first, then in the fallback
//! locale, and finally replaced by [`FALLBACK_MESSAGE`] so a lookup always
//! yields displayable text.

mod catalog;
mod errors;

pub use catalog::Catalog;
pub use errors::I18nError;

use std::{collections::BTreeMap, fmt, str::FromStr, sync::Arc};

use crate::config::I18nConfig;

/// Text shown when a key is missing from every locale consulted.
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "pt" => Ok(Locale::Pt),
            _ => Err(I18nError::UnknownLocale(s.to_string())),
        }
    }
}

/// Keys of the messages the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LoginTitle,
    LoginHandle,
    Next,
    Password,
    HelloName,
    NoSuchUser,
    WrongPassword,
    GenericError,
    CantTalkNetDown,
    ErrHttp404,
    ErrHttp403,
    ErrHttp500,
    ErrHttpOther,
    DefaultLoginHandleHelp,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::LoginTitle => "login_title",
            MessageKey::LoginHandle => "login_handle",
            MessageKey::Next => "next",
            MessageKey::Password => "password",
            MessageKey::HelloName => "hello_name",
            MessageKey::NoSuchUser => "no_such_user",
            MessageKey::WrongPassword => "wrong_password",
            MessageKey::GenericError => "generic_error",
            MessageKey::CantTalkNetDown => "cant_talk_net_down",
            MessageKey::ErrHttp404 => "err_http_404",
            MessageKey::ErrHttp403 => "err_http_403",
            MessageKey::ErrHttp500 => "err_http_500",
            MessageKey::ErrHttpOther => "err_http_other",
            MessageKey::DefaultLoginHandleHelp => "default_login_handle_help",
        }
    }
}

/// Named values substituted into `{name}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to the display form of `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.0.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A message lookup function: key plus parameters in, display text out.
pub trait Translate {
    fn translate(&self, key: &str, params: &Params) -> String;

    fn t(&self, key: MessageKey) -> String {
        self.translate(key.as_str(), &Params::new())
    }

    fn t_with(&self, key: MessageKey, params: &Params) -> String {
        self.translate(key.as_str(), params)
    }
}

impl<F> Translate for F
where
    F: Fn(&str, &Params) -> String,
{
    fn translate(&self, key: &str, params: &Params) -> String {
        self(key, params)
    }
}

/// Translator bound to an active locale and a fallback locale.
#[derive(Debug, Clone)]
pub struct I18n {
    catalog: Arc<Catalog>,
    locale: Locale,
    fallback_locale: Locale,
}

impl I18n {
    /// Builtin catalog with the given active locale, falling back to English.
    pub fn new(locale: Locale) -> Self {
        Self::with_catalog(Catalog::builtin(), locale, Locale::default())
    }

    pub fn with_catalog(catalog: Catalog, locale: Locale, fallback_locale: Locale) -> Self {
        Self {
            catalog: Arc::new(catalog),
            locale,
            fallback_locale,
        }
    }

    pub fn from_config(config: &I18nConfig) -> Result<Self, I18nError> {
        Ok(Self::with_catalog(
            Catalog::builtin(),
            config.locale.parse()?,
            config.fallback_locale.parse()?,
        ))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn fallback_locale(&self) -> Locale {
        self.fallback_locale
    }

    /// Language tag for the rendered document.
    pub fn lang(&self) -> &'static str {
        self.locale.code()
    }

    /// Non-empty template for `key`, from the active locale or else the
    /// fallback locale.
    fn template(&self, key: &str) -> Option<&str> {
        let lookup = |locale| self.catalog.get(locale, key).filter(|t| !t.is_empty());
        if let Some(template) = lookup(self.locale) {
            return Some(template);
        }
        let template = lookup(self.fallback_locale);
        if template.is_some() {
            tracing::debug!(key, locale = %self.locale, fallback = %self.fallback_locale, "Using fallback locale");
        }
        template
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Translate for I18n {
    fn translate(&self, key: &str, params: &Params) -> String {
        match self.template(key) {
            Some(template) => interpolate(template, params),
            None => {
                tracing::warn!(key, locale = %self.locale, "Missing translation");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Replaces every `{name}` with its bound value. Placeholders without a
/// binding are kept as written.
pub fn interpolate(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
