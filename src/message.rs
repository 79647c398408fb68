//! Messages, locales and the pluggable translation hook.
//!
//! A [`Message`] is a text plus an optional [`Translator`]. Translation is
//! the one place the library recovers locally: the [`or_default`] decorator
//! replaces a `LocaleNotSupported` failure with a configured default string,
//! while every other translation failure propagates unchanged.
//!
//! # Examples
//!
//! ```
//! use faultline::message::{or_default, Locale, Message, Translator};
//! use faultline::error::TranslationError;
//! use std::sync::Arc;
//!
//! struct German;
//!
//! impl Translator for German {
//!     fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
//!         match locale.tag() {
//!             "de" => Ok(format!("[de] {text}")),
//!             _ => Err(TranslationError::LocaleNotSupported(locale.clone())),
//!         }
//!     }
//! }
//!
//! let message = Message::localized("failure", Arc::new(or_default(German, "failure")));
//! assert_eq!(message.translated(&Locale::new("de"))?, "[de] failure");
//! assert_eq!(message.translated(&Locale::new("fr"))?, "failure");
//! # Ok::<(), TranslationError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::TranslationError;

/// A language tag, e.g. `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Translates a message text into a locale.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError>;
}

impl<F> Translator for F
where
    F: Fn(&str, &Locale) -> Result<String, TranslationError> + Send + Sync,
{
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
        (self)(text, locale)
    }
}

/// Decorator returning a configured default text when the wrapped translator
/// signals `LocaleNotSupported`. Any other failure propagates unchanged.
pub fn or_default<T: Translator>(inner: T, fallback: impl Into<String>) -> OrDefault<T> {
    OrDefault {
        inner,
        fallback: fallback.into(),
    }
}

pub struct OrDefault<T> {
    inner: T,
    fallback: String,
}

impl<T: Translator> Translator for OrDefault<T> {
    fn translate(&self, text: &str, locale: &Locale) -> Result<String, TranslationError> {
        match self.inner.translate(text, locale) {
            Err(TranslationError::LocaleNotSupported(_)) => Ok(self.fallback.clone()),
            other => other,
        }
    }
}

/// A possibly-localizable message text.
///
/// Equality, ordering into payloads and serialization all go by the text;
/// the translator is invisible to them.
#[derive(Clone)]
pub struct Message {
    text: String,
    translator: Option<Arc<dyn Translator>>,
}

impl Message {
    /// A message with no translation hook; [`translated`](Self::translated)
    /// returns the text as-is for every locale.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translator: None,
        }
    }

    pub fn localized(text: impl Into<String>, translator: Arc<dyn Translator>) -> Self {
        Self {
            text: text.into(),
            translator: Some(translator),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn translated(&self, locale: &Locale) -> Result<String, TranslationError> {
        match &self.translator {
            Some(translator) => translator.translate(&self.text, locale),
            None => Ok(self.text.clone()),
        }
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Message {}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
