//! Error-code resolution strategies.

use std::collections::HashMap;

use crate::cause::Cause;
use crate::error::{BoxError, CodeResolvingError, ConfigError};

/// Derives the error code for a cause. Deterministic given the same cause;
/// internal failures surface as [`CodeResolvingError`] carrying the key.
pub trait CodeResolver<T: ?Sized>: Send + Sync {
    fn code_for(&self, cause: &Cause<'_, T>) -> Result<String, CodeResolvingError>;
}

/// Resolver returning a constant code for every cause.
pub fn fixed(code: impl Into<String>) -> FixedCodeResolver {
    FixedCodeResolver { code: code.into() }
}

#[derive(Debug, Clone)]
pub struct FixedCodeResolver {
    code: String,
}

impl<T: ?Sized> CodeResolver<T> for FixedCodeResolver {
    fn code_for(&self, _cause: &Cause<'_, T>) -> Result<String, CodeResolvingError> {
        Ok(self.code.clone())
    }
}

/// Resolver looking the code up by cause key. The mapping must be non-empty;
/// a cause whose key is absent is a hard [`UnmappedKey`]
/// failure, never a fallback.
///
/// [`UnmappedKey`]: CodeResolvingError::UnmappedKey
pub fn mapped<I, K, V>(entries: I) -> Result<MappedCodeResolver, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let codes: HashMap<String, String> = entries
        .into_iter()
        .map(|(key, code)| (key.into(), code.into()))
        .collect();
    if codes.is_empty() {
        return Err(ConfigError::EmptyMapping {
            component: "mapped code resolver",
        });
    }
    Ok(MappedCodeResolver { codes })
}

#[derive(Debug, Clone)]
pub struct MappedCodeResolver {
    codes: HashMap<String, String>,
}

impl<T: ?Sized> CodeResolver<T> for MappedCodeResolver {
    fn code_for(&self, cause: &Cause<'_, T>) -> Result<String, CodeResolvingError> {
        self.codes
            .get(cause.key())
            .cloned()
            .ok_or_else(|| CodeResolvingError::UnmappedKey {
                key: cause.key().to_owned(),
            })
    }
}

/// Resolver using the cause key itself as the code. The default strategy.
pub fn from_cause_key() -> CauseKeyCodeResolver {
    CauseKeyCodeResolver
}

#[derive(Debug, Clone, Copy)]
pub struct CauseKeyCodeResolver;

impl<T: ?Sized> CodeResolver<T> for CauseKeyCodeResolver {
    fn code_for(&self, cause: &Cause<'_, T>) -> Result<String, CodeResolvingError> {
        Ok(cause.key().to_owned())
    }
}

/// Resolver computing the code with a caller-supplied function, which has
/// access to both the cause key and its context.
pub fn from_fn<F>(f: F) -> FnCodeResolver<F> {
    FnCodeResolver { f }
}

pub struct FnCodeResolver<F> {
    f: F,
}

impl<T, F> CodeResolver<T> for FnCodeResolver<F>
where
    T: ?Sized,
    F: Fn(&Cause<'_, T>) -> Result<String, BoxError> + Send + Sync,
{
    fn code_for(&self, cause: &Cause<'_, T>) -> Result<String, CodeResolvingError> {
        (self.f)(cause).map_err(|source| CodeResolvingError::Failed {
            key: cause.key().to_owned(),
            source,
        })
    }
}
