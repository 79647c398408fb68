//! Data-source resolution: which part of the request carried the invalid
//! input.

use std::collections::HashMap;

use serde::Serialize;

use crate::cause::Cause;
use crate::error::{BlankLocation, BoxError, ConfigError, SourceResolvingError};

/// Part of the request a [`Source`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceKind {
    Query,
    Header,
    Body,
}

/// Location of the invalid input. The location string must be non-blank,
/// enforced at construction.
///
/// # Examples
///
/// ```
/// use faultline::resolver::source::{Source, SourceKind};
///
/// let source = Source::new(SourceKind::Query, "page")?;
/// assert_eq!(source.location(), "page");
/// assert!(Source::new(SourceKind::Body, "   ").is_err());
/// # Ok::<(), faultline::error::BlankLocation>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    #[serde(rename = "type")]
    kind: SourceKind,
    location: String,
}

impl Source {
    pub fn new(kind: SourceKind, location: impl Into<String>) -> Result<Self, BlankLocation> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(BlankLocation);
        }
        Ok(Self { kind, location })
    }

    pub fn query(location: impl Into<String>) -> Result<Self, BlankLocation> {
        Self::new(SourceKind::Query, location)
    }

    pub fn header(location: impl Into<String>) -> Result<Self, BlankLocation> {
        Self::new(SourceKind::Header, location)
    }

    pub fn body(location: impl Into<String>) -> Result<Self, BlankLocation> {
        Self::new(SourceKind::Body, location)
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Derives the [`Source`] for a cause.
pub trait DataSourceResolver<T: ?Sized>: Send + Sync {
    fn source_for(&self, cause: &Cause<'_, T>) -> Result<Source, SourceResolvingError>;
}

/// Resolver returning the same source for every cause.
pub fn fixed(source: Source) -> FixedSourceResolver {
    FixedSourceResolver { source }
}

#[derive(Debug, Clone)]
pub struct FixedSourceResolver {
    source: Source,
}

impl<T: ?Sized> DataSourceResolver<T> for FixedSourceResolver {
    fn source_for(&self, _cause: &Cause<'_, T>) -> Result<Source, SourceResolvingError> {
        Ok(self.source.clone())
    }
}

/// Resolver looking the source up by cause key; absence of the exact key is
/// a hard failure naming the key.
pub fn mapped<I, K>(entries: I) -> Result<MappedSourceResolver, ConfigError>
where
    I: IntoIterator<Item = (K, Source)>,
    K: Into<String>,
{
    let sources: HashMap<String, Source> = entries
        .into_iter()
        .map(|(key, source)| (key.into(), source))
        .collect();
    if sources.is_empty() {
        return Err(ConfigError::EmptyMapping {
            component: "mapped data source resolver",
        });
    }
    Ok(MappedSourceResolver { sources })
}

#[derive(Debug, Clone)]
pub struct MappedSourceResolver {
    sources: HashMap<String, Source>,
}

impl<T: ?Sized> DataSourceResolver<T> for MappedSourceResolver {
    fn source_for(&self, cause: &Cause<'_, T>) -> Result<Source, SourceResolvingError> {
        self.sources
            .get(cause.key())
            .cloned()
            .ok_or_else(|| SourceResolvingError::UnmappedKey {
                key: cause.key().to_owned(),
            })
    }
}

/// Resolver computing the source with a caller-supplied function.
pub fn from_fn<F>(f: F) -> FnSourceResolver<F> {
    FnSourceResolver { f }
}

pub struct FnSourceResolver<F> {
    f: F,
}

impl<T, F> DataSourceResolver<T> for FnSourceResolver<F>
where
    T: ?Sized,
    F: Fn(&Cause<'_, T>) -> Result<Source, BoxError> + Send + Sync,
{
    fn source_for(&self, cause: &Cause<'_, T>) -> Result<Source, SourceResolvingError> {
        (self.f)(cause).map_err(|source| SourceResolvingError::Failed {
            key: cause.key().to_owned(),
            source,
        })
    }
}
