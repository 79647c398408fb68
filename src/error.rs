//! Failure taxonomy for the conversion pipeline.
//!
//! Three layers, mirroring the stages of the pipeline:
//!
//! 1. [`ConfigError`] — construction-time problems (missing builder fields,
//!    empty mappings). Nothing partially built is ever returned.
//! 2. Per-resolver failures ([`CauseResolvingError`], [`CodeResolvingError`],
//!    [`MessageResolvingError`], [`SourceResolvingError`],
//!    [`TranslationError`]) — a resolver could not produce a value for one
//!    input.
//! 3. [`GenerationError`] — what generator entry points return. Resolver
//!    failures arrive wrapped in the [`PayloadGenerationError`] umbrella with
//!    the original failure preserved as `source()`; mapping gaps surface as
//!    the distinct `NoSubErrorsExtracted` / `NoGeneratorFound` variants.

use thiserror::Error;

/// Boxed error type used wherever caller-supplied functions can fail.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Construction-time configuration error. Always fatal to `build()`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required builder fields were never supplied. Lists every
    /// missing field, not just the first.
    #[error("{component} is missing required configuration: {}", .fields.join(", "))]
    MissingFields {
        component: &'static str,
        fields: Vec<&'static str>,
    },

    /// A map-based resolver was constructed with an empty mapping.
    #[error("{component} requires a non-empty mapping")]
    EmptyMapping { component: &'static str },
}

/// A cause resolver could not derive a [`Cause`](crate::cause::Cause).
#[derive(Error, Debug)]
pub enum CauseResolvingError {
    /// The caller-supplied key function failed.
    #[error("failed to resolve a cause for the fault")]
    Failed {
        #[source]
        source: BoxError,
    },

    /// The by-type resolver exhausted the fault type's entire ancestor chain
    /// without finding a resolvable qualified name.
    #[error("no resolvable qualified name in the type hierarchy of {type_repr}")]
    UnresolvableTypeName { type_repr: String },
}

/// A code resolver could not produce an error code for a cause.
#[derive(Error, Debug)]
pub enum CodeResolvingError {
    /// The mapping holds no entry for this cause key. Map-based resolvers
    /// never fall back to a default.
    #[error("no error code mapped for cause key `{key}`")]
    UnmappedKey { key: String },

    /// The caller-supplied code function failed.
    #[error("failed to resolve an error code for cause key `{key}`")]
    Failed {
        key: String,
        #[source]
        source: BoxError,
    },
}

/// A message resolver could not produce a message for a cause.
#[derive(Error, Debug)]
pub enum MessageResolvingError {
    #[error("no message mapped for cause key `{key}`")]
    UnmappedKey { key: String },

    #[error("failed to resolve a message for cause key `{key}`")]
    Failed {
        key: String,
        #[source]
        source: BoxError,
    },
}

/// A data-source resolver could not locate the invalid input for a cause.
#[derive(Error, Debug)]
pub enum SourceResolvingError {
    #[error("no data source mapped for cause key `{key}`")]
    UnmappedKey { key: String },

    #[error("failed to resolve a data source for cause key `{key}`")]
    Failed {
        key: String,
        #[source]
        source: BoxError,
    },
}

/// A translator could not translate a message text.
///
/// `LocaleNotSupported` is the one failure a decorating translator may
/// recover from (see [`or_default`](crate::message::or_default)); `Failed`
/// always propagates unchanged.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("locale `{0}` is not supported")]
    LocaleNotSupported(crate::message::Locale),

    #[error("translation failed: {reason}")]
    Failed { reason: String },
}

/// A [`Source`](crate::resolver::source::Source) location was blank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("source location must not be blank")]
pub struct BlankLocation;

/// A multi-error payload was constructed with fewer than two errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a multi-error payload requires at least two errors, got {0}")]
pub struct TooFewErrors(pub usize);

/// Umbrella failure for the resolve-and-assemble pipeline of a payload
/// generator. Callers see this one type no matter which stage failed; the
/// original failure is preserved as [`source`](std::error::Error::source).
#[derive(Error, Debug)]
#[error("failed to generate an error payload")]
pub struct PayloadGenerationError {
    #[source]
    source: BoxError,
}

impl PayloadGenerationError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The wrapped failure, for callers that want to inspect the stage that
    /// actually failed.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl From<CauseResolvingError> for PayloadGenerationError {
    fn from(source: CauseResolvingError) -> Self {
        Self::new(source)
    }
}

impl From<CodeResolvingError> for PayloadGenerationError {
    fn from(source: CodeResolvingError) -> Self {
        Self::new(source)
    }
}

impl From<MessageResolvingError> for PayloadGenerationError {
    fn from(source: MessageResolvingError) -> Self {
        Self::new(source)
    }
}

impl From<SourceResolvingError> for PayloadGenerationError {
    fn from(source: SourceResolvingError) -> Self {
        Self::new(source)
    }
}

/// Failure returned by payload and response generator entry points.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Something in the resolve-and-assemble pipeline failed.
    #[error(transparent)]
    Payload(#[from] PayloadGenerationError),

    /// A multi-error generator's extractor produced zero sub-errors.
    #[error("no sub-errors were extracted from the fault")]
    NoSubErrorsExtracted,

    /// The registry holds no generator anywhere in the fault's type
    /// hierarchy. Carries the fault's debug representation for diagnostics.
    #[error("no response generator found for fault: {fault}")]
    NoGeneratorFound { fault: String },

    /// A generator registered for a concrete fault type was dispatched a
    /// value of a different type. This indicates a hierarchy mapping that
    /// should have been registered against `dyn Fault` instead.
    #[error("generator registered for `{expected}` received an incompatible fault: {fault}")]
    TypeMismatch {
        expected: &'static str,
        fault: String,
    },
}
