//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use faultline::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Entry point**: [`CompositeResponseGenerator`], [`FaultRegistry`],
//!   [`TypeHierarchy`]
//! - **Generators**: [`OperationErrorGenerator`],
//!   [`RequestDataErrorGenerator`], [`MultiErrorGenerator`],
//!   [`PayloadResponseGenerator`]
//! - **Value types**: [`Cause`], [`Message`], [`Locale`], [`Source`],
//!   [`ErrorPayload`], [`ErrorResponse`], [`HttpStatus`]
//! - **Traits**: the resolver and generator contracts plus [`Fault`]
//!
//! Strategy constructors stay in their modules (`cause::fixed`,
//! `resolver::code::mapped`, ...) to keep the short names unambiguous.

pub use crate::cause::{Cause, CauseResolver};
pub use crate::error::{ConfigError, GenerationError, PayloadGenerationError};
pub use crate::message::{Locale, Message, Translator};
pub use crate::payload::{
    ErrorPayload, MultiErrorGenerator, MultiErrorPayload, OperationError,
    OperationErrorGenerator, PayloadGenerator, RequestDataError, RequestDataErrorGenerator,
    SingleErrorGenerator, SingleErrorPayload,
};
pub use crate::registry::{
    CompositeResponseGenerator, Fault, FaultRegistry, TypeHierarchy, TypeToken,
};
pub use crate::resolver::code::CodeResolver;
pub use crate::resolver::message::MessageResolver;
pub use crate::resolver::source::{DataSourceResolver, Source, SourceKind};
pub use crate::response::{
    ErrorResponse, HttpStatus, PayloadResponseGenerator, ResponseGenerator, StatusProvider,
};
