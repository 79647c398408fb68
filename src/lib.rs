//! Configuration-driven conversion of application faults into structured
//! error responses.
//!
//! A *fault* is any error value your application produces. Faultline turns
//! it into an [`ErrorResponse`](response::ErrorResponse) — an HTTP status
//! code plus a typed error payload — through a pipeline configured once and
//! then treated as read-only:
//!
//! 1. A [cause resolver](cause) derives a `(key, context)` pair from the
//!    fault.
//! 2. [Field resolvers](resolver) derive the code, message and (for invalid
//!    input) data source from that cause.
//! 3. A [payload generator](payload) assembles one error payload, or splits
//!    the fault into several sub-errors.
//! 4. A [response generator](response) pairs the payload with a status code.
//! 5. The [registry](registry) dispatches an arbitrary fault to the right
//!    response generator by walking its declared type hierarchy
//!    breadth-first, with a single-flight memoized lookup cache.
//!
//! There is no transport layer here: the host application serializes the
//! payload and writes the status itself.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use faultline::prelude::*;
//! use faultline::{cause, resolver::code, resolver::message};
//!
//! #[derive(Debug)]
//! struct ServiceFault {
//!     detail: String,
//! }
//!
//! let hierarchy = Arc::new(TypeHierarchy::builder().build());
//!
//! let payload = OperationErrorGenerator::<ServiceFault>::builder()
//!     .cause(cause::by_type(Arc::clone(&hierarchy)))
//!     .code(code::from_cause_key())
//!     .message(message::fixed("Service failure"))
//!     .build()?;
//!
//! let responder = PayloadResponseGenerator::builder()
//!     .payload(payload)
//!     .status(HttpStatus::INTERNAL_SERVER_ERROR)
//!     .build()?;
//!
//! let registry = FaultRegistry::builder()
//!     .hierarchy(hierarchy)
//!     .register::<ServiceFault>(responder)
//!     .build();
//! let composite = CompositeResponseGenerator::new(registry);
//!
//! let fault = ServiceFault { detail: "backend gone".into() };
//! let response = composite.response_of(&fault)?;
//! assert_eq!(response.status().code(), 500);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Hierarchy-aware dispatch
//!
//! Rust has no runtime supertype graph, so the hierarchy is declared at
//! configuration time. A generator mapped to an ancestor type serves every
//! descendant without its own mapping, while an explicitly mapped subtype
//! always wins:
//!
//! ```
//! use std::sync::Arc;
//! use faultline::prelude::*;
//! use faultline::{cause, resolver::code, resolver::message};
//!
//! #[derive(Debug)]
//! struct NetworkFault;
//! #[derive(Debug)]
//! struct Timeout;
//!
//! let hierarchy = Arc::new(
//!     TypeHierarchy::builder()
//!         .link::<Timeout, NetworkFault>()
//!         .build(),
//! );
//!
//! // One generator for the whole NetworkFault family, written against
//! // `dyn Fault` so any descendant can dispatch to it.
//! let payload = OperationErrorGenerator::<dyn Fault>::builder()
//!     .cause(cause::fixed("NETWORK_FAULT"))
//!     .code(code::from_cause_key())
//!     .message(message::fixed("Upstream unavailable"))
//!     .build()?;
//! let responder = PayloadResponseGenerator::builder()
//!     .payload(payload)
//!     .status(HttpStatus::SERVICE_UNAVAILABLE)
//!     .build()?;
//!
//! let registry = FaultRegistry::builder()
//!     .hierarchy(hierarchy)
//!     .register_dyn::<NetworkFault>(responder)
//!     .build();
//! let composite = CompositeResponseGenerator::new(registry);
//!
//! // Timeout has no mapping of its own; its ancestor's generator answers.
//! let response = composite.response_of(&Timeout)?;
//! assert_eq!(response.status().code(), 503);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Cause resolution: deriving why a fault occurred.
pub mod cause;
/// The failure taxonomy of the pipeline itself.
pub mod error;
/// Messages, locales and the translation hook.
pub mod message;
/// Error payloads and payload generators.
pub mod payload;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Type tokens, the declared hierarchy, the registry and the composite
/// entry point.
pub mod registry;
/// Code, message and data-source resolvers.
pub mod resolver;
/// Status codes and response assembly.
pub mod response;

pub use cause::{Cause, CauseResolver};
pub use error::{BoxError, ConfigError, GenerationError, PayloadGenerationError};
pub use message::{Locale, Message, Translator};
pub use payload::{
    ErrorPayload, MultiErrorGenerator, MultiErrorPayload, OperationError, OperationErrorGenerator,
    PayloadGenerator, RequestDataError, RequestDataErrorGenerator, SingleErrorGenerator,
    SingleErrorPayload,
};
pub use registry::{CompositeResponseGenerator, Fault, FaultRegistry, TypeHierarchy, TypeToken};
pub use resolver::{CodeResolver, DataSourceResolver, MessageResolver, Source, SourceKind};
pub use response::{
    ErrorResponse, HttpStatus, PayloadResponseGenerator, ResponseGenerator, StatusProvider,
};
