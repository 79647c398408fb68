//! Error payloads and the generators that assemble them.
//!
//! [`ErrorPayload`] is a closed sum type: an operation error, a
//! request-data error, or a multi-error container. The host serializes it to
//! the wire; this crate only builds it. Generators come in two layers:
//! single-error ([`OperationErrorGenerator`], [`RequestDataErrorGenerator`])
//! and the composite [`MultiErrorGenerator`] which splits one fault into
//! sub-faults and delegates each to a single-error generator.

use serde::Serialize;

use crate::error::{GenerationError, PayloadGenerationError, TooFewErrors};
use crate::message::Message;
use crate::resolver::source::Source;

mod multi;
mod operation;
mod request_data;

pub use multi::{MultiErrorGenerator, MultiErrorGeneratorBuilder};
pub use operation::{OperationErrorGenerator, OperationErrorGeneratorBuilder};
pub use request_data::{RequestDataErrorGenerator, RequestDataErrorGeneratorBuilder};

/// An error caused by the service itself while performing the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationError {
    code: String,
    message: Message,
}

impl OperationError {
    pub fn new(code: impl Into<String>, message: impl Into<Message>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &Message {
        &self.message
    }
}

/// An error caused by invalid request data, pointing at the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDataError {
    code: String,
    message: Message,
    source: Source,
}

impl RequestDataError {
    pub fn new(code: impl Into<String>, message: impl Into<Message>, source: Source) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            source,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// A payload describing exactly one error. This is what multi-error
/// containers hold; nesting containers is not expressible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SingleErrorPayload {
    Operation(OperationError),
    RequestData(RequestDataError),
}

impl SingleErrorPayload {
    pub fn code(&self) -> &str {
        match self {
            Self::Operation(error) => error.code(),
            Self::RequestData(error) => error.code(),
        }
    }

    pub fn message(&self) -> &Message {
        match self {
            Self::Operation(error) => error.message(),
            Self::RequestData(error) => error.message(),
        }
    }
}

impl From<OperationError> for SingleErrorPayload {
    fn from(error: OperationError) -> Self {
        Self::Operation(error)
    }
}

impl From<RequestDataError> for SingleErrorPayload {
    fn from(error: RequestDataError) -> Self {
        Self::RequestData(error)
    }
}

/// An ordered list of at least two single-error payloads, enforced at
/// construction. The standard generator path never produces a list of one —
/// a single resolved sub-error collapses to the bare payload instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiErrorPayload {
    errors: Vec<SingleErrorPayload>,
}

impl MultiErrorPayload {
    pub fn new(errors: Vec<SingleErrorPayload>) -> Result<Self, TooFewErrors> {
        if errors.len() < 2 {
            return Err(TooFewErrors(errors.len()));
        }
        Ok(Self { errors })
    }

    pub fn errors(&self) -> &[SingleErrorPayload] {
        &self.errors
    }
}

/// The complete, closed payload hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Operation(OperationError),
    RequestData(RequestDataError),
    Multi(MultiErrorPayload),
}

impl From<SingleErrorPayload> for ErrorPayload {
    fn from(payload: SingleErrorPayload) -> Self {
        match payload {
            SingleErrorPayload::Operation(error) => Self::Operation(error),
            SingleErrorPayload::RequestData(error) => Self::RequestData(error),
        }
    }
}

impl From<OperationError> for ErrorPayload {
    fn from(error: OperationError) -> Self {
        Self::Operation(error)
    }
}

impl From<RequestDataError> for ErrorPayload {
    fn from(error: RequestDataError) -> Self {
        Self::RequestData(error)
    }
}

impl From<MultiErrorPayload> for ErrorPayload {
    fn from(payload: MultiErrorPayload) -> Self {
        Self::Multi(payload)
    }
}

/// Assembles an [`ErrorPayload`] from a fault.
pub trait PayloadGenerator<T: ?Sized>: Send + Sync {
    fn payload_of(&self, fault: &T) -> Result<ErrorPayload, GenerationError>;
}

/// A payload generator that always produces exactly one error. Multi-error
/// generators delegate to this narrower contract for each sub-fault.
pub trait SingleErrorGenerator<T: ?Sized>: PayloadGenerator<T> {
    fn single_payload_of(&self, fault: &T) -> Result<SingleErrorPayload, PayloadGenerationError>;
}
