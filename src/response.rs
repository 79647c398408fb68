//! Response assembly: status code plus payload.

use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, GenerationError};
use crate::payload::{ErrorPayload, PayloadGenerator};

/// An HTTP status code. Plain value; this crate never talks HTTP itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HttpStatus(u16);

impl HttpStatus {
    pub const BAD_REQUEST: HttpStatus = HttpStatus(400);
    pub const UNAUTHORIZED: HttpStatus = HttpStatus(401);
    pub const FORBIDDEN: HttpStatus = HttpStatus(403);
    pub const NOT_FOUND: HttpStatus = HttpStatus(404);
    pub const CONFLICT: HttpStatus = HttpStatus(409);
    pub const UNPROCESSABLE_ENTITY: HttpStatus = HttpStatus(422);
    pub const TOO_MANY_REQUESTS: HttpStatus = HttpStatus(429);
    pub const INTERNAL_SERVER_ERROR: HttpStatus = HttpStatus(500);
    pub const SERVICE_UNAVAILABLE: HttpStatus = HttpStatus(503);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The final conversion result: status plus payload. A value object fully
/// determined by generator output; the host reads both fields and writes
/// the wire response itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    status: HttpStatus,
    payload: ErrorPayload,
}

impl ErrorResponse {
    pub fn new(status: HttpStatus, payload: ErrorPayload) -> Self {
        Self { status, payload }
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    pub fn payload(&self) -> &ErrorPayload {
        &self.payload
    }

    pub fn into_parts(self) -> (HttpStatus, ErrorPayload) {
        (self.status, self.payload)
    }
}

/// Supplies the status code for a response. Side-effect-free; implemented by
/// [`HttpStatus`] itself for the common fixed-status case and by any
/// `Fn() -> HttpStatus` closure.
pub trait StatusProvider: Send + Sync {
    fn status(&self) -> HttpStatus;
}

impl StatusProvider for HttpStatus {
    fn status(&self) -> HttpStatus {
        *self
    }
}

impl<F> StatusProvider for F
where
    F: Fn() -> HttpStatus + Send + Sync,
{
    fn status(&self) -> HttpStatus {
        (self)()
    }
}

/// Converts a fault into an [`ErrorResponse`].
pub trait ResponseGenerator<T: ?Sized>: Send + Sync {
    fn response_of(&self, fault: &T) -> Result<ErrorResponse, GenerationError>;
}

/// The standard response generator: a payload generator plus a status
/// provider. The payload is generated first; the status must not depend on
/// it.
pub struct PayloadResponseGenerator<T: ?Sized + 'static> {
    payload: Box<dyn PayloadGenerator<T>>,
    status: Box<dyn StatusProvider>,
}

impl<T: ?Sized + 'static> PayloadResponseGenerator<T> {
    pub fn builder() -> PayloadResponseGeneratorBuilder<T> {
        PayloadResponseGeneratorBuilder {
            payload: None,
            status: None,
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for PayloadResponseGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadResponseGenerator").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> ResponseGenerator<T> for PayloadResponseGenerator<T> {
    fn response_of(&self, fault: &T) -> Result<ErrorResponse, GenerationError> {
        let payload = self.payload.payload_of(fault)?;
        let status = self.status.status();
        tracing::debug!(status = status.code(), "assembled error response");
        Ok(ErrorResponse::new(status, payload))
    }
}

/// Builder for [`PayloadResponseGenerator`]. `build()` fails fast, listing
/// every missing required field.
pub struct PayloadResponseGeneratorBuilder<T: ?Sized + 'static> {
    payload: Option<Box<dyn PayloadGenerator<T>>>,
    status: Option<Box<dyn StatusProvider>>,
}

impl<T: ?Sized + 'static> PayloadResponseGeneratorBuilder<T> {
    pub fn payload(mut self, generator: impl PayloadGenerator<T> + 'static) -> Self {
        self.payload = Some(Box::new(generator));
        self
    }

    pub fn status(mut self, provider: impl StatusProvider + 'static) -> Self {
        self.status = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<PayloadResponseGenerator<T>, ConfigError> {
        match (self.payload, self.status) {
            (Some(payload), Some(status)) => Ok(PayloadResponseGenerator { payload, status }),
            (payload, status) => {
                let mut fields = Vec::new();
                if payload.is_none() {
                    fields.push("payload generator");
                }
                if status.is_none() {
                    fields.push("status provider");
                }
                Err(ConfigError::MissingFields {
                    component: "response generator",
                    fields,
                })
            }
        }
    }
}
