//! Generator for operation error payloads.

use std::fmt;

use crate::cause::CauseResolver;
use crate::error::{ConfigError, GenerationError, PayloadGenerationError};
use crate::resolver::code::CodeResolver;
use crate::resolver::message::MessageResolver;

use super::{ErrorPayload, OperationError, PayloadGenerator, SingleErrorGenerator, SingleErrorPayload};

/// Assembles `{code, message}` payloads: resolve cause, then code and
/// message from it.
///
/// # Examples
///
/// ```
/// use faultline::cause;
/// use faultline::payload::{OperationErrorGenerator, SingleErrorGenerator};
/// use faultline::resolver::{code, message};
///
/// #[derive(Debug)]
/// struct QuotaExceeded;
///
/// let generator = OperationErrorGenerator::<QuotaExceeded>::builder()
///     .cause(cause::fixed("QUOTA_EXCEEDED"))
///     .code(code::from_cause_key())
///     .message(message::fixed("Quota exceeded"))
///     .build()?;
///
/// let payload = generator.single_payload_of(&QuotaExceeded)?;
/// assert_eq!(payload.code(), "QUOTA_EXCEEDED");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct OperationErrorGenerator<T: ?Sized + 'static> {
    cause: Box<dyn CauseResolver<T>>,
    code: Box<dyn CodeResolver<T>>,
    message: Box<dyn MessageResolver<T>>,
}

impl<T: ?Sized + 'static> OperationErrorGenerator<T> {
    pub fn builder() -> OperationErrorGeneratorBuilder<T> {
        OperationErrorGeneratorBuilder {
            cause: None,
            code: None,
            message: None,
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for OperationErrorGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationErrorGenerator").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> SingleErrorGenerator<T> for OperationErrorGenerator<T> {
    fn single_payload_of(&self, fault: &T) -> Result<SingleErrorPayload, PayloadGenerationError> {
        let cause = self.cause.cause_of(fault)?;
        tracing::debug!(key = cause.key(), "resolved cause");
        let code = self.code.code_for(&cause)?;
        let message = self.message.message_for(&cause)?;
        tracing::debug!(code = code.as_str(), "assembled operation error payload");
        Ok(SingleErrorPayload::Operation(OperationError::new(code, message)))
    }
}

impl<T: ?Sized + 'static> PayloadGenerator<T> for OperationErrorGenerator<T> {
    fn payload_of(&self, fault: &T) -> Result<ErrorPayload, GenerationError> {
        Ok(self.single_payload_of(fault)?.into())
    }
}

/// Builder for [`OperationErrorGenerator`]. `build()` fails fast, listing
/// every missing required field.
pub struct OperationErrorGeneratorBuilder<T: ?Sized + 'static> {
    cause: Option<Box<dyn CauseResolver<T>>>,
    code: Option<Box<dyn CodeResolver<T>>>,
    message: Option<Box<dyn MessageResolver<T>>>,
}

impl<T: ?Sized + 'static> OperationErrorGeneratorBuilder<T> {
    pub fn cause(mut self, resolver: impl CauseResolver<T> + 'static) -> Self {
        self.cause = Some(Box::new(resolver));
        self
    }

    pub fn code(mut self, resolver: impl CodeResolver<T> + 'static) -> Self {
        self.code = Some(Box::new(resolver));
        self
    }

    pub fn message(mut self, resolver: impl MessageResolver<T> + 'static) -> Self {
        self.message = Some(Box::new(resolver));
        self
    }

    pub fn build(self) -> Result<OperationErrorGenerator<T>, ConfigError> {
        match (self.cause, self.code, self.message) {
            (Some(cause), Some(code), Some(message)) => Ok(OperationErrorGenerator {
                cause,
                code,
                message,
            }),
            (cause, code, message) => {
                let mut fields = Vec::new();
                if cause.is_none() {
                    fields.push("cause resolver");
                }
                if code.is_none() {
                    fields.push("code resolver");
                }
                if message.is_none() {
                    fields.push("message resolver");
                }
                Err(ConfigError::MissingFields {
                    component: "operation error generator",
                    fields,
                })
            }
        }
    }
}
