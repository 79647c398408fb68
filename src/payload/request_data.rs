//! Generator for request-data error payloads.

use crate::cause::CauseResolver;
use crate::error::{ConfigError, GenerationError, PayloadGenerationError};
use crate::resolver::code::CodeResolver;
use crate::resolver::message::MessageResolver;
use crate::resolver::source::DataSourceResolver;

use super::{ErrorPayload, PayloadGenerator, RequestDataError, SingleErrorGenerator, SingleErrorPayload};

/// Assembles `{code, message, source}` payloads: like the operation error
/// generator, plus a data-source resolution locating the invalid input.
pub struct RequestDataErrorGenerator<T: ?Sized + 'static> {
    cause: Box<dyn CauseResolver<T>>,
    code: Box<dyn CodeResolver<T>>,
    message: Box<dyn MessageResolver<T>>,
    source: Box<dyn DataSourceResolver<T>>,
}

impl<T: ?Sized + 'static> RequestDataErrorGenerator<T> {
    pub fn builder() -> RequestDataErrorGeneratorBuilder<T> {
        RequestDataErrorGeneratorBuilder {
            cause: None,
            code: None,
            message: None,
            source: None,
        }
    }
}

impl<T: ?Sized + 'static> SingleErrorGenerator<T> for RequestDataErrorGenerator<T> {
    fn single_payload_of(&self, fault: &T) -> Result<SingleErrorPayload, PayloadGenerationError> {
        let cause = self.cause.cause_of(fault)?;
        tracing::debug!(key = cause.key(), "resolved cause");
        let code = self.code.code_for(&cause)?;
        let message = self.message.message_for(&cause)?;
        let source = self.source.source_for(&cause)?;
        tracing::debug!(
            code = code.as_str(),
            location = source.location(),
            "assembled request data error payload"
        );
        Ok(SingleErrorPayload::RequestData(RequestDataError::new(
            code, message, source,
        )))
    }
}

impl<T: ?Sized + 'static> PayloadGenerator<T> for RequestDataErrorGenerator<T> {
    fn payload_of(&self, fault: &T) -> Result<ErrorPayload, GenerationError> {
        Ok(self.single_payload_of(fault)?.into())
    }
}

/// Builder for [`RequestDataErrorGenerator`]. `build()` fails fast, listing
/// every missing required field.
pub struct RequestDataErrorGeneratorBuilder<T: ?Sized + 'static> {
    cause: Option<Box<dyn CauseResolver<T>>>,
    code: Option<Box<dyn CodeResolver<T>>>,
    message: Option<Box<dyn MessageResolver<T>>>,
    source: Option<Box<dyn DataSourceResolver<T>>>,
}

impl<T: ?Sized + 'static> RequestDataErrorGeneratorBuilder<T> {
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

    pub fn source(mut self, resolver: impl DataSourceResolver<T> + 'static) -> Self {
        self.source = Some(Box::new(resolver));
        self
    }

    pub fn build(self) -> Result<RequestDataErrorGenerator<T>, ConfigError> {
        match (self.cause, self.code, self.message, self.source) {
            (Some(cause), Some(code), Some(message), Some(source)) => {
                Ok(RequestDataErrorGenerator {
                    cause,
                    code,
                    message,
                    source,
                })
            }
            (cause, code, message, source) => {
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
                if source.is_none() {
                    fields.push("data source resolver");
                }
                Err(ConfigError::MissingFields {
                    component: "request data error generator",
                    fields,
                })
            }
        }
    }
}
