//! Generator splitting one fault into several sub-errors.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{ConfigError, GenerationError, PayloadGenerationError};

use super::{ErrorPayload, MultiErrorPayload, PayloadGenerator, SingleErrorGenerator, SingleErrorPayload};

/// Inline capacity for the accumulation buffer; most faults carry a handful
/// of sub-errors.
const INLINE_ERRORS: usize = 4;

/// Splits a fault of type `T` into sub-faults of type `R` and applies a
/// single-error generator to each, preserving extraction order.
///
/// Extracting zero sub-faults is a fatal
/// [`NoSubErrorsExtracted`](GenerationError::NoSubErrorsExtracted); a
/// resulting list of exactly one payload collapses to the bare payload. A
/// failing sub-generator discards the whole result — no partial multi-error
/// payload is ever returned.
///
/// # Examples
///
/// ```
/// use faultline::cause;
/// use faultline::payload::{
///     ErrorPayload, MultiErrorGenerator, OperationErrorGenerator, PayloadGenerator,
/// };
/// use faultline::resolver::{code, message};
///
/// #[derive(Debug)]
/// struct Violations(Vec<String>);
///
/// let sub = OperationErrorGenerator::<String>::builder()
///     .cause(cause::from_fn(|field: &String| Ok::<_, faultline::BoxError>(field.clone())))
///     .code(code::from_cause_key())
///     .message(message::fixed("Invalid field"))
///     .build()?;
///
/// let generator = MultiErrorGenerator::<Violations, String>::builder()
///     .extractor(|fault: &Violations| fault.0.clone())
///     .delegate(sub)
///     .build()?;
///
/// let fault = Violations(vec!["name".into(), "email".into()]);
/// let payload = generator.payload_of(&fault)?;
/// match payload {
///     ErrorPayload::Multi(multi) => assert_eq!(multi.errors().len(), 2),
///     other => panic!("expected a multi-error payload, got {other:?}"),
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct MultiErrorGenerator<T: ?Sized + 'static, R: 'static> {
    extract: Box<dyn Fn(&T) -> Vec<R> + Send + Sync>,
    delegate: Box<dyn SingleErrorGenerator<R>>,
}

impl<T: ?Sized + 'static, R: 'static> MultiErrorGenerator<T, R> {
    pub fn builder() -> MultiErrorGeneratorBuilder<T, R> {
        MultiErrorGeneratorBuilder {
            extract: None,
            delegate: None,
        }
    }
}

impl<T: ?Sized + 'static, R: 'static> fmt::Debug for MultiErrorGenerator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiErrorGenerator").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static, R: 'static> PayloadGenerator<T> for MultiErrorGenerator<T, R> {
    fn payload_of(&self, fault: &T) -> Result<ErrorPayload, GenerationError> {
        let sub_faults = (self.extract)(fault);
        if sub_faults.is_empty() {
            return Err(GenerationError::NoSubErrorsExtracted);
        }
        if sub_faults.len() == 1 {
            tracing::warn!(
                "extractor produced a single sub-error; a single-error generator would fit better"
            );
        }
        let mut payloads: SmallVec<[SingleErrorPayload; INLINE_ERRORS]> =
            SmallVec::with_capacity(sub_faults.len());
        for sub_fault in &sub_faults {
            payloads.push(self.delegate.single_payload_of(sub_fault)?);
        }
        tracing::debug!(count = payloads.len(), "generated sub-error payloads");
        if payloads.len() == 1 {
            return Ok(payloads.remove(0).into());
        }
        let multi = MultiErrorPayload::new(payloads.into_vec()).map_err(PayloadGenerationError::new)?;
        Ok(ErrorPayload::Multi(multi))
    }
}

/// Builder for [`MultiErrorGenerator`]. `build()` fails fast, listing every
/// missing required field.
pub struct MultiErrorGeneratorBuilder<T: ?Sized + 'static, R: 'static> {
    extract: Option<Box<dyn Fn(&T) -> Vec<R> + Send + Sync>>,
    delegate: Option<Box<dyn SingleErrorGenerator<R>>>,
}

impl<T: ?Sized + 'static, R: 'static> MultiErrorGeneratorBuilder<T, R> {
    /// The sub-error extractor: how to split the fault.
    pub fn extractor(mut self, f: impl Fn(&T) -> Vec<R> + Send + Sync + 'static) -> Self {
        self.extract = Some(Box::new(f));
        self
    }

    /// The single-error generator applied to each extracted sub-fault.
    pub fn delegate(mut self, generator: impl SingleErrorGenerator<R> + 'static) -> Self {
        self.delegate = Some(Box::new(generator));
        self
    }

    pub fn build(self) -> Result<MultiErrorGenerator<T, R>, ConfigError> {
        match (self.extract, self.delegate) {
            (Some(extract), Some(delegate)) => Ok(MultiErrorGenerator { extract, delegate }),
            (extract, delegate) => {
                let mut fields = Vec::new();
                if extract.is_none() {
                    fields.push("sub-error extractor");
                }
                if delegate.is_none() {
                    fields.push("sub-error generator");
                }
                Err(ConfigError::MissingFields {
                    component: "multi error generator",
                    fields,
                })
            }
        }
    }
}
