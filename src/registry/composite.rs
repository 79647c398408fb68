//! The single runtime entry point: dispatch any fault to its registered
//! generator.

use crate::error::GenerationError;
use crate::response::{ErrorResponse, ResponseGenerator};

use super::lookup::FaultRegistry;
use super::token::Fault;

/// Dispatches an arbitrary fault through the registry to its sub-generator
/// and returns that generator's response verbatim. A registry miss becomes
/// [`NoGeneratorFound`](GenerationError::NoGeneratorFound) carrying the
/// fault's debug representation.
///
/// # Examples
///
/// ```
/// use faultline::prelude::*;
///
/// #[derive(Debug)]
/// struct Unmapped;
///
/// let composite = CompositeResponseGenerator::new(FaultRegistry::builder().build());
/// let error = composite.response_of(&Unmapped).unwrap_err();
/// assert!(error.to_string().contains("Unmapped"));
/// ```
pub struct CompositeResponseGenerator {
    registry: FaultRegistry,
}

impl CompositeResponseGenerator {
    pub fn new(registry: FaultRegistry) -> Self {
        Self { registry }
    }

    pub fn response_of(&self, fault: &dyn Fault) -> Result<ErrorResponse, GenerationError> {
        match self.registry.search_for(fault) {
            Some(generator) => generator.response_of(fault),
            None => Err(GenerationError::NoGeneratorFound {
                fault: fault.describe(),
            }),
        }
    }

    pub fn registry(&self) -> &FaultRegistry {
        &self.registry
    }
}

impl ResponseGenerator<dyn Fault> for CompositeResponseGenerator {
    fn response_of(&self, fault: &dyn Fault) -> Result<ErrorResponse, GenerationError> {
        CompositeResponseGenerator::response_of(self, fault)
    }
}
